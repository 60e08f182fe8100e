//! Command-Line Layer
//!
//! Everything between files on disk and the calculation engine.
//!
//! # Architecture
//!
//! - **DTOs**: rent sheets and bills documents as JSON
//! - **Parsing**: residency cells such as `Dani (0.6); Sam`
//! - **Input**: validation into engine records, monthly sheet lookup
//! - **Reports**: text and JSON rendering
//! - **Templates**: starter sheets
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{commands, config::CliConfig};
//!
//! let config = CliConfig::from_env()?;
//! let report = commands::rent(Path::new("2024-03-01.json"), &config)?;
//! println!("{}", report);
//! ```

pub mod config;
pub mod error;
pub mod dto;
pub mod parse;
pub mod input;
pub mod report;
pub mod template;
pub mod commands;

pub use config::{CliConfig, OutputFormat};
pub use error::CliError;
