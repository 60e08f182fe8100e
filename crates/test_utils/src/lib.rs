//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! rent and bill splitting test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built houses, months and amounts
//! - `builders`: Builder patterns for rent inputs and bills
//! - `assertions`: Reconciliation and conservation checks
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
