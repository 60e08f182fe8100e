//! Sheet documents as read from and written to disk

pub mod rent;
pub mod bills;

pub use rent::{RentSheet, RoomRow};
pub use bills::{BillRow, BillsSheet};
