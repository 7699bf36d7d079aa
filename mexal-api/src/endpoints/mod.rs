//! API endpoint modules organized by resource family.
//!
//! Each module adds typed methods for a group of related Mexal endpoints.

pub mod categories;
pub mod customers;
pub mod movements;
pub mod referees;
