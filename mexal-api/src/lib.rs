//! Mexal API - HTTP client for the Passepartout "Mexal" REST interface.
//!
//! This crate provides a typed client for the Mexal web API: statistical
//! categories, customers and their referees, cursor-paginated warehouse
//! movement records, and the derived last-delivery-date map. It handles
//! credential encoding and the managerial-coordinates header with
//! per-request fiscal-year override.
//!
//! Accessors follow a uniform contract: on success they return the
//! normalized data, on any failure (transport error, non-200 status, or
//! undecodable body) they emit one error event and return `None`.

pub mod client;
pub mod deliveries;
pub mod endpoints;
pub mod response;

// Re-export key types
pub use client::MexalClient;
pub use response::{Envelope, Record};
