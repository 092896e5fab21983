//! Trading 212 → Finanzblick sync.
//!
//! Pulls the full order, dividend, and cash-transaction history from the
//! Trading 212 REST API, normalizes the three upstream record shapes into
//! one canonical transaction model, and writes a semicolon-delimited,
//! German-locale CSV that Finanzblick can import.

pub mod config;
pub mod constants;
pub mod errors;
pub mod export;
pub mod secrets;
pub mod trading212;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
