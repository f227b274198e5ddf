//! This crate provides standalone validation utilities for Ethereum-style
//! addresses and numeric amounts, intended to be imported by a larger host
//! system. All checks are pure and synchronous: no I/O, no shared state.

pub mod types; // Defines the error type shared across validation routines.
pub mod validation; // Contains the address and amount validation logic.
pub mod config; // Defines and loads validation limits from TOML.

// Re-export commonly used items for easier access.
pub use types::ValidationError;
pub use validation::{Validator, is_valid_address, is_valid_amount, validate_and_checksum_address};
pub use config::Config;
