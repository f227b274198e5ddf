//! Validation Module
//!
//! This module validates Ethereum account addresses and payment amounts
//! before the host system acts on them. All checks are pure functions;
//! the [`Validator`] wrapper applies configured limits on top of them.

mod address;
mod amount;
mod validator;


pub use address::{is_valid_address, validate_and_checksum_address};
pub use amount::is_valid_amount;
pub use validator::Validator;
