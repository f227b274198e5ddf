use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors
///
/// The only fallible operation is [`validate_and_checksum_address`], so a
/// single variant covers every error path. The boolean checks
/// ([`is_valid_address`], [`is_valid_amount`]) never construct errors.
///
/// [`validate_and_checksum_address`]: crate::validation::validate_and_checksum_address
/// [`is_valid_address`]: crate::validation::is_valid_address
/// [`is_valid_amount`]: crate::validation::is_valid_amount
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// The input failed the structural address check. Carries the offending
    /// value so callers can surface it in their own error context.
    #[error("Invalid Ethereum address: {0}")]
    InvalidAddress(String),
}
