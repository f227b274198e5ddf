use crate::{ValidationError, config::Config};
use tracing::debug;

use super::{is_valid_amount, validate_and_checksum_address};

/// Applies configured limits on top of the pure validation functions,
/// so callers don't have to thread the amount bound through every call.
pub struct Validator {
    max_amount: Option<f64>,
}

impl Validator {
    pub fn new(config: &Config) -> Self {
        Self {
            max_amount: config.limits.max_amount,
        }
    }

    /// Validate an address
    /// Returns the address unchanged if valid, Err(ValidationError) if invalid
    pub fn validate_address(&self, address: &str) -> Result<String, ValidationError> {
        debug!("Validating address {:?}", address);
        validate_and_checksum_address(address)
    }

    /// Check an amount against the configured bound
    pub fn validate_amount(&self, amount: f64) -> bool {
        is_valid_amount(amount, self.max_amount)
    }
}
