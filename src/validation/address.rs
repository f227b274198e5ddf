use crate::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

lazy_static! {
    // The following regex is used to validate Ethereum addresses:
    // a 0x prefix followed by exactly 40 hex characters, case-insensitive.
    static ref ADDRESS_REGEX: Regex = Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap();
}

/// Check whether a string is a structurally valid Ethereum address
///
/// Matches the full string against `^0x[a-fA-F0-9]{40}$`. Anything else,
/// including the empty string, fails the check.
///
/// # Arguments
/// * `address` - The candidate address string
///
/// # Returns
/// `true` if the string is a 0x-prefixed 40-character hex string
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_REGEX.is_match(address)
}

/// Validate an address and return it in its canonical form
///
/// Returns `Err(ValidationError::InvalidAddress)` if the address fails the
/// structural check, otherwise the input string unchanged.
///
/// Note: the EIP-55 mixed-case checksum encoding is NOT applied here; the
/// address is returned exactly as given. Callers that need checksummed
/// output must apply the encoding themselves.
pub fn validate_and_checksum_address(address: &str) -> Result<String, ValidationError> {
    if !is_valid_address(address) {
        warn!("Address validation failed for {:?}", address);
        return Err(ValidationError::InvalidAddress(address.to_string()));
    }

    debug!("Address validation successful for {}", address);
    Ok(address.to_string())
}
