//! Configuration Module
//!
//! This module defines the configuration structure for validation limits.
//! Configuration is loaded from TOML files and parsed using serde.

use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// Loaded from a TOML file supplied by the host system.
///
/// # Example TOML
/// ```toml
/// [limits]
/// max_amount = 1000.0
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub limits: LimitsConfig,
}

/// Amount bounds configuration
///
/// # Fields
/// - `max_amount`: Upper bound for [`is_valid_amount`] checks. Absent means
///   unbounded above.
///
/// [`is_valid_amount`]: crate::validation::is_valid_amount
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_amount: Option<f64>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
