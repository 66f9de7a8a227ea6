//! # Runtime Configuration
//!
//! Capacities loaded once at startup. Everything has a sensible default;
//! a config file only needs the keys it wants to change.

use serde::Deserialize;

/// Capacities for the runtime's pre-allocated structures.
///
/// # Example
///
/// ```rust,ignore
/// let config = RuntimeConfig::from_toml_str(r#"
///     entity_capacity = 4096
/// "#)?;
/// let scheduler = Scheduler::new(&config);
/// ```
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Entity slots to pre-allocate in the registry.
    pub entity_capacity: usize,
    /// Event channel capacity (publishes beyond this are dropped).
    pub event_capacity: usize,
    /// Batch payload buffers to pre-allocate in the pool.
    pub batch_pool_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            entity_capacity: 4096,
            event_capacity: 1024,
            batch_pool_capacity: 8,
        }
    }
}

impl RuntimeConfig {
    /// Parses a config from TOML text.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns the TOML parse error on malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
