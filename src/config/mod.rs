//! Configuration for taxscan operations
//!
//! This module provides the settings the engine needs at startup: which chain's
//! handlers to bootstrap, how many blocks to classify at once, and how to
//! format row dates. Loading the configuration from files or flags is the
//! caller's concern; [`TaxscanConfig`] derives `Deserialize` for that purpose.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use taxscan::TaxscanConfig;
//!
//! let config = TaxscanConfig::default();
//! assert_eq!(config.chain_id, "osmosis-1");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use taxscan::TaxscanConfigBuilder;
//!
//! let config = TaxscanConfigBuilder::new()
//!     .chain_id("cosmoshub-4")
//!     .max_concurrent_blocks(16)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

pub mod constants;

use constants::{chains, DEFAULT_DATE_FORMAT, DEFAULT_MAX_CONCURRENT_BLOCKS};

/// Configuration for taxscan operations
///
/// Use [`TaxscanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxscanConfig {
    /// Chain whose chain-specific handlers are bootstrapped
    /// Default: `osmosis-1`
    pub chain_id: String,

    /// Maximum number of blocks fetched and classified concurrently
    /// Default: 8
    pub max_concurrent_blocks: usize,

    /// `chrono` format string for row dates
    /// Default: `%Y-%m-%d %H:%M:%S`
    pub date_format: String,
}

impl Default for TaxscanConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl TaxscanConfig {
    /// Create config for Osmosis mainnet with the usual row date layout
    pub fn with_common_defaults() -> Self {
        Self {
            chain_id: chains::OSMOSIS.to_string(),
            max_concurrent_blocks: DEFAULT_MAX_CONCURRENT_BLOCKS,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Create minimal config for an arbitrary chain
    ///
    /// No chain-specific handlers apply unless `chain_id` names a known chain.
    /// Blocks are processed one at a time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use taxscan::TaxscanConfig;
    ///
    /// let config = TaxscanConfig::minimal("juno-1");
    /// assert_eq!(config.max_concurrent_blocks, 1);
    /// ```
    pub fn minimal(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            max_concurrent_blocks: 1,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Effective concurrency, never below one
    pub fn effective_concurrency(&self) -> usize {
        self.max_concurrent_blocks.max(1)
    }
}

/// Builder for [`TaxscanConfig`]
///
/// # Example
///
/// ```rust
/// use taxscan::TaxscanConfigBuilder;
///
/// let config = TaxscanConfigBuilder::with_defaults()
///     .date_format("%d/%m/%Y %H:%M")
///     .build();
/// assert_eq!(config.chain_id, "osmosis-1");
/// ```
pub struct TaxscanConfigBuilder {
    config: TaxscanConfig,
}

impl Default for TaxscanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaxscanConfigBuilder {
    /// Create a new builder with common defaults
    pub fn new() -> Self {
        Self {
            config: TaxscanConfig::with_common_defaults(),
        }
    }

    /// Start with common defaults
    ///
    /// Same as [`new`](Self::new); reads better next to [`minimal`](Self::minimal).
    pub fn with_defaults() -> Self {
        Self::new()
    }

    /// Start from [`TaxscanConfig::minimal`]
    pub fn minimal(chain_id: impl Into<String>) -> Self {
        Self {
            config: TaxscanConfig::minimal(chain_id),
        }
    }

    /// Set the chain id used for handler bootstrap
    pub fn chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.config.chain_id = chain_id.into();
        self
    }

    /// Set the number of blocks classified concurrently
    pub fn max_concurrent_blocks(mut self, max: usize) -> Self {
        self.config.max_concurrent_blocks = max;
        self
    }

    /// Set the row date layout
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.config.date_format = format.into();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> TaxscanConfig {
        self.config
    }
}
