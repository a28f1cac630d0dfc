//! Well-known protocol names and constants
//!
//! Event type names and attribute keys are defined by the chains themselves;
//! handlers dispatch on these strings exactly as emitted.

/// Chain identifiers with built-in chain-specific handlers
pub mod chains {
    /// Cosmos Hub mainnet
    pub const COSMOS_HUB: &str = "cosmoshub-4";

    /// Osmosis mainnet
    pub const OSMOSIS: &str = "osmosis-1";
}

/// Event type names
pub mod event_types {
    /// Per-message event carrying the `action` attribute
    pub const MESSAGE: &str = "message";

    /// Tokens leaving an account
    pub const COIN_SPENT: &str = "coin_spent";

    /// Tokens arriving at an account
    pub const COIN_RECEIVED: &str = "coin_received";

    /// End block reward distribution
    pub const DISTRIBUTION: &str = "distribution";

    /// End block release of matured unbonding delegations
    pub const COMPLETE_UNBONDING: &str = "complete_unbonding";
}

/// Attribute keys
pub mod attributes {
    pub const ACTION: &str = "action";
    pub const AMOUNT: &str = "amount";
    pub const SPENDER: &str = "spender";
    pub const RECEIVER: &str = "receiver";
    pub const DELEGATOR: &str = "delegator";
    pub const VALIDATOR: &str = "validator";

    /// Incentive gauge that paid out a distribution
    pub const GAUGE_ID: &str = "gauge_id";
}

/// Date layout for output rows (UTC)
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Blocks fetched and classified at once by the indexer
pub const DEFAULT_MAX_CONCURRENT_BLOCKS: usize = 8;
