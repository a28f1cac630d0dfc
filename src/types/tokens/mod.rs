//! Strong types for token-related values
//!
//! # Type Relationships
//!
//! ```text
//! "10uosmo,5uion" (normalized coin string from a log)
//!     |
//!     | parse_coins_normalized
//!     ↓
//! Coin (BigInt amount + base denom)
//!     |
//!     | convert_units(Denomination, DenomMetadata)
//!     ↓
//! ConvertedAmount (BigDecimal + display symbol)
//! ```

mod coin;
mod denom;

pub use coin::{parse_coins_normalized, Coin};
pub use denom::{DenomMetadata, Denomination};
