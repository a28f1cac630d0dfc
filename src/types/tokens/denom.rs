// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denomination and conversion metadata types

use serde::{Deserialize, Serialize};

/// A denomination as recorded by the indexing collaborator
///
/// `base` is the on-chain denomination (`uosmo`, `ibc/...`). `symbol` is a
/// human-readable ticker when one is known. Conversion metadata (exponent and
/// display symbol) is looked up separately through a
/// [`DenomMetadataSource`](crate::DenomMetadataSource).
///
/// # Examples
///
/// ```
/// use taxscan::Denomination;
///
/// let osmo = Denomination::new("uosmo").with_symbol("OSMO");
/// assert_eq!(osmo.base, "uosmo");
/// assert_eq!(osmo.symbol.as_deref(), Some("OSMO"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Denomination {
    /// On-chain base denomination
    pub base: String,
    /// Optional display symbol
    pub symbol: Option<String>,
}

impl Denomination {
    /// Create a denomination with no known symbol
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            symbol: None,
        }
    }

    /// Attach a display symbol
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base)
    }
}

/// Unit conversion metadata for one base denomination
///
/// `exponent` is the power of ten between the base unit and the display unit
/// (6 for `uatom` -> `ATOM`).
///
/// # Examples
///
/// ```
/// use taxscan::DenomMetadata;
///
/// let atom = DenomMetadata::new(6, "ATOM");
/// assert!(atom.is_reasonable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomMetadata {
    /// Power of ten separating the base unit from the display unit
    pub exponent: u32,
    /// Display symbol for converted amounts
    pub display: String,
}

impl DenomMetadata {
    /// Largest exponent accepted by conversion
    pub const MAX_EXPONENT: u32 = 36;

    /// Create conversion metadata
    pub fn new(exponent: u32, display: impl Into<String>) -> Self {
        Self {
            exponent,
            display: display.into(),
        }
    }

    /// Whether the exponent is in the accepted range
    ///
    /// Cosmos chains use 0, 6 or 18 in practice. Anything above
    /// [`MAX_EXPONENT`](Self::MAX_EXPONENT) indicates corrupt metadata.
    pub const fn is_reasonable(&self) -> bool {
        self.exponent <= Self::MAX_EXPONENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denomination_builder() {
        let denom = Denomination::new("uatom");
        assert_eq!(denom.symbol, None);
        assert_eq!(denom.with_symbol("ATOM").symbol.as_deref(), Some("ATOM"));
    }

    #[test]
    fn test_denomination_display_is_base() {
        let denom = Denomination::new("uion").with_symbol("ION");
        assert_eq!(format!("{}", denom), "uion");
    }

    #[test]
    fn test_metadata_reasonable() {
        assert!(DenomMetadata::new(0, "X").is_reasonable());
        assert!(DenomMetadata::new(18, "EVMOS").is_reasonable());
        assert!(!DenomMetadata::new(37, "BAD").is_reasonable());
    }

    #[test]
    fn test_serialization() {
        let metadata = DenomMetadata::new(6, "OSMO");
        let json = serde_json::to_string(&metadata).unwrap();
        let deserialized: DenomMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, deserialized);
    }
}
