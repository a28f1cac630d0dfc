// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Unit conversion from raw base-unit amounts to display amounts
//!
//! Conversion is a pure function of the raw amount, the denomination and the
//! metadata the [`DenomMetadataSource`] returns at call time.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::ConversionError;
use crate::types::{DenomMetadata, Denomination};

/// Lookup of conversion metadata by base denomination
///
/// Implemented by the persistence collaborator. Returning `None` is a normal
/// outcome for denominations nobody has described yet.
pub trait DenomMetadataSource: Send + Sync {
    /// Metadata for `base`, if known
    fn denom_metadata(&self, base: &str) -> Option<DenomMetadata>;
}

impl DenomMetadataSource for HashMap<String, DenomMetadata> {
    fn denom_metadata(&self, base: &str) -> Option<DenomMetadata> {
        self.get(base).cloned()
    }
}

impl<T: DenomMetadataSource + ?Sized> DenomMetadataSource for Arc<T> {
    fn denom_metadata(&self, base: &str) -> Option<DenomMetadata> {
        (**self).denom_metadata(base)
    }
}

/// A raw amount scaled into display units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedAmount {
    value: BigDecimal,
    amount: String,
    symbol: String,
}

impl ConvertedAmount {
    /// Exact decimal value
    pub fn value(&self) -> &BigDecimal {
        &self.value
    }

    /// Plain-notation amount with no trailing zeros (`"1.5"`, never `"1.50"` or `"1.5E0"`)
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Display symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Convert a raw amount of `denomination` into display units.
///
/// The display symbol comes from the metadata, falling back to the
/// denomination's own symbol when the metadata leaves it blank.
///
/// # Errors
///
/// - [`ConversionError::MissingMetadata`] if the source knows nothing about the denomination
/// - [`ConversionError::InvalidMetadata`] if the exponent is out of range or no symbol is available
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use num_bigint::BigInt;
/// use taxscan::{convert_units, DenomMetadata, Denomination};
///
/// let mut metadata = HashMap::new();
/// metadata.insert("uatom".to_string(), DenomMetadata::new(6, "ATOM"));
///
/// let converted = convert_units(&BigInt::from(1_500_000), &Denomination::new("uatom"), &metadata).unwrap();
/// assert_eq!(converted.amount(), "1.5");
/// assert_eq!(converted.symbol(), "ATOM");
/// ```
pub fn convert_units<S: DenomMetadataSource + ?Sized>(
    amount: &BigInt,
    denomination: &Denomination,
    source: &S,
) -> Result<ConvertedAmount, ConversionError> {
    let metadata = source
        .denom_metadata(&denomination.base)
        .ok_or_else(|| ConversionError::missing_metadata(&denomination.base))?;

    if !metadata.is_reasonable() {
        return Err(ConversionError::invalid_metadata(
            &denomination.base,
            format!(
                "exponent {} exceeds {}",
                metadata.exponent,
                DenomMetadata::MAX_EXPONENT
            ),
        ));
    }

    let symbol = if metadata.display.is_empty() {
        denomination
            .symbol
            .clone()
            .filter(|symbol| !symbol.is_empty())
            .ok_or_else(|| {
                ConversionError::invalid_metadata(&denomination.base, "no display symbol")
            })?
    } else {
        metadata.display
    };

    Ok(ConvertedAmount {
        value: BigDecimal::new(amount.clone(), i64::from(metadata.exponent)),
        amount: format_scaled_amount(amount, metadata.exponent),
        symbol,
    })
}

/// Render `amount / 10^exponent` in plain notation, trimming trailing zeros
pub(crate) fn format_scaled_amount(amount: &BigInt, exponent: u32) -> String {
    if exponent == 0 {
        return amount.to_string();
    }

    let sign = if amount.sign() == Sign::Minus { "-" } else { "" };
    let magnitude = BigInt::from_biguint(Sign::Plus, amount.magnitude().clone());
    let divisor = BigInt::from(10u32).pow(exponent);
    let whole = &magnitude / &divisor;
    let fractional = &magnitude % &divisor;

    // Format with correct decimal places, removing trailing zeros
    let fractional_str = format!("{:0>width$}", fractional.to_string(), width = exponent as usize);
    let trimmed = fractional_str.trim_end_matches('0');

    if trimmed.is_empty() {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{}", sign, whole, trimmed)
    }
}
