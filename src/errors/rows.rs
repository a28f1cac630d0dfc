// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for row reduction.

use std::fmt;

use super::ConversionError;

/// Which side of a transactional row was being converted when reduction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The analyzed address received funds
    Deposit,
    /// The analyzed address sent funds
    Withdrawal,
    /// Received leg of a swap
    SwapReceived,
    /// Sent leg of a swap
    SwapSent,
    /// Transaction fee
    Fee,
}

impl Classification {
    /// Lower-case name used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Classification::Deposit => "deposit",
            Classification::Withdrawal => "withdrawal",
            Classification::SwapReceived => "swap received",
            Classification::SwapSent => "swap sent",
            Classification::Fee => "fee",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when reducing a transactional record into an output row.
///
/// # Examples
///
/// ```rust
/// use taxscan::{Classification, ConversionError, RowError};
///
/// let err = RowError::conversion(
///     "ABCDEF",
///     Classification::SwapReceived,
///     ConversionError::missing_metadata("uion"),
/// );
/// assert_eq!(
///     err.to_string(),
///     "cannot parse denom units for TX ABCDEF (classification: swap received)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// Unit conversion failed for one side of the row.
    #[error("cannot parse denom units for TX {tx_hash} (classification: {classification})")]
    Conversion {
        /// Hash of the transaction being reduced
        tx_hash: String,
        /// Which side of the row failed
        classification: Classification,
        /// The underlying conversion failure
        #[source]
        source: ConversionError,
    },

    /// The record has no amount for the side being reduced.
    #[error("TX {tx_hash} has no amount for classification {classification}")]
    MissingSide {
        /// Hash of the transaction being reduced
        tx_hash: String,
        /// Which side of the row was empty
        classification: Classification,
    },
}

impl RowError {
    /// Create a `Conversion` error.
    pub fn conversion(
        tx_hash: impl Into<String>,
        classification: Classification,
        source: ConversionError,
    ) -> Self {
        RowError::Conversion {
            tx_hash: tx_hash.into(),
            classification,
            source,
        }
    }

    /// Create a `MissingSide` error.
    pub fn missing_side(tx_hash: impl Into<String>, classification: Classification) -> Self {
        RowError::MissingSide {
            tx_hash: tx_hash.into(),
            classification,
        }
    }
}
