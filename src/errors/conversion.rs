// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for unit conversion.

/// Errors that can occur when scaling a raw amount into display units.
///
/// A missing metadata entry is an expected outcome for unknown denominations.
/// Reward rows fall back to the raw amount and base denomination; transactional
/// rows escalate the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// No conversion metadata is known for the denomination.
    #[error("No conversion metadata for denomination {denom}")]
    MissingMetadata {
        /// Base denomination that was looked up
        denom: String,
    },

    /// Conversion metadata exists but cannot be applied.
    #[error("Invalid conversion metadata for denomination {denom}: {reason}")]
    InvalidMetadata {
        /// Base denomination that was looked up
        denom: String,
        /// Why the metadata is unusable
        reason: String,
    },
}

impl ConversionError {
    /// Create a `MissingMetadata` error.
    pub fn missing_metadata(denom: impl Into<String>) -> Self {
        ConversionError::MissingMetadata {
            denom: denom.into(),
        }
    }

    /// Create an `InvalidMetadata` error.
    pub fn invalid_metadata(denom: impl Into<String>, reason: impl Into<String>) -> Self {
        ConversionError::InvalidMetadata {
            denom: denom.into(),
            reason: reason.into(),
        }
    }
}
