// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for indexing ranges of blocks.

use super::BlockProcessingError;

/// Errors that can occur while indexing a range of block heights.
///
/// The first failing height aborts the whole range.
#[derive(Debug, thiserror::Error)]
pub enum IndexingError {
    /// The block results collaborator could not provide a block.
    #[error("Failed to fetch block results at height {height}: {details}")]
    FetchFailed {
        /// Height that could not be fetched
        height: u64,
        /// Details reported by the collaborator
        details: String,
    },

    /// The block was fetched but its events could not be classified.
    #[error(transparent)]
    Block(#[from] BlockProcessingError),

    /// The worker classifying a block panicked or was cancelled.
    #[error("Block worker for height {height} failed: {details}")]
    WorkerFailed {
        /// Height the worker was processing
        height: u64,
        /// Details from the runtime
        details: String,
    },

    /// The requested range is empty or reversed.
    #[error("Invalid height range: {from}..={to}")]
    InvalidRange {
        /// First height requested
        from: u64,
        /// Last height requested
        to: u64,
    },
}

impl IndexingError {
    /// Create a `FetchFailed` error.
    pub fn fetch_failed(height: u64, details: impl Into<String>) -> Self {
        IndexingError::FetchFailed {
            height,
            details: details.into(),
        }
    }

    /// Create a `WorkerFailed` error.
    pub fn worker_failed(height: u64, details: impl Into<String>) -> Self {
        IndexingError::WorkerFailed {
            height,
            details: details.into(),
        }
    }
}
