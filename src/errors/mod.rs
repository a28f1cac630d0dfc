// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the taxscan library.
//!
//! This module provides strongly-typed errors for all public APIs in taxscan.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`ClassificationError`,
//!   `BlockProcessingError`, etc.)
//! - **Unified error type** (`TaxscanError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! Each stage of the classification engine has its own error type:
//! - [`ClassificationError`] - A single event or message did not match what a handler expects
//! - [`ConversionError`] - Coin amounts could not be scaled into display units
//! - [`BlockProcessingError`] - Every handler for an event failed, invalidating the block
//! - [`RowError`] - A transactional row could not be reduced
//! - [`IndexingError`] - Fetching or processing a range of blocks failed
//!
//! # Propagation
//!
//! Classification errors are local: the block processor logs them and gives the
//! next handler in the chain a chance. Only exhaustion of a handler chain escalates
//! to a [`BlockProcessingError`]. Conversion errors escalate immediately from the
//! transactional row reducers and are never retried.
//!
//! # Examples
//!
//! ```rust,ignore
//! use taxscan::{process_block_events, BlockProcessingError, EventHandlerRegistry};
//!
//! let registry = EventHandlerRegistry::bootstrap("osmosis-1");
//! match process_block_events(&registry, &block) {
//!     Ok(records) => println!("{} taxable events", records.len()),
//!     Err(BlockProcessingError::AllHandlersFailed { event_type, height, .. }) => {
//!         eprintln!("block {height} has an unclassifiable {event_type} event");
//!     }
//! }
//! ```

mod blocks;
mod classify;
mod conversion;
mod indexing;
mod rows;

pub use blocks::BlockProcessingError;
pub use classify::ClassificationError;
pub use conversion::ConversionError;
pub use indexing::IndexingError;
pub use rows::{Classification, RowError};

/// Unified error type for all taxscan operations.
///
/// All module-specific error types automatically convert to `TaxscanError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum TaxscanError {
    /// Error from classifying a single event or message.
    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    /// Error from unit conversion.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Error from processing a block's begin/end block events.
    #[error("Block processing error: {0}")]
    Block(#[from] BlockProcessingError),

    /// Error from reducing taxable records into output rows.
    #[error("Row error: {0}")]
    Row(#[from] RowError),

    /// Error from indexing a range of blocks.
    #[error("Indexing error: {0}")]
    Indexing(#[from] IndexingError),
}
