// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for block event processing.

use crate::types::EventPhase;

/// Errors that can occur while processing a block's begin/end block events.
///
/// Any of these invalidates the whole block: [`process_block_events`] returns no
/// partial output.
///
/// [`process_block_events`]: crate::process_block_events
///
/// # Examples
///
/// ```rust,ignore
/// use taxscan::{process_block_events, BlockProcessingError};
///
/// match process_block_events(&registry, &block) {
///     Ok(records) => println!("Found {} records", records.len()),
///     Err(BlockProcessingError::AllHandlersFailed { event_type, .. }) => {
///         eprintln!("No handler could classify {}", event_type);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockProcessingError {
    /// Every handler registered for an event type failed on one event.
    #[error("could not handle event type {event_type}, all handlers failed ({phase} event at height {height})")]
    AllHandlersFailed {
        /// Event type name that no handler accepted
        event_type: String,
        /// Which block phase the event was emitted in
        phase: EventPhase,
        /// Height of the block being processed
        height: u64,
    },
}

impl BlockProcessingError {
    /// Create an `AllHandlersFailed` error.
    pub fn all_handlers_failed(event_type: impl Into<String>, phase: EventPhase, height: u64) -> Self {
        BlockProcessingError::AllHandlersFailed {
            event_type: event_type.into(),
            phase,
            height,
        }
    }
}
