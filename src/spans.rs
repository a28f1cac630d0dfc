// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for taxscan operations.
//!
//! Telemetry concerns are kept apart from classification logic. Instead of
//! using `#[instrument]` attributes directly on functions, each instrumented
//! operation has a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::{Level, Span};

use crate::types::EventPhase;

/// Create span for classifying one block's begin/end block events.
///
/// Parent: index_range span, or none when called directly
/// Children: process_phase spans (one per phase)
#[inline]
pub(crate) fn process_block_events(height: u64, begin_events: usize, end_events: usize) -> Span {
    tracing::span!(
        Level::INFO,
        "taxscan.process_block_events",
        height = height,
        begin_events = begin_events,
        end_events = end_events,
    )
}

/// Create span for dispatching one phase of a block's events.
///
/// Parent: process_block_events span
#[inline]
pub(crate) fn process_phase(height: u64, phase: EventPhase) -> Span {
    tracing::debug_span!("taxscan.process_phase", height = height, phase = %phase,)
}

/// Create span for classifying a single transaction message.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn classify_message(message_type: &str, msg_index: u32) -> Span {
    tracing::debug_span!(
        "taxscan.classify_message",
        message_type = message_type,
        msg_index = msg_index,
    )
}

/// Create span for indexing a range of block heights.
///
/// This is the main entry point for concurrent block indexing.
///
/// Parent: None (root span for this operation)
/// Children: process_block_events spans (one per height)
#[inline]
pub(crate) fn index_range(from_height: u64, to_height: u64, concurrency: usize) -> Span {
    tracing::info_span!(
        "taxscan.index_range",
        from_height = from_height,
        to_height = to_height,
        block_count = to_height.saturating_sub(from_height) + 1,
        concurrency = concurrency,
    )
}
