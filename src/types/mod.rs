// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across taxscan.
//!
//! This module provides the wire-level shapes the engine consumes:
//! - Block results and their begin/end block events
//! - Per-message execution logs
//! - Coins, denominations and conversion metadata

mod events;
mod log;
mod tokens;

pub use events::{BlockResults, EventAttribute, EventPhase, RawEvent};
pub use log::{parse_raw_log, LogEvent, LogMessage};
pub use tokens::{parse_coins_normalized, Coin, DenomMetadata, Denomination};
