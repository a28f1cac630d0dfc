// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw block event types as produced by the block results collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single key/value attribute of a [`RawEvent`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttribute {
    /// Attribute key
    pub key: String,
    /// Attribute value
    pub value: String,
}

impl EventAttribute {
    /// Create an attribute
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An event emitted during block execution
///
/// The type name is the protocol's own string (e.g. `distribution`,
/// `complete_unbonding`) and is used as-is for handler dispatch. Attributes keep
/// their emitted order, which matters for events that carry repeated
/// `receiver`/`amount` pairs.
///
/// # Examples
///
/// ```
/// use taxscan::RawEvent;
///
/// let event = RawEvent::new("complete_unbonding")
///     .with_attribute("amount", "1000uatom")
///     .with_attribute("delegator", "cosmos1abc");
///
/// assert_eq!(event.attribute("delegator"), Some("cosmos1abc"));
/// assert_eq!(event.attribute("validator"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Protocol event type name
    #[serde(rename = "type")]
    pub event_type: String,
    /// Ordered attributes
    #[serde(default)]
    pub attributes: Vec<EventAttribute>,
}

impl RawEvent {
    /// Create an event with no attributes
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(EventAttribute::new(key, value));
        self
    }

    /// Value of the first attribute with the given key
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }
}

/// Which phase of block execution emitted an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventPhase {
    /// Emitted before any transaction in the block
    BeginBlock,
    /// Emitted after every transaction in the block
    EndBlock,
}

impl EventPhase {
    /// Name used in log messages
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventPhase::BeginBlock => "BeginBlocker",
            EventPhase::EndBlock => "EndBlocker",
        }
    }
}

impl fmt::Display for EventPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The block-level results the engine classifies
///
/// Height is used for log and error context only; the timestamp dates the
/// rows produced from this block's events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockResults {
    /// Block height
    pub height: u64,
    /// Block time
    pub time: DateTime<Utc>,
    /// Events emitted by the begin blocker, in emission order
    #[serde(default)]
    pub begin_block_events: Vec<RawEvent>,
    /// Events emitted by the end blocker, in emission order
    #[serde(default)]
    pub end_block_events: Vec<RawEvent>,
}

impl BlockResults {
    /// Create block results with no events
    pub fn new(height: u64, time: DateTime<Utc>) -> Self {
        Self {
            height,
            time,
            begin_block_events: Vec::new(),
            end_block_events: Vec::new(),
        }
    }

    /// Events for one phase
    pub fn events(&self, phase: EventPhase) -> &[RawEvent] {
        match phase {
            EventPhase::BeginBlock => &self.begin_block_events,
            EventPhase::EndBlock => &self.end_block_events,
        }
    }
}
