// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction execution log types.
//!
//! A transaction's `raw_log` is a JSON array with one entry per message. Each
//! entry lists the events the message emitted, which is what classifiers read
//! coin movements from.

use serde::{Deserialize, Serialize};

use super::events::EventAttribute;

/// An event scoped to one message's execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Event type name (`message`, `coin_spent`, `coin_received`, ...)
    #[serde(rename = "type")]
    pub event_type: String,
    /// Ordered attributes
    #[serde(default)]
    pub attributes: Vec<EventAttribute>,
}

impl LogEvent {
    /// Create a log event with no attributes
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
}

/// Execution log for a single message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    /// Index of the message within its transaction
    #[serde(default)]
    pub msg_index: u32,
    /// Events emitted while executing the message
    #[serde(default)]
    pub events: Vec<LogEvent>,
}

impl LogMessage {
    /// Create an empty log for a message index
    pub fn new(msg_index: u32) -> Self {
        Self {
            msg_index,
            events: Vec::new(),
        }
    }

    /// Append an event
    pub fn with_event(mut self, event: LogEvent) -> Self {
        self.events.push(event);
        self
    }
}

/// Parse a transaction `raw_log` into per-message logs.
///
/// # Errors
///
/// Returns the `serde_json` error when the log is not the JSON array form.
///
/// # Examples
///
/// ```
/// use taxscan::parse_raw_log;
///
/// let raw = r#"[{"msg_index":0,"events":[{"type":"message","attributes":[{"key":"action","value":"/cosmos.bank.v1beta1.MsgSend"}]}]}]"#;
/// let logs = parse_raw_log(raw).unwrap();
/// assert_eq!(logs[0].events[0].event_type, "message");
/// ```
pub fn parse_raw_log(raw_log: &str) -> Result<Vec<LogMessage>, serde_json::Error> {
    serde_json::from_str(raw_log)
}
