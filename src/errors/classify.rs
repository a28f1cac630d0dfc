// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for event and message classification.

/// Errors raised by a single event handler or message classifier.
///
/// These errors are fatal to one classification attempt only. The block
/// processor swallows them (after logging) and tries the next handler in the
/// chain registered for the same event type.
///
/// # Examples
///
/// ```rust
/// use taxscan::ClassificationError;
///
/// let err = ClassificationError::log_format(
///     "/osmosis.concentratedliquidity.v1beta1.MsgCreatePosition",
///     "[]",
/// );
/// assert!(err.to_string().contains("MsgCreatePosition"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    /// The execution log does not correspond to the expected action.
    ///
    /// Raised when the log's `message.action` attribute names a different
    /// message type, or when the log lacks the coin movement events the
    /// message type always emits.
    #[error("Type: {message_type} could not handle message log {log}")]
    LogFormat {
        /// Message type URL the classifier expected
        message_type: String,
        /// Debug rendering of the offending log
        log: String,
    },

    /// The decoded message is not the variant this classifier handles.
    #[error("Expected message {expected}, found {found}")]
    UnexpectedMessage {
        /// Type URL the classifier handles
        expected: String,
        /// Type URL of the message it was given
        found: String,
    },

    /// An event lacked an attribute the handler requires.
    #[error("Event {event_type} is missing attribute {key}")]
    MissingAttribute {
        /// Event type name
        event_type: String,
        /// Attribute key that was not present
        key: String,
    },

    /// An event does not have the shape a handler expects.
    #[error("Event {event_type} is invalid: {details}")]
    InvalidEvent {
        /// Event type name
        event_type: String,
        /// Details about what did not match
        details: String,
    },

    /// A normalized coin string could not be parsed.
    #[error("error parsing coins from {input:?}: {reason}")]
    CoinParse {
        /// The raw coin string
        input: String,
        /// Why parsing failed
        reason: String,
    },

    /// The log carried coin events but none for the acting address.
    #[error("No coin movements for {address} in {message_type} log")]
    NoCoinMovements {
        /// Message type URL being classified
        message_type: String,
        /// Acting address the entries were filtered to
        address: String,
    },
}

impl ClassificationError {
    /// Create a `LogFormat` error for a message type and its raw log.
    pub fn log_format(message_type: impl Into<String>, log: impl Into<String>) -> Self {
        ClassificationError::LogFormat {
            message_type: message_type.into(),
            log: log.into(),
        }
    }

    /// Create an `UnexpectedMessage` error.
    pub fn unexpected_message(expected: impl Into<String>, found: impl Into<String>) -> Self {
        ClassificationError::UnexpectedMessage {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a `MissingAttribute` error.
    pub fn missing_attribute(event_type: impl Into<String>, key: impl Into<String>) -> Self {
        ClassificationError::MissingAttribute {
            event_type: event_type.into(),
            key: key.into(),
        }
    }

    /// Create an `InvalidEvent` error.
    pub fn invalid_event(event_type: impl Into<String>, details: impl Into<String>) -> Self {
        ClassificationError::InvalidEvent {
            event_type: event_type.into(),
            details: details.into(),
        }
    }

    /// Create a `CoinParse` error.
    pub fn coin_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ClassificationError::CoinParse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a `NoCoinMovements` error.
    pub fn no_coin_movements(message_type: impl Into<String>, address: impl Into<String>) -> Self {
        ClassificationError::NoCoinMovements {
            message_type: message_type.into(),
            address: address.into(),
        }
    }
}
