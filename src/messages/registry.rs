// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Message handler registration.
//!
//! The registry maps a message type URL to the constructor of its classifier.

use std::collections::HashMap;

use super::bank::{WrapperMsgSend, MSG_SEND};
use super::concentrated_liquidity::{
    WrapperMsgCreatePosition, WrapperMsgWithdrawPosition, MSG_CREATE_POSITION,
    MSG_WITHDRAW_POSITION,
};
use super::distribution::{WrapperMsgWithdrawDelegatorReward, MSG_WITHDRAW_DELEGATOR_REWARD};
use super::{MessageHandler, Msg, TokenMovement};
use crate::errors::ClassificationError;
use crate::spans;
use crate::types::LogMessage;

/// Zero-argument constructor for a fresh message classifier
pub type MessageHandlerFactory = fn() -> Box<dyn MessageHandler>;

/// Result of classifying one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedMessage {
    /// Type URL of the classified message
    pub message_type: String,
    /// Classifier summary
    pub description: String,
    /// Non-zero movements extracted from the log
    pub movements: Vec<TokenMovement>,
}

/// Registry of message classifiers, built at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct MessageHandlerRegistry {
    handlers: HashMap<String, MessageHandlerFactory>,
}

impl MessageHandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in classifier.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MSG_CREATE_POSITION, || {
            Box::new(WrapperMsgCreatePosition::default())
        });
        registry.register(MSG_WITHDRAW_POSITION, || {
            Box::new(WrapperMsgWithdrawPosition::default())
        });
        registry.register(MSG_SEND, || Box::new(WrapperMsgSend::default()));
        registry.register(MSG_WITHDRAW_DELEGATOR_REWARD, || {
            Box::new(WrapperMsgWithdrawDelegatorReward::default())
        });
        registry
    }

    /// Register (or replace) the classifier for a type URL.
    pub fn register(&mut self, message_type: impl Into<String>, factory: MessageHandlerFactory) {
        self.handlers.insert(message_type.into(), factory);
    }

    /// Whether a classifier exists for the type URL.
    pub fn supports(&self, message_type: &str) -> bool {
        self.handlers.contains_key(message_type)
    }

    /// Get count of registered classifiers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Classify one message against its execution log.
    ///
    /// Returns `Ok(None)` for message types nobody registered.
    ///
    /// # Errors
    ///
    /// Propagates the classifier's [`ClassificationError`] when the log does not
    /// match the message.
    pub fn classify(
        &self,
        msg: &Msg,
        log: &LogMessage,
    ) -> Result<Option<ClassifiedMessage>, ClassificationError> {
        let message_type = msg.type_url();
        let span = spans::classify_message(message_type, log.msg_index);
        let _guard = span.enter();

        let Some(factory) = self.handlers.get(message_type) else {
            tracing::debug!(message_type, "No classifier registered for message type");
            return Ok(None);
        };

        let mut handler = factory();
        handler.handle_msg(message_type, msg, log)?;

        let classified = ClassifiedMessage {
            message_type: message_type.to_string(),
            description: handler.describe(),
            movements: handler.parse_relevant_data(),
        };
        tracing::debug!(
            message_type,
            movements = classified.movements.len(),
            description = %classified.description,
            "Classified message"
        );

        Ok(Some(classified))
    }
}
