// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Classification of begin/end block events.
//!
//! This module handles:
//! - The [`EventHandler`] contract every block event classifier implements
//! - The [`EventHandlerRegistry`] mapping event type names to handler chains
//! - Chain-specific bootstrap that gives chain handlers first refusal
//! - [`process_block_events`], which dispatches a block's events with
//!   first-success-wins semantics and all-or-nothing block results
//! - Built-in handlers for reward distributions and completed unbondings

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ClassificationError;
use crate::types::RawEvent;

pub mod handlers;
mod processor;
mod registry;

pub use processor::process_block_events;
pub use registry::{
    chain_handlers, EventHandlerRegistry, EventHandlerRegistryBuilder, HandlerMap,
};

/// A taxable fact extracted from a block event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRelevantInformation {
    /// Address the tokens were credited to
    pub address: String,
    /// Amount in the denomination's base unit (always positive)
    pub amount: BigInt,
    /// Base denomination
    pub denomination: String,
    /// Protocol event type that produced the record
    pub event_type: String,
}

/// Classifier contract for one block event type
///
/// Instances are stateful between `handle_event` and `parse_relevant_data` and
/// must be built fresh for every event. `Display` renders a summary for logs.
pub trait EventHandler: fmt::Display {
    /// Validate the event and extract its facts.
    fn handle_event(&mut self, event_type: &str, event: &RawEvent)
        -> Result<(), ClassificationError>;

    /// Facts extracted by the last successful `handle_event`.
    fn parse_relevant_data(&self) -> Vec<EventRelevantInformation>;
}

/// Named zero-argument constructor for a fresh [`EventHandler`]
///
/// The name identifies the handler in logs and lets callers inspect chain order
/// without building handlers.
///
/// # Examples
///
/// ```rust
/// use taxscan::events::handlers::DistributionEvent;
/// use taxscan::EventHandlerFactory;
///
/// let factory = EventHandlerFactory::new("distribution", || Box::new(DistributionEvent::default()));
/// assert_eq!(factory.name(), "distribution");
/// let _handler = factory.build();
/// ```
#[derive(Clone, Copy)]
pub struct EventHandlerFactory {
    name: &'static str,
    build: fn() -> Box<dyn EventHandler>,
}

impl EventHandlerFactory {
    /// Create a factory
    pub const fn new(name: &'static str, build: fn() -> Box<dyn EventHandler>) -> Self {
        Self { name, build }
    }

    /// Handler name
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Construct a fresh handler instance
    pub fn build(&self) -> Box<dyn EventHandler> {
        (self.build)()
    }
}

impl fmt::Debug for EventHandlerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlerFactory")
            .field("name", &self.name)
            .finish()
    }
}
