// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for taxscan integration tests
//!
//! Provides scripted handlers, block fixtures and an in-memory metadata source
//! so the engine can be exercised without a node or a database.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use taxscan::{
    BlockResults, ClassificationError, DenomMetadata, EventHandler, EventHandlerFactory,
    EventRelevantInformation, RawEvent,
};

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Metadata for the denominations used across tests
pub fn metadata() -> HashMap<String, DenomMetadata> {
    let mut metadata = HashMap::new();
    metadata.insert("uatom".to_string(), DenomMetadata::new(6, "ATOM"));
    metadata.insert("uosmo".to_string(), DenomMetadata::new(6, "OSMO"));
    metadata.insert("aevmos".to_string(), DenomMetadata::new(18, "EVMOS"));
    metadata
}

pub fn block_time(height: u64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap() + chrono::Duration::seconds(height as i64 * 6)
}

pub fn empty_block(height: u64) -> BlockResults {
    BlockResults::new(height, block_time(height))
}

/// `distribution` event paying `amount` to `receiver`
pub fn distribution(receiver: &str, amount: &str) -> RawEvent {
    RawEvent::new("distribution")
        .with_attribute("receiver", receiver)
        .with_attribute("amount", amount)
}

/// Handler that rejects every event
#[derive(Debug, Default)]
pub struct AlwaysFails;

impl fmt::Display for AlwaysFails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AlwaysFails")
    }
}

impl EventHandler for AlwaysFails {
    fn handle_event(&mut self, event_type: &str, _event: &RawEvent) -> Result<(), ClassificationError> {
        Err(ClassificationError::invalid_event(event_type, "scripted failure"))
    }

    fn parse_relevant_data(&self) -> Vec<EventRelevantInformation> {
        Vec::new()
    }
}

/// Handler that accepts every event and emits one record per `receiver`
/// attribute, tagging the denomination with `TAG` so tests can tell which
/// handler contributed.
#[derive(Debug, Default)]
pub struct Tagged<const TAG: u8> {
    event_type: String,
    receivers: Vec<String>,
}

impl<const TAG: u8> Tagged<TAG> {
    pub fn denomination() -> String {
        format!("tag{TAG}")
    }
}

impl<const TAG: u8> fmt::Display for Tagged<TAG> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tagged<{TAG}> {} receivers", self.receivers.len())
    }
}

impl<const TAG: u8> EventHandler for Tagged<TAG> {
    fn handle_event(&mut self, event_type: &str, event: &RawEvent) -> Result<(), ClassificationError> {
        self.event_type = event_type.to_string();
        self.receivers = event
            .attributes
            .iter()
            .filter(|attr| attr.key == "receiver")
            .map(|attr| attr.value.clone())
            .collect();
        Ok(())
    }

    fn parse_relevant_data(&self) -> Vec<EventRelevantInformation> {
        self.receivers
            .iter()
            .map(|receiver| EventRelevantInformation {
                address: receiver.clone(),
                amount: 1.into(),
                denomination: Self::denomination(),
                event_type: self.event_type.clone(),
            })
            .collect()
    }
}

fn failing() -> Box<dyn EventHandler> {
    Box::new(AlwaysFails)
}

fn tagged_one() -> Box<dyn EventHandler> {
    Box::new(Tagged::<1>::default())
}

fn tagged_two() -> Box<dyn EventHandler> {
    Box::new(Tagged::<2>::default())
}

pub const FAILING: EventHandlerFactory = EventHandlerFactory::new("failing", failing);
pub const TAGGED_ONE: EventHandlerFactory = EventHandlerFactory::new("tagged.1", tagged_one);
pub const TAGGED_TWO: EventHandlerFactory = EventHandlerFactory::new("tagged.2", tagged_two);
