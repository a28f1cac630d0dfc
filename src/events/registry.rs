// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Handler registration system.
//!
//! The registry maintains, per block phase, a mapping from event type name to
//! an ordered handler chain. It is assembled once through
//! [`EventHandlerRegistryBuilder`] and is read-only afterwards, so a single
//! instance can be shared across threads classifying different blocks.

use std::collections::HashMap;

use super::handlers::{CompleteUnbondingEvent, DistributionEvent, GaugeDistributionEvent};
use super::EventHandlerFactory;
use crate::config::constants::{chains, event_types};
use crate::types::EventPhase;

/// Event type name -> ordered handler chain
pub type HandlerMap = HashMap<String, Vec<EventHandlerFactory>>;

/// Registry of block event handlers, built at startup.
#[derive(Debug, Clone, Default)]
pub struct EventHandlerRegistry {
    begin_block: HandlerMap,
    end_block: HandlerMap,
}

impl EventHandlerRegistry {
    /// Start building a registry.
    pub fn builder() -> EventHandlerRegistryBuilder {
        EventHandlerRegistryBuilder::new()
    }

    /// Registry with generic handlers plus the chain-specific handlers for `chain_id`.
    ///
    /// Chains without chain-specific handlers get the generic set only.
    pub fn bootstrap(chain_id: &str) -> Self {
        let (begin_block, end_block) = chain_handlers(chain_id);
        EventHandlerRegistryBuilder::with_generic_handlers()
            .register_chain_handlers(chain_id, begin_block, end_block)
            .build()
    }

    /// Handler chain for an event type in one phase.
    pub fn handlers(&self, phase: EventPhase, event_type: &str) -> Option<&[EventHandlerFactory]> {
        self.phase(phase).get(event_type).map(Vec::as_slice)
    }

    /// Names of the handlers for an event type, in dispatch order.
    pub fn handler_names(&self, phase: EventPhase, event_type: &str) -> Vec<&'static str> {
        self.handlers(phase, event_type)
            .map(|chain| chain.iter().map(EventHandlerFactory::name).collect())
            .unwrap_or_default()
    }

    /// Check if no handlers are registered for a phase.
    pub fn is_phase_empty(&self, phase: EventPhase) -> bool {
        self.phase(phase).is_empty()
    }

    /// Check if any handlers are registered at all.
    pub fn is_empty(&self) -> bool {
        self.begin_block.is_empty() && self.end_block.is_empty()
    }

    /// Get all registered event types for a phase.
    pub fn event_types(&self, phase: EventPhase) -> Vec<&str> {
        self.phase(phase).keys().map(String::as_str).collect()
    }

    fn phase(&self, phase: EventPhase) -> &HandlerMap {
        match phase {
            EventPhase::BeginBlock => &self.begin_block,
            EventPhase::EndBlock => &self.end_block,
        }
    }
}

/// Builder for [`EventHandlerRegistry`]
///
/// # Example
///
/// ```rust
/// use taxscan::events::handlers::DistributionEvent;
/// use taxscan::{EventHandlerFactory, EventHandlerRegistryBuilder, EventPhase, HandlerMap};
///
/// let mut chain_end_block = HandlerMap::new();
/// chain_end_block.insert(
///     "distribution".to_string(),
///     vec![EventHandlerFactory::new("chain.distribution", || Box::new(DistributionEvent::default()))],
/// );
///
/// let registry = EventHandlerRegistryBuilder::with_generic_handlers()
///     .register_chain_handlers("my-chain-1", HandlerMap::new(), chain_end_block)
///     .build();
///
/// assert_eq!(
///     registry.handler_names(EventPhase::EndBlock, "distribution")[0],
///     "chain.distribution"
/// );
/// ```
#[derive(Debug, Default)]
pub struct EventHandlerRegistryBuilder {
    registry: EventHandlerRegistry,
}

impl EventHandlerRegistryBuilder {
    /// Create a builder with no handlers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the generic (chain-agnostic) handlers
    pub fn with_generic_handlers() -> Self {
        Self::new().register(
            EventPhase::EndBlock,
            event_types::DISTRIBUTION,
            EventHandlerFactory::new("generic.distribution", || {
                Box::new(DistributionEvent::default())
            }),
        )
    }

    /// Append a handler to the chain for an event type
    pub fn register(
        mut self,
        phase: EventPhase,
        event_type: impl Into<String>,
        factory: EventHandlerFactory,
    ) -> Self {
        self.phase_mut(phase)
            .entry(event_type.into())
            .or_default()
            .push(factory);
        self
    }

    /// Merge a chain's handler maps into the registry.
    ///
    /// For every event type, the chain-specific handlers are placed ahead of any
    /// handlers already registered, so they get first attempt. Calling this
    /// twice for the same chain duplicates entries; bootstrap exactly once.
    pub fn register_chain_handlers(
        mut self,
        chain_id: &str,
        begin_block: HandlerMap,
        end_block: HandlerMap,
    ) -> Self {
        let begin_count = begin_block.values().map(Vec::len).sum::<usize>();
        let end_count = end_block.values().map(Vec::len).sum::<usize>();

        merge_ahead(&mut self.registry.begin_block, begin_block);
        merge_ahead(&mut self.registry.end_block, end_block);

        tracing::info!(
            chain_id,
            begin_block_handlers = begin_count,
            end_block_handlers = end_count,
            "Registered chain-specific event handlers"
        );
        self
    }

    /// Freeze the registry
    pub fn build(self) -> EventHandlerRegistry {
        self.registry
    }

    fn phase_mut(&mut self, phase: EventPhase) -> &mut HandlerMap {
        match phase {
            EventPhase::BeginBlock => &mut self.registry.begin_block,
            EventPhase::EndBlock => &mut self.registry.end_block,
        }
    }
}

/// Prepend each chain-specific list to the existing list for the same key
fn merge_ahead(existing: &mut HandlerMap, chain_specific: HandlerMap) {
    for (event_type, mut chain) in chain_specific {
        if let Some(generic) = existing.remove(&event_type) {
            chain.extend(generic);
        }
        existing.insert(event_type, chain);
    }
}

/// Chain-specific `(begin_block, end_block)` handler maps for a chain id.
///
/// Unknown chains have no chain-specific handlers.
pub fn chain_handlers(chain_id: &str) -> (HandlerMap, HandlerMap) {
    let begin_block = HandlerMap::new();
    let mut end_block = HandlerMap::new();

    match chain_id {
        chains::COSMOS_HUB => {
            end_block.insert(
                event_types::COMPLETE_UNBONDING.to_string(),
                vec![EventHandlerFactory::new("cosmoshub.complete_unbonding", || {
                    Box::new(CompleteUnbondingEvent::default())
                })],
            );
        }
        chains::OSMOSIS => {
            end_block.insert(
                event_types::DISTRIBUTION.to_string(),
                vec![EventHandlerFactory::new("osmosis.gauge_distribution", || {
                    Box::new(GaugeDistributionEvent::default())
                })],
            );
        }
        _ => {}
    }

    (begin_block, end_block)
}
