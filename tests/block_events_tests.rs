// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for block event dispatch
//!
//! Scripted handlers make the chain outcome explicit so the dispatch rules can
//! be checked independently of the built-in handlers.

mod helpers;

use std::sync::Arc;

use num_bigint::BigInt;

use helpers::{distribution, empty_block, init_tracing, Tagged, FAILING, TAGGED_ONE, TAGGED_TWO};
use taxscan::{
    process_block_events, BlockProcessingError, EventHandlerRegistry, EventHandlerRegistryBuilder,
    EventPhase, HandlerMap, RawEvent,
};

#[test]
fn test_unregistered_events_contribute_nothing() {
    init_tracing();
    let registry = EventHandlerRegistryBuilder::new()
        .register(EventPhase::EndBlock, "distribution", TAGGED_ONE)
        .build();

    let mut block = empty_block(100);
    block.end_block_events.push(RawEvent::new("commission"));
    block.end_block_events.push(RawEvent::new("commission"));

    let records = process_block_events(&registry, &block).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_second_handler_contributes_after_first_fails() {
    init_tracing();
    let registry = EventHandlerRegistryBuilder::new()
        .register(EventPhase::EndBlock, "distribution", FAILING)
        .register(EventPhase::EndBlock, "distribution", TAGGED_TWO)
        .build();

    let mut block = empty_block(101);
    block.end_block_events.push(distribution("osmo1alice", "5uosmo"));

    let records = process_block_events(&registry, &block).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].denomination, Tagged::<2>::denomination());
}

#[test]
fn test_first_success_wins() {
    let registry = EventHandlerRegistryBuilder::new()
        .register(EventPhase::EndBlock, "distribution", TAGGED_ONE)
        .register(EventPhase::EndBlock, "distribution", TAGGED_TWO)
        .build();

    let mut block = empty_block(102);
    block.end_block_events.push(distribution("osmo1alice", "5uosmo"));

    let records = process_block_events(&registry, &block).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].denomination, Tagged::<1>::denomination());
}

#[test]
fn test_exhausted_chain_discards_whole_block() {
    init_tracing();
    let registry = EventHandlerRegistryBuilder::new()
        .register(EventPhase::BeginBlock, "mint", TAGGED_ONE)
        .register(EventPhase::EndBlock, "distribution", FAILING)
        .build();

    let mut block = empty_block(103);
    block.begin_block_events.push(RawEvent::new("mint").with_attribute("receiver", "osmo1m"));
    block.end_block_events.push(distribution("osmo1alice", "5uosmo"));

    let err = process_block_events(&registry, &block).unwrap_err();
    let BlockProcessingError::AllHandlersFailed {
        event_type,
        phase,
        height,
    } = err;
    assert_eq!(event_type, "distribution");
    assert_eq!(phase, EventPhase::EndBlock);
    assert_eq!(height, 103);
}

#[test]
fn test_chain_specific_handlers_get_first_refusal() {
    let mut chain_end_block = HandlerMap::new();
    chain_end_block.insert("distribution".to_string(), vec![TAGGED_TWO]);

    let registry = EventHandlerRegistryBuilder::new()
        .register(EventPhase::EndBlock, "distribution", TAGGED_ONE)
        .register_chain_handlers("test-1", HandlerMap::new(), chain_end_block)
        .build();

    assert_eq!(
        registry.handler_names(EventPhase::EndBlock, "distribution"),
        vec!["tagged.2", "tagged.1"]
    );

    let mut block = empty_block(104);
    block.end_block_events.push(distribution("osmo1alice", "5uosmo"));
    let records = process_block_events(&registry, &block).unwrap();
    assert_eq!(records[0].denomination, Tagged::<2>::denomination());
}

#[test]
fn test_records_follow_phase_then_event_order() {
    let registry = EventHandlerRegistryBuilder::new()
        .register(EventPhase::BeginBlock, "mint", TAGGED_ONE)
        .register(EventPhase::EndBlock, "distribution", TAGGED_ONE)
        .build();

    let mut block = empty_block(105);
    block.end_block_events.push(distribution("end-1", "1uosmo"));
    block.end_block_events.push(distribution("end-2", "1uosmo"));
    block.begin_block_events.push(RawEvent::new("mint").with_attribute("receiver", "begin-1"));

    let records = process_block_events(&registry, &block).unwrap();
    let addresses: Vec<_> = records.iter().map(|r| r.address.as_str()).collect();
    assert_eq!(addresses, vec!["begin-1", "end-1", "end-2"]);
}

#[test]
fn test_osmosis_gauge_and_generic_distribution() {
    init_tracing();
    let registry = EventHandlerRegistry::bootstrap("osmosis-1");

    let mut block = empty_block(106);
    block.end_block_events.push(
        distribution("osmo1gauge", "10uosmo").with_attribute("gauge_id", "77"),
    );
    block.end_block_events.push(distribution("osmo1plain", "20uosmo"));

    let records = process_block_events(&registry, &block).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].address, "osmo1gauge");
    assert_eq!(records[1].address, "osmo1plain");
    assert_eq!(records[1].amount, BigInt::from(20));
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(EventHandlerRegistry::bootstrap("cosmoshub-4"));

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let mut block = empty_block(200 + i);
                block.end_block_events.push(
                    RawEvent::new("complete_unbonding")
                        .with_attribute("amount", format!("{}uatom", i + 1))
                        .with_attribute("delegator", format!("cosmos1d{i}")),
                );
                process_block_events(&registry, &block)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let records = handle.join().unwrap().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, format!("cosmos1d{i}"));
    }
}
