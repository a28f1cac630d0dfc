// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block event dispatch.

use tracing::debug;

use super::{EventHandlerRegistry, EventRelevantInformation};
use crate::errors::BlockProcessingError;
use crate::spans;
use crate::types::{BlockResults, EventPhase};

/// Classify every begin-block and end-block event of one block.
///
/// Begin-block events are dispatched before end-block events, each in emission
/// order. For every event whose type has a handler chain, handlers are tried in
/// order and the first one that succeeds contributes its records; the rest are
/// not consulted. Events with no registered chain are skipped, and a phase with
/// no registrations at all is skipped entirely.
///
/// # Errors
///
/// Returns [`BlockProcessingError::AllHandlersFailed`] when every handler in a
/// chain rejects an event. Records already extracted from the block are
/// discarded in that case.
pub fn process_block_events(
    registry: &EventHandlerRegistry,
    block: &BlockResults,
) -> Result<Vec<EventRelevantInformation>, BlockProcessingError> {
    let span = spans::process_block_events(
        block.height,
        block.begin_block_events.len(),
        block.end_block_events.len(),
    );
    let _guard = span.enter();

    let mut records = Vec::new();
    for phase in [EventPhase::BeginBlock, EventPhase::EndBlock] {
        if registry.is_phase_empty(phase) {
            continue;
        }
        process_phase(registry, block, phase, &mut records)?;
    }

    debug!(records = records.len(), "Processed block events");
    Ok(records)
}

fn process_phase(
    registry: &EventHandlerRegistry,
    block: &BlockResults,
    phase: EventPhase,
    records: &mut Vec<EventRelevantInformation>,
) -> Result<(), BlockProcessingError> {
    let span = spans::process_phase(block.height, phase);
    let _guard = span.enter();

    for event in block.events(phase) {
        let Some(chain) = registry.handlers(phase, &event.event_type) else {
            continue;
        };
        if chain.is_empty() {
            continue;
        }

        let mut handled = false;
        for factory in chain {
            let mut handler = factory.build();
            match handler.handle_event(&event.event_type, event) {
                Ok(()) => {
                    debug!(
                        event_type = %event.event_type,
                        handler = factory.name(),
                        "{}",
                        handler
                    );
                    records.extend(handler.parse_relevant_data());
                    handled = true;
                    break;
                }
                Err(error) => {
                    debug!(
                        height = block.height,
                        phase = %phase,
                        event_type = %event.event_type,
                        handler = factory.name(),
                        error = %error,
                        "Event handler failed, trying next"
                    );
                }
            }
        }

        if !handled {
            return Err(BlockProcessingError::all_handlers_failed(
                event.event_type.clone(),
                phase,
                block.height,
            ));
        }
    }

    Ok(())
}
