// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Built-in block event handlers.

use crate::config::constants::attributes;
use crate::errors::ClassificationError;
use crate::types::{parse_coins_normalized, Coin, RawEvent};

mod distribution;
mod unbonding;

pub use distribution::{DistributionEvent, GaugeDistributionEvent};
pub use unbonding::CompleteUnbondingEvent;

/// Reject an event handed to the wrong handler.
fn expect_event_type(
    expected: &str,
    event_type: &str,
    event: &RawEvent,
) -> Result<(), ClassificationError> {
    if event_type != expected || event.event_type != expected {
        return Err(ClassificationError::invalid_event(
            event_type,
            format!("expected event type {expected}"),
        ));
    }
    Ok(())
}

/// Read `(receiver, coins)` pairs where each `receiver` attribute is followed
/// directly by an `amount` attribute.
fn receiver_amount_pairs(
    event_type: &str,
    event: &RawEvent,
) -> Result<Vec<(String, Vec<Coin>)>, ClassificationError> {
    let mut pairs = Vec::new();
    let mut attrs = event.attributes.iter().peekable();

    while let Some(attr) = attrs.next() {
        if attr.key != attributes::RECEIVER {
            continue;
        }
        let amount = attrs
            .next_if(|next| next.key == attributes::AMOUNT)
            .ok_or_else(|| ClassificationError::missing_attribute(event_type, attributes::AMOUNT))?;
        pairs.push((attr.value.clone(), parse_coins_normalized(&amount.value)?));
    }

    if pairs.is_empty() {
        return Err(ClassificationError::missing_attribute(
            event_type,
            attributes::RECEIVER,
        ));
    }
    Ok(pairs)
}
