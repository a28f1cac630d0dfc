// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Helpers for reading coin movements out of a message's execution log.

use crate::config::constants::{attributes, event_types};
use crate::errors::ClassificationError;
use crate::types::{parse_coins_normalized, Coin, LogEvent, LogMessage};

/// Whether the log's `message` event reports `action == message_type`.
pub fn is_message_action_equals(message_type: &str, log: &LogMessage) -> bool {
    events_with_type(event_types::MESSAGE, log)
        .iter()
        .flat_map(|event| event.attributes.iter())
        .any(|attr| attr.key == attributes::ACTION && attr.value == message_type)
}

/// All events of `event_type` in the log, in emission order.
pub fn events_with_type<'a>(event_type: &str, log: &'a LogMessage) -> Vec<&'a LogEvent> {
    log.events
        .iter()
        .filter(|event| event.event_type == event_type)
        .collect()
}

/// Coin strings spent by `spender` across `coin_spent` events.
pub fn coins_spent<'a>(spender: &str, events: &[&'a LogEvent]) -> Vec<&'a str> {
    amounts_for(attributes::SPENDER, spender, events)
}

/// Coin strings received by `receiver` across `coin_received` events.
pub fn coins_received<'a>(receiver: &str, events: &[&'a LogEvent]) -> Vec<&'a str> {
    amounts_for(attributes::RECEIVER, receiver, events)
}

/// Each `role_key == address` attribute is paired with the `amount` attribute
/// directly after it. Unpaired roles are skipped.
fn amounts_for<'a>(role_key: &str, address: &str, events: &[&'a LogEvent]) -> Vec<&'a str> {
    let mut amounts = Vec::new();
    for event in events {
        let mut attrs = event.attributes.iter().peekable();
        while let Some(attr) = attrs.next() {
            if attr.key != role_key || attr.value != address {
                continue;
            }
            if let Some(next) = attrs.next_if(|next| next.key == attributes::AMOUNT) {
                amounts.push(next.value.as_str());
            }
        }
    }
    amounts
}

/// Which side of a coin movement a classifier reads from the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoinFlow {
    /// `coin_spent` entries keyed by `spender`
    Spent,
    /// `coin_received` entries keyed by `receiver`
    Received,
}

/// Validate the log against `message_type` and parse every coin that moved
/// for `address` in the given direction.
///
/// Fails with a log format error when the action does not match or the log has
/// no events of the flow's type, and with `NoCoinMovements` when none of those
/// events concern `address`.
pub(crate) fn collect_coins(
    message_type: &str,
    log: &LogMessage,
    flow: CoinFlow,
    address: &str,
) -> Result<Vec<Coin>, ClassificationError> {
    if !is_message_action_equals(message_type, log) {
        return Err(ClassificationError::log_format(message_type, format!("{log:?}")));
    }

    let event_type = match flow {
        CoinFlow::Spent => event_types::COIN_SPENT,
        CoinFlow::Received => event_types::COIN_RECEIVED,
    };
    let events = events_with_type(event_type, log);
    if events.is_empty() {
        return Err(ClassificationError::log_format(message_type, format!("{log:?}")));
    }

    let amounts = match flow {
        CoinFlow::Spent => coins_spent(address, &events),
        CoinFlow::Received => coins_received(address, &events),
    };
    if amounts.is_empty() {
        return Err(ClassificationError::no_coin_movements(message_type, address));
    }

    let mut coins = Vec::new();
    for amount in amounts {
        coins.extend(parse_coins_normalized(amount)?);
    }
    Ok(coins)
}
