// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use super::expect_event_type;
use crate::config::constants::{attributes, event_types};
use crate::errors::ClassificationError;
use crate::events::{EventHandler, EventRelevantInformation};
use crate::messages::join_coins;
use crate::types::{parse_coins_normalized, Coin, RawEvent};

/// Matured unbonding delegation returned to the delegator at end block.
#[derive(Debug, Default)]
pub struct CompleteUnbondingEvent {
    delegator: String,
    validator: Option<String>,
    released: Vec<Coin>,
}

impl fmt::Display for CompleteUnbondingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CompleteUnbonding: {} received {}",
            self.delegator,
            join_coins(&self.released)
        )?;
        if let Some(validator) = &self.validator {
            write!(f, " from {validator}")?;
        }
        Ok(())
    }
}

impl EventHandler for CompleteUnbondingEvent {
    fn handle_event(
        &mut self,
        event_type: &str,
        event: &RawEvent,
    ) -> Result<(), ClassificationError> {
        expect_event_type(event_types::COMPLETE_UNBONDING, event_type, event)?;

        let delegator = event.attribute(attributes::DELEGATOR).ok_or_else(|| {
            ClassificationError::missing_attribute(event_type, attributes::DELEGATOR)
        })?;
        let amount = event
            .attribute(attributes::AMOUNT)
            .ok_or_else(|| ClassificationError::missing_attribute(event_type, attributes::AMOUNT))?;

        self.released = parse_coins_normalized(amount)?;
        self.delegator = delegator.to_string();
        self.validator = event.attribute(attributes::VALIDATOR).map(str::to_string);
        Ok(())
    }

    fn parse_relevant_data(&self) -> Vec<EventRelevantInformation> {
        self.released
            .iter()
            .filter(|coin| coin.is_positive())
            .map(|coin| EventRelevantInformation {
                address: self.delegator.clone(),
                amount: coin.amount.clone(),
                denomination: coin.denom.clone(),
                event_type: event_types::COMPLETE_UNBONDING.to_string(),
            })
            .collect()
    }
}
