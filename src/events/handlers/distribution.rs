// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Reward distribution events.

use std::fmt;

use super::{expect_event_type, receiver_amount_pairs};
use crate::config::constants::{attributes, event_types};
use crate::errors::ClassificationError;
use crate::events::{EventHandler, EventRelevantInformation};
use crate::messages::join_coins;
use crate::types::{Coin, RawEvent};

/// Generic `distribution` event: one or more `receiver`/`amount` pairs.
#[derive(Debug, Default)]
pub struct DistributionEvent {
    payouts: Vec<(String, Vec<Coin>)>,
}

impl fmt::Display for DistributionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distribution:")?;
        for (receiver, coins) in &self.payouts {
            write!(f, " {receiver} received {};", join_coins(coins))?;
        }
        Ok(())
    }
}

impl EventHandler for DistributionEvent {
    fn handle_event(
        &mut self,
        event_type: &str,
        event: &RawEvent,
    ) -> Result<(), ClassificationError> {
        expect_event_type(event_types::DISTRIBUTION, event_type, event)?;
        self.payouts = receiver_amount_pairs(event_type, event)?;
        Ok(())
    }

    fn parse_relevant_data(&self) -> Vec<EventRelevantInformation> {
        payouts_to_records(&self.payouts)
    }
}

/// Osmosis incentive gauge payout: a `distribution` event tagged with `gauge_id`.
///
/// Events without a gauge id are left for the generic handler.
#[derive(Debug, Default)]
pub struct GaugeDistributionEvent {
    gauge_id: String,
    payouts: Vec<(String, Vec<Coin>)>,
}

impl GaugeDistributionEvent {
    /// Gauge that paid out, once handled
    pub fn gauge_id(&self) -> &str {
        &self.gauge_id
    }
}

impl fmt::Display for GaugeDistributionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gauge {} distribution:", self.gauge_id)?;
        for (receiver, coins) in &self.payouts {
            write!(f, " {receiver} received {};", join_coins(coins))?;
        }
        Ok(())
    }
}

impl EventHandler for GaugeDistributionEvent {
    fn handle_event(
        &mut self,
        event_type: &str,
        event: &RawEvent,
    ) -> Result<(), ClassificationError> {
        expect_event_type(event_types::DISTRIBUTION, event_type, event)?;

        let gauge_id = event
            .attribute(attributes::GAUGE_ID)
            .ok_or_else(|| ClassificationError::missing_attribute(event_type, attributes::GAUGE_ID))?;

        self.payouts = receiver_amount_pairs(event_type, event)?;
        self.gauge_id = gauge_id.to_string();
        Ok(())
    }

    fn parse_relevant_data(&self) -> Vec<EventRelevantInformation> {
        payouts_to_records(&self.payouts)
    }
}

fn payouts_to_records(payouts: &[(String, Vec<Coin>)]) -> Vec<EventRelevantInformation> {
    payouts
        .iter()
        .flat_map(|(receiver, coins)| {
            coins
                .iter()
                .filter(|coin| coin.is_positive())
                .map(move |coin| EventRelevantInformation {
                    address: receiver.clone(),
                    amount: coin.amount.clone(),
                    denomination: coin.denom.clone(),
                    event_type: event_types::DISTRIBUTION.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn distribution(attrs: &[(&str, &str)]) -> RawEvent {
        attrs
            .iter()
            .fold(RawEvent::new("distribution"), |event, (k, v)| {
                event.with_attribute(*k, *v)
            })
    }

    #[test]
    fn test_generic_distribution_pairs() {
        let event = distribution(&[
            ("receiver", "osmo1alice"),
            ("amount", "100uosmo,0uion"),
            ("receiver", "osmo1bob"),
            ("amount", "7ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"),
        ]);

        let mut handler = DistributionEvent::default();
        handler.handle_event("distribution", &event).unwrap();
        let records = handler.parse_relevant_data();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].address, "osmo1alice");
        assert_eq!(records[0].amount, BigInt::from(100));
        assert_eq!(records[0].denomination, "uosmo");
        assert_eq!(records[1].address, "osmo1bob");
        assert!(records[1].denomination.starts_with("ibc/"));
        assert!(handler.to_string().contains("osmo1alice received 100uosmo"));
    }

    #[test]
    fn test_generic_distribution_requires_receiver() {
        let event = distribution(&[("amount", "100uosmo")]);
        let err = DistributionEvent::default()
            .handle_event("distribution", &event)
            .unwrap_err();
        assert!(matches!(err, ClassificationError::MissingAttribute { ref key, .. } if key == "receiver"));
    }

    #[test]
    fn test_unpaired_receiver_rejected() {
        let event = distribution(&[("receiver", "osmo1alice"), ("validator", "osmovaloper1x")]);
        let err = DistributionEvent::default()
            .handle_event("distribution", &event)
            .unwrap_err();
        assert!(matches!(err, ClassificationError::MissingAttribute { ref key, .. } if key == "amount"));
    }

    #[test]
    fn test_wrong_event_type_rejected() {
        let event = RawEvent::new("transfer").with_attribute("receiver", "osmo1alice");
        let err = DistributionEvent::default()
            .handle_event("transfer", &event)
            .unwrap_err();
        assert!(matches!(err, ClassificationError::InvalidEvent { .. }));
    }

    #[test]
    fn test_gauge_distribution_requires_gauge_id() {
        let event = distribution(&[("receiver", "osmo1alice"), ("amount", "5uosmo")]);
        let err = GaugeDistributionEvent::default()
            .handle_event("distribution", &event)
            .unwrap_err();
        assert!(matches!(err, ClassificationError::MissingAttribute { ref key, .. } if key == "gauge_id"));
    }

    #[test]
    fn test_gauge_distribution() {
        let event = distribution(&[
            ("gauge_id", "1842"),
            ("receiver", "osmo1alice"),
            ("amount", "5uosmo"),
        ]);
        let mut handler = GaugeDistributionEvent::default();
        handler.handle_event("distribution", &event).unwrap();

        assert_eq!(handler.gauge_id(), "1842");
        let records = handler.parse_relevant_data();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].event_type, "distribution");
    }
}
