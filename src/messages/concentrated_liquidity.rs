// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Osmosis concentrated liquidity position messages.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::log::{collect_coins, CoinFlow};
use super::{join_coins, MessageHandler, Msg, TokenMovement};
use crate::errors::ClassificationError;
use crate::types::{Coin, LogMessage};

pub const MSG_CREATE_POSITION: &str = "/osmosis.concentratedliquidity.v1beta1.MsgCreatePosition";
pub const MSG_WITHDRAW_POSITION: &str =
    "/osmosis.concentratedliquidity.v1beta1.MsgWithdrawPosition";

/// Opens a concentrated liquidity position by depositing tokens into a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreatePosition {
    pub pool_id: u64,
    pub sender: String,
    pub lower_tick: i64,
    pub upper_tick: i64,
    #[serde(default)]
    pub tokens_provided: Vec<Coin>,
}

/// Withdraws liquidity from a concentrated liquidity position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWithdrawPosition {
    pub position_id: u64,
    pub sender: String,
    /// Liquidity removed, as the decimal string the chain reports
    pub liquidity_amount: String,
}

/// Classifier for [`MsgCreatePosition`]: the sender spends tokens.
#[derive(Debug, Default)]
pub struct WrapperMsgCreatePosition {
    message: Option<MsgCreatePosition>,
    tokens_sent: Vec<Coin>,
    address: String,
}

impl WrapperMsgCreatePosition {
    /// The decoded message, once handled
    pub fn message(&self) -> Option<&MsgCreatePosition> {
        self.message.as_ref()
    }
}

impl fmt::Display for WrapperMsgCreatePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MsgCreatePosition: {} created position by sending {}",
            self.address,
            join_coins(&self.tokens_sent)
        )
    }
}

impl MessageHandler for WrapperMsgCreatePosition {
    fn handle_msg(
        &mut self,
        msg_type: &str,
        msg: &Msg,
        log: &LogMessage,
    ) -> Result<(), ClassificationError> {
        let Msg::CreatePosition(inner) = msg else {
            return Err(ClassificationError::unexpected_message(
                MSG_CREATE_POSITION,
                msg.type_url(),
            ));
        };

        let coins = collect_coins(msg_type, log, CoinFlow::Spent, &inner.sender)?;
        self.tokens_sent.extend(coins);
        self.address = inner.sender.clone();
        self.message = Some(inner.clone());

        Ok(())
    }

    fn parse_relevant_data(&self) -> Vec<TokenMovement> {
        self.tokens_sent
            .iter()
            .filter(|token| token.is_positive())
            .map(|token| TokenMovement::sent(token, &self.address))
            .collect()
    }
}

/// Classifier for [`MsgWithdrawPosition`]: the sender receives tokens.
#[derive(Debug, Default)]
pub struct WrapperMsgWithdrawPosition {
    message: Option<MsgWithdrawPosition>,
    tokens_received: Vec<Coin>,
    address: String,
}

impl WrapperMsgWithdrawPosition {
    /// The decoded message, once handled
    pub fn message(&self) -> Option<&MsgWithdrawPosition> {
        self.message.as_ref()
    }
}

impl fmt::Display for WrapperMsgWithdrawPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MsgWithdrawPosition: {} withdrew position by receiving {}",
            self.address,
            join_coins(&self.tokens_received)
        )
    }
}

impl MessageHandler for WrapperMsgWithdrawPosition {
    fn handle_msg(
        &mut self,
        msg_type: &str,
        msg: &Msg,
        log: &LogMessage,
    ) -> Result<(), ClassificationError> {
        let Msg::WithdrawPosition(inner) = msg else {
            return Err(ClassificationError::unexpected_message(
                MSG_WITHDRAW_POSITION,
                msg.type_url(),
            ));
        };

        let coins = collect_coins(msg_type, log, CoinFlow::Received, &inner.sender)?;
        self.tokens_received.extend(coins);
        self.address = inner.sender.clone();
        self.message = Some(inner.clone());

        Ok(())
    }

    fn parse_relevant_data(&self) -> Vec<TokenMovement> {
        self.tokens_received
            .iter()
            .filter(|token| token.is_positive())
            .map(|token| TokenMovement::received(token, &self.address))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Direction;
    use crate::types::LogEvent;
    use num_bigint::BigInt;

    const SENDER: &str = "osmo1sender";

    fn create_msg() -> Msg {
        Msg::CreatePosition(MsgCreatePosition {
            pool_id: 1066,
            sender: SENDER.into(),
            lower_tick: -108000000,
            upper_tick: 342000000,
            tokens_provided: vec![Coin::new(1_000_000u64, "uosmo")],
        })
    }

    fn withdraw_msg() -> Msg {
        Msg::WithdrawPosition(MsgWithdrawPosition {
            position_id: 42,
            sender: SENDER.into(),
            liquidity_amount: "1517882343.751510418088349649".into(),
        })
    }

    fn log_with(action: &str, event: LogEvent) -> LogMessage {
        LogMessage::new(0)
            .with_event(LogEvent::new("message").with_attribute("action", action))
            .with_event(event)
    }

    #[test]
    fn test_create_position_extracts_sent_tokens() {
        let log = log_with(
            MSG_CREATE_POSITION,
            LogEvent::new("coin_spent")
                .with_attribute("spender", SENDER)
                .with_attribute("amount", "1000000uosmo,500000uion"),
        );

        let mut handler = WrapperMsgCreatePosition::default();
        handler.handle_msg(MSG_CREATE_POSITION, &create_msg(), &log).unwrap();

        let data = handler.parse_relevant_data();
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|m| m.direction == Direction::Sent && m.address == SENDER));
        assert_eq!(data[1].amount, BigInt::from(500_000));
        assert_eq!(
            handler.to_string(),
            "MsgCreatePosition: osmo1sender created position by sending 1000000uosmo, 500000uion"
        );
        assert_eq!(handler.message().map(|m| m.pool_id), Some(1066));
    }

    #[test]
    fn test_create_position_drops_zero_amounts() {
        let log = log_with(
            MSG_CREATE_POSITION,
            LogEvent::new("coin_spent")
                .with_attribute("spender", SENDER)
                .with_attribute("amount", "0uion,7uosmo"),
        );

        let mut handler = WrapperMsgCreatePosition::default();
        handler.handle_msg(MSG_CREATE_POSITION, &create_msg(), &log).unwrap();

        let data = handler.parse_relevant_data();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].denomination, "uosmo");
    }

    #[test]
    fn test_create_position_rejects_mismatched_action() {
        let log = log_with(
            MSG_WITHDRAW_POSITION,
            LogEvent::new("coin_spent")
                .with_attribute("spender", SENDER)
                .with_attribute("amount", "1uosmo"),
        );

        let mut handler = WrapperMsgCreatePosition::default();
        let err = handler
            .handle_msg(MSG_CREATE_POSITION, &create_msg(), &log)
            .unwrap_err();
        assert!(matches!(err, ClassificationError::LogFormat { ref message_type, .. } if message_type == MSG_CREATE_POSITION));
    }

    #[test]
    fn test_create_position_rejects_wrong_variant() {
        let mut handler = WrapperMsgCreatePosition::default();
        let err = handler
            .handle_msg(MSG_CREATE_POSITION, &withdraw_msg(), &LogMessage::default())
            .unwrap_err();
        assert_eq!(
            err,
            ClassificationError::unexpected_message(MSG_CREATE_POSITION, MSG_WITHDRAW_POSITION)
        );
    }

    #[test]
    fn test_withdraw_position_extracts_received_tokens() {
        let log = log_with(
            MSG_WITHDRAW_POSITION,
            LogEvent::new("coin_received")
                .with_attribute("receiver", "osmo1pool")
                .with_attribute("amount", "3uosmo")
                .with_attribute("receiver", SENDER)
                .with_attribute("amount", "250uosmo,12uion"),
        );

        let mut handler = WrapperMsgWithdrawPosition::default();
        handler.handle_msg(MSG_WITHDRAW_POSITION, &withdraw_msg(), &log).unwrap();

        let data = handler.parse_relevant_data();
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|m| m.direction == Direction::Received));
        assert_eq!(data[0].amount, BigInt::from(250));
        assert_eq!(
            handler.to_string(),
            "MsgWithdrawPosition: osmo1sender withdrew position by receiving 250uosmo, 12uion"
        );
    }

    #[test]
    fn test_withdraw_position_requires_coin_received() {
        let log = log_with(
            MSG_WITHDRAW_POSITION,
            LogEvent::new("coin_spent")
                .with_attribute("spender", SENDER)
                .with_attribute("amount", "1uosmo"),
        );

        let mut handler = WrapperMsgWithdrawPosition::default();
        let err = handler
            .handle_msg(MSG_WITHDRAW_POSITION, &withdraw_msg(), &log)
            .unwrap_err();
        assert!(matches!(err, ClassificationError::LogFormat { .. }));
    }
}
