// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bank module transfers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::log::{collect_coins, CoinFlow};
use super::{join_coins, MessageHandler, Msg, TokenMovement};
use crate::errors::ClassificationError;
use crate::types::{Coin, LogMessage};

pub const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";

/// Moves coins from one account to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSend {
    pub from_address: String,
    pub to_address: String,
    #[serde(default)]
    pub amount: Vec<Coin>,
}

/// Classifier for [`MsgSend`]
///
/// Produces the sender's `coin_spent` movements and the recipient's
/// `coin_received` movements, so either party can be analyzed from the same
/// classification.
#[derive(Debug, Default)]
pub struct WrapperMsgSend {
    sender_address: String,
    receiver_address: String,
    tokens_sent: Vec<Coin>,
    tokens_received: Vec<Coin>,
}

impl fmt::Display for WrapperMsgSend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MsgSend: {} sent {} to {}",
            self.sender_address,
            join_coins(&self.tokens_sent),
            self.receiver_address
        )
    }
}

impl MessageHandler for WrapperMsgSend {
    fn handle_msg(
        &mut self,
        msg_type: &str,
        msg: &Msg,
        log: &LogMessage,
    ) -> Result<(), ClassificationError> {
        let Msg::Send(inner) = msg else {
            return Err(ClassificationError::unexpected_message(MSG_SEND, msg.type_url()));
        };

        self.tokens_sent = collect_coins(msg_type, log, CoinFlow::Spent, &inner.from_address)?;
        self.tokens_received =
            collect_coins(msg_type, log, CoinFlow::Received, &inner.to_address)?;
        self.sender_address = inner.from_address.clone();
        self.receiver_address = inner.to_address.clone();

        Ok(())
    }

    fn parse_relevant_data(&self) -> Vec<TokenMovement> {
        let sent = self
            .tokens_sent
            .iter()
            .filter(|token| token.is_positive())
            .map(|token| TokenMovement::sent(token, &self.sender_address));
        let received = self
            .tokens_received
            .iter()
            .filter(|token| token.is_positive())
            .map(|token| TokenMovement::received(token, &self.receiver_address));
        sent.chain(received).collect()
    }
}
