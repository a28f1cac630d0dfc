// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-message-type classification of transaction messages
//!
//! Each supported message type has a classifier implementing [`MessageHandler`].
//! A classifier validates that an execution log belongs to its message type,
//! reads the coin movements for the acting address, and exposes them as
//! directional [`TokenMovement`] records.
//!
//! # Architecture
//!
//! 1. The caller decodes a transaction into typed [`Msg`] values plus one
//!    [`LogMessage`](crate::LogMessage) per message
//! 2. [`MessageHandlerRegistry::classify`] builds a fresh classifier for the
//!    message's type URL
//! 3. [`MessageHandler::handle_msg`] validates and extracts coin movements
//! 4. [`MessageHandler::parse_relevant_data`] returns the non-zero movements
//!
//! # Adding a message type
//!
//! Define the type URL constant and message struct, add a [`Msg`] variant,
//! implement [`MessageHandler`] and `Display` for a wrapper, then register a
//! constructor with [`MessageHandlerRegistry::register`].
//!
//! ```rust,ignore
//! pub const MSG_JOIN_POOL: &str = "/osmosis.gamm.v1beta1.MsgJoinPool";
//!
//! #[derive(Debug, Default)]
//! pub struct WrapperMsgJoinPool {
//!     address: String,
//!     tokens_sent: Vec<Coin>,
//! }
//!
//! impl MessageHandler for WrapperMsgJoinPool {
//!     fn handle_msg(&mut self, msg_type: &str, msg: &Msg, log: &LogMessage) -> Result<(), ClassificationError> {
//!         // validate, then collect coin_spent entries for the sender
//!     }
//!
//!     fn parse_relevant_data(&self) -> Vec<TokenMovement> {
//!         // one Sent movement per positive coin
//!     }
//! }
//! ```

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ClassificationError;
use crate::types::{Coin, LogMessage};

pub mod bank;
pub mod concentrated_liquidity;
pub mod distribution;
pub mod log;
mod registry;

pub use bank::{MsgSend, WrapperMsgSend, MSG_SEND};
pub use concentrated_liquidity::{
    MsgCreatePosition, MsgWithdrawPosition, WrapperMsgCreatePosition, WrapperMsgWithdrawPosition,
    MSG_CREATE_POSITION, MSG_WITHDRAW_POSITION,
};
pub use distribution::{
    MsgWithdrawDelegatorReward, WrapperMsgWithdrawDelegatorReward, MSG_WITHDRAW_DELEGATOR_REWARD,
};
pub use registry::{ClassifiedMessage, MessageHandlerFactory, MessageHandlerRegistry};

/// Direction of a token movement relative to its address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Tokens left the address
    Sent,
    /// Tokens arrived at the address
    Received,
}

/// A directional token movement extracted from a message log
///
/// Only strictly positive amounts are ever produced by a classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMovement {
    /// Amount in the denomination's base unit
    pub amount: BigInt,
    /// Base denomination
    pub denomination: String,
    /// Whether the tokens were sent or received
    pub direction: Direction,
    /// Address the tokens moved from (sent) or to (received)
    pub address: String,
}

impl TokenMovement {
    /// Movement of `coin` out of `address`
    pub fn sent(coin: &Coin, address: impl Into<String>) -> Self {
        Self {
            amount: coin.amount.clone(),
            denomination: coin.denom.clone(),
            direction: Direction::Sent,
            address: address.into(),
        }
    }

    /// Movement of `coin` into `address`
    pub fn received(coin: &Coin, address: impl Into<String>) -> Self {
        Self {
            amount: coin.amount.clone(),
            denomination: coin.denom.clone(),
            direction: Direction::Received,
            address: address.into(),
        }
    }
}

/// A decoded transaction message
///
/// Decoding from protobuf happens upstream; the engine only sees typed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    /// Concentrated liquidity position creation
    CreatePosition(MsgCreatePosition),
    /// Concentrated liquidity position withdrawal
    WithdrawPosition(MsgWithdrawPosition),
    /// Bank transfer
    Send(MsgSend),
    /// Staking reward claim
    WithdrawDelegatorReward(MsgWithdrawDelegatorReward),
}

impl Msg {
    /// Protobuf type URL of the message
    pub const fn type_url(&self) -> &'static str {
        match self {
            Msg::CreatePosition(_) => MSG_CREATE_POSITION,
            Msg::WithdrawPosition(_) => MSG_WITHDRAW_POSITION,
            Msg::Send(_) => MSG_SEND,
            Msg::WithdrawDelegatorReward(_) => MSG_WITHDRAW_DELEGATOR_REWARD,
        }
    }
}

/// Classifier contract for one message type
///
/// Instances are stateful: `handle_msg` fills internal token lists that
/// `parse_relevant_data` reads. Build a fresh instance per message and never
/// reuse one across messages. `Display` provides the human-readable summary.
pub trait MessageHandler: fmt::Display {
    /// Validate the log against `msg_type` and extract coin movements.
    fn handle_msg(
        &mut self,
        msg_type: &str,
        msg: &Msg,
        log: &LogMessage,
    ) -> Result<(), ClassificationError>;

    /// Directional records for every strictly positive extracted coin.
    fn parse_relevant_data(&self) -> Vec<TokenMovement>;

    /// Human-readable summary of the classified message
    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Join coins as `"10uosmo, 5uion"` for summaries
pub(crate) fn join_coins(coins: &[Coin]) -> String {
    coins
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
