// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Taxable records handed to the row reducers.
//!
//! These join the facts extracted by classifiers with the block and
//! transaction context the reducers need (timestamp, hash, denomination).

use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::events::EventRelevantInformation;
use crate::messages::{Direction, TokenMovement};
use crate::types::Denomination;

/// Block a record was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    pub height: u64,
    pub time: DateTime<Utc>,
}

impl BlockContext {
    pub fn new(height: u64, time: DateTime<Utc>) -> Self {
        Self { height, time }
    }
}

/// Transaction a record was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxContext {
    pub hash: String,
    pub block: BlockContext,
}

impl TxContext {
    pub fn new(hash: impl Into<String>, block: BlockContext) -> Self {
        Self {
            hash: hash.into(),
            block,
        }
    }
}

/// Raw amount paired with its denomination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinAmount {
    pub amount: BigInt,
    pub denomination: Denomination,
}

impl CoinAmount {
    pub fn new(amount: impl Into<BigInt>, denomination: Denomination) -> Self {
        Self {
            amount: amount.into(),
            denomination,
        }
    }
}

/// One transactional movement with both parties and amounts
///
/// `received` and `sent` hold distinct sides; a plain transfer records the same
/// coin on both, a swap records what went out and what came back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxableTransaction {
    pub tx: TxContext,
    /// Type URL of the message the movement came from
    pub message_type: String,
    pub sender_address: Option<String>,
    pub receiver_address: Option<String>,
    pub sent: Option<CoinAmount>,
    pub received: Option<CoinAmount>,
}

impl TaxableTransaction {
    /// Record with no parties or amounts yet
    pub fn new(tx: TxContext, message_type: impl Into<String>) -> Self {
        Self {
            tx,
            message_type: message_type.into(),
            sender_address: None,
            receiver_address: None,
            sent: None,
            received: None,
        }
    }

    /// Build a record from one classifier movement.
    ///
    /// A `Sent` movement fills the sender side, a `Received` movement the
    /// receiver side.
    pub fn from_movement(
        tx: TxContext,
        message_type: impl Into<String>,
        movement: &TokenMovement,
        denomination: Denomination,
    ) -> Self {
        let coin = CoinAmount::new(movement.amount.clone(), denomination);
        let record = Self::new(tx, message_type);
        match movement.direction {
            Direction::Sent => record.with_sender(&movement.address, coin),
            Direction::Received => record.with_receiver(&movement.address, coin),
        }
    }

    /// Set the sending party and the amount it sent
    pub fn with_sender(mut self, address: impl Into<String>, sent: CoinAmount) -> Self {
        self.sender_address = Some(address.into());
        self.sent = Some(sent);
        self
    }

    /// Set the receiving party and the amount it received
    pub fn with_receiver(mut self, address: impl Into<String>, received: CoinAmount) -> Self {
        self.receiver_address = Some(address.into());
        self.received = Some(received);
        self
    }
}

/// Block-level taxable event (reward payout, unbonding completion)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxableEvent {
    pub block: BlockContext,
    pub address: String,
    pub amount: BigInt,
    pub denomination: Denomination,
    pub event_type: String,
}

impl TaxableEvent {
    /// Join an event record with its block and resolved denomination.
    pub fn from_relevant(
        record: &EventRelevantInformation,
        block: BlockContext,
        denomination: Denomination,
    ) -> Self {
        Self {
            block,
            address: record.address.clone(),
            amount: record.amount.clone(),
            denomination,
            event_type: record.event_type.clone(),
        }
    }
}

/// Fee paid for a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub payer_address: String,
    pub amount: BigInt,
    pub denomination: Denomination,
}

impl Fee {
    pub fn new(
        payer_address: impl Into<String>,
        amount: impl Into<BigInt>,
        denomination: Denomination,
    ) -> Self {
        Self {
            payer_address: payer_address.into(),
            amount: amount.into(),
            denomination,
        }
    }
}
