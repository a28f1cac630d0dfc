// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Reduction of taxable records into labeled output rows.
//!
//! Four entry points cover the classification sources:
//!
//! - [`RowReducer::event_parse_basic`] for block-level rewards (best effort:
//!   missing conversion metadata falls back to the raw amount and base denom)
//! - [`RowReducer::parse_basic`] for deposits and withdrawals relative to an
//!   address
//! - [`RowReducer::parse_swap`] for swaps
//! - [`RowReducer::parse_fee`] for transaction fees
//!
//! The transactional paths require exact conversions and fail on any
//! conversion error.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::config::constants::DEFAULT_DATE_FORMAT;
use crate::config::TaxscanConfig;
use crate::conversion::{convert_units, DenomMetadataSource};
use crate::errors::{Classification, RowError};
use crate::taxable::{CoinAmount, Fee, TaxableEvent, TaxableTransaction, TxContext};

/// Semantic label of an output row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Funds received by the analyzed address (deposits)
    Income,
    /// Funds leaving the analyzed address (withdrawals, fees)
    Cost,
    Swap,
    /// Block-level reward payouts
    Reward,
}

impl Label {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Label::Income => "income",
            Label::Cost => "cost",
            Label::Swap => "swap",
            Label::Reward => "reward",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled, currency-converted output row
///
/// Empty strings mark unpopulated columns. A row with no label and neither
/// side populated is a no-op shell produced when the analyzed address took no
/// part in a transaction; callers drop those with [`OutputRow::is_empty_shell`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub date: String,
    pub sent_amount: String,
    pub sent_currency: String,
    pub received_amount: String,
    pub received_currency: String,
    pub fee_amount: String,
    pub fee_currency: String,
    pub label: Option<Label>,
    pub description: String,
    pub tx_hash: String,
}

impl OutputRow {
    /// Column names in [`to_record`](Self::to_record) order
    pub const HEADERS: [&'static str; 10] = [
        "Date",
        "Sent Amount",
        "Sent Currency",
        "Received Amount",
        "Received Currency",
        "Fee Amount",
        "Fee Currency",
        "Label",
        "Description",
        "TxHash",
    ];

    /// Column values for a CSV writer
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.sent_amount.clone(),
            self.sent_currency.clone(),
            self.received_amount.clone(),
            self.received_currency.clone(),
            self.fee_amount.clone(),
            self.fee_currency.clone(),
            self.label.map(|label| label.to_string()).unwrap_or_default(),
            self.description.clone(),
            self.tx_hash.clone(),
        ]
    }

    /// Whether the row carries no movement at all
    pub fn is_empty_shell(&self) -> bool {
        self.label.is_none() && self.sent_amount.is_empty() && self.received_amount.is_empty()
    }

    /// Attach a free-form description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Builds [`OutputRow`]s, converting amounts through a metadata source
pub struct RowReducer<'a, S: DenomMetadataSource + ?Sized> {
    metadata: &'a S,
    date_format: String,
}

impl<'a, S: DenomMetadataSource + ?Sized> RowReducer<'a, S> {
    /// Reducer using the default date layout
    pub fn new(metadata: &'a S) -> Self {
        Self {
            metadata,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Reducer using the configured date layout
    pub fn from_config(metadata: &'a S, config: &TaxscanConfig) -> Self {
        Self::new(metadata).with_date_format(&config.date_format)
    }

    /// Use a custom `chrono` date layout.
    ///
    /// An unparseable layout is ignored with a warning.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            warn!(format = %format, "Invalid date format, keeping {}", self.date_format);
            return self;
        }
        self.date_format = format;
        self
    }

    /// Reduce a block-level reward event.
    ///
    /// Always labeled [`Label::Reward`] with only the received side populated.
    /// When conversion fails the raw integer amount and base denomination are
    /// used instead.
    pub fn event_parse_basic(&self, event: &TaxableEvent) -> OutputRow {
        let (received_amount, received_currency) =
            match convert_units(&event.amount, &event.denomination, self.metadata) {
                Ok(converted) => (converted.amount().to_string(), converted.symbol().to_string()),
                Err(error) => {
                    tracing::debug!(
                        denom = %event.denomination.base,
                        error = %error,
                        "Using raw amount for reward row"
                    );
                    (event.amount.to_string(), event.denomination.base.clone())
                }
            };

        OutputRow {
            date: self.format_date(&event.block.time),
            received_amount,
            received_currency,
            label: Some(Label::Reward),
            ..OutputRow::default()
        }
    }

    /// Reduce a transfer relative to `address`.
    ///
    /// A receiver gets an [`Label::Income`] row with the received side, a
    /// sender a [`Label::Cost`] row with the sent side. The receiver check
    /// comes first. When `address` is neither party the result is an empty
    /// shell, which is not an error.
    ///
    /// # Errors
    ///
    /// [`RowError`] naming the transaction hash and `deposit` or `withdrawal`
    /// when the relevant side is absent or cannot be converted.
    pub fn parse_basic(
        &self,
        address: &str,
        transaction: &TaxableTransaction,
    ) -> Result<OutputRow, RowError> {
        let mut row = self.tx_row(&transaction.tx);

        if transaction.receiver_address.as_deref() == Some(address) {
            let (amount, symbol) = self.convert_side(
                &transaction.tx.hash,
                transaction.received.as_ref(),
                Classification::Deposit,
            )?;
            row.received_amount = amount;
            row.received_currency = symbol;
            row.label = Some(Label::Income);
        } else if transaction.sender_address.as_deref() == Some(address) {
            let (amount, symbol) = self.convert_side(
                &transaction.tx.hash,
                transaction.sent.as_ref(),
                Classification::Withdrawal,
            )?;
            row.sent_amount = amount;
            row.sent_currency = symbol;
            row.label = Some(Label::Cost);
        }

        Ok(row)
    }

    /// Reduce a swap, populating both sides.
    ///
    /// # Errors
    ///
    /// [`RowError`] naming `swap received` or `swap sent`; the received side is
    /// converted first.
    pub fn parse_swap(&self, transaction: &TaxableTransaction) -> Result<OutputRow, RowError> {
        let hash = &transaction.tx.hash;
        let (received_amount, received_currency) = self.convert_side(
            hash,
            transaction.received.as_ref(),
            Classification::SwapReceived,
        )?;
        let (sent_amount, sent_currency) =
            self.convert_side(hash, transaction.sent.as_ref(), Classification::SwapSent)?;

        Ok(OutputRow {
            sent_amount,
            sent_currency,
            received_amount,
            received_currency,
            label: Some(Label::Swap),
            ..self.tx_row(&transaction.tx)
        })
    }

    /// Reduce a transaction fee into a [`Label::Cost`] row on the sent side.
    ///
    /// # Errors
    ///
    /// [`RowError`] naming the transaction hash and `fee`.
    pub fn parse_fee(&self, tx: &TxContext, fee: &Fee) -> Result<OutputRow, RowError> {
        let coin = CoinAmount::new(fee.amount.clone(), fee.denomination.clone());
        let (sent_amount, sent_currency) =
            self.convert_side(&tx.hash, Some(&coin), Classification::Fee)?;

        Ok(OutputRow {
            sent_amount,
            sent_currency,
            label: Some(Label::Cost),
            ..self.tx_row(tx)
        })
    }

    fn tx_row(&self, tx: &TxContext) -> OutputRow {
        OutputRow {
            date: self.format_date(&tx.block.time),
            tx_hash: tx.hash.clone(),
            ..OutputRow::default()
        }
    }

    fn convert_side(
        &self,
        tx_hash: &str,
        side: Option<&CoinAmount>,
        classification: Classification,
    ) -> Result<(String, String), RowError> {
        let coin = side.ok_or_else(|| RowError::missing_side(tx_hash, classification))?;
        let converted = convert_units(&coin.amount, &coin.denomination, self.metadata)
            .map_err(|source| RowError::conversion(tx_hash, classification, source))?;
        Ok((converted.amount().to_string(), converted.symbol().to_string()))
    }

    fn format_date(&self, time: &DateTime<Utc>) -> String {
        time.format(&self.date_format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConversionError;
    use crate::taxable::BlockContext;
    use crate::types::{DenomMetadata, Denomination};
    use chrono::TimeZone;
    use num_bigint::BigInt;
    use std::collections::HashMap;

    fn metadata() -> HashMap<String, DenomMetadata> {
        let mut metadata = HashMap::new();
        metadata.insert("uatom".to_string(), DenomMetadata::new(6, "ATOM"));
        metadata.insert("uosmo".to_string(), DenomMetadata::new(6, "OSMO"));
        metadata
    }

    fn tx() -> TxContext {
        let time = Utc.with_ymd_and_hms(2023, 6, 15, 8, 30, 0).unwrap();
        TxContext::new("HASH1", BlockContext::new(10, time))
    }

    fn coin(amount: u64, denom: &str) -> CoinAmount {
        CoinAmount::new(amount, Denomination::new(denom))
    }

    fn transfer() -> TaxableTransaction {
        TaxableTransaction::new(tx(), "/cosmos.bank.v1beta1.MsgSend")
            .with_sender("addrB", coin(1_000_000, "uatom"))
            .with_receiver("addrA", coin(1_000_000, "uatom"))
    }

    #[test]
    fn test_basic_receiver_is_income() {
        let metadata = metadata();
        let row = RowReducer::new(&metadata)
            .parse_basic("addrA", &transfer())
            .unwrap();

        assert_eq!(row.received_amount, "1");
        assert_eq!(row.received_currency, "ATOM");
        assert_eq!(row.label, Some(Label::Income));
        assert_eq!(row.sent_amount, "");
        assert_eq!(row.date, "2023-06-15 08:30:00");
        assert_eq!(row.tx_hash, "HASH1");
    }

    #[test]
    fn test_basic_sender_is_cost() {
        let metadata = metadata();
        let row = RowReducer::new(&metadata)
            .parse_basic("addrB", &transfer())
            .unwrap();
        assert_eq!(row.sent_amount, "1");
        assert_eq!(row.label, Some(Label::Cost));
        assert!(row.received_amount.is_empty());
    }

    #[test]
    fn test_basic_unrelated_address_is_shell() {
        let metadata = metadata();
        let row = RowReducer::new(&metadata)
            .parse_basic("addrC", &transfer())
            .unwrap();
        assert!(row.is_empty_shell());
        assert_eq!(row.tx_hash, "HASH1");
    }

    #[test]
    fn test_basic_deposit_conversion_error() {
        let metadata: HashMap<String, DenomMetadata> = HashMap::new();
        let err = RowReducer::new(&metadata)
            .parse_basic("addrA", &transfer())
            .unwrap_err();
        assert_eq!(
            err,
            RowError::conversion(
                "HASH1",
                Classification::Deposit,
                ConversionError::missing_metadata("uatom")
            )
        );
    }

    #[test]
    fn test_swap_missing_received_metadata() {
        let metadata = metadata();
        let swap = TaxableTransaction::new(tx(), "swap")
            .with_sender("addrA", coin(5_000_000, "uosmo"))
            .with_receiver("addrA", coin(42, "uion"));

        let err = RowReducer::new(&metadata).parse_swap(&swap).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot parse denom units for TX HASH1 (classification: swap received)"
        );
    }

    #[test]
    fn test_swap_populates_both_sides() {
        let metadata = metadata();
        let swap = TaxableTransaction::new(tx(), "swap")
            .with_sender("addrA", coin(2_500_000, "uosmo"))
            .with_receiver("addrA", coin(10, "uatom"));

        let row = RowReducer::new(&metadata).parse_swap(&swap).unwrap();
        assert_eq!(row.sent_amount, "2.5");
        assert_eq!(row.sent_currency, "OSMO");
        assert_eq!(row.received_amount, "0.00001");
        assert_eq!(row.label, Some(Label::Swap));
    }

    #[test]
    fn test_swap_missing_sent_side() {
        let metadata = metadata();
        let swap =
            TaxableTransaction::new(tx(), "swap").with_receiver("addrA", coin(10, "uatom"));
        let err = RowReducer::new(&metadata).parse_swap(&swap).unwrap_err();
        assert_eq!(err, RowError::missing_side("HASH1", Classification::SwapSent));
    }

    #[test]
    fn test_fee_row() {
        let metadata = metadata();
        let fee = Fee::new("addrA", 3750u64, Denomination::new("uosmo"));
        let row = RowReducer::new(&metadata).parse_fee(&tx(), &fee).unwrap();
        assert_eq!(row.sent_amount, "0.00375");
        assert_eq!(row.sent_currency, "OSMO");
        assert_eq!(row.label, Some(Label::Cost));
    }

    #[test]
    fn test_fee_error_names_fee() {
        let metadata = metadata();
        let fee = Fee::new("addrA", 1u64, Denomination::new("uion"));
        let err = RowReducer::new(&metadata).parse_fee(&tx(), &fee).unwrap_err();
        assert!(err.to_string().contains("(classification: fee)"));
    }

    #[test]
    fn test_reward_falls_back_to_raw_amount() {
        let metadata = metadata();
        let event = TaxableEvent {
            block: tx().block,
            address: "addrA".into(),
            amount: BigInt::from(123),
            denomination: Denomination::new("uion"),
            event_type: "distribution".into(),
        };
        let row = RowReducer::new(&metadata).event_parse_basic(&event);
        assert_eq!(row.received_amount, "123");
        assert_eq!(row.received_currency, "uion");
        assert_eq!(row.label, Some(Label::Reward));
        assert!(row.sent_amount.is_empty());
    }

    #[test]
    fn test_invalid_date_format_ignored() {
        let metadata = metadata();
        let reducer = RowReducer::new(&metadata).with_date_format("%Q");
        let row = reducer.parse_basic("addrA", &transfer()).unwrap();
        assert_eq!(row.date, "2023-06-15 08:30:00");
    }

    #[test]
    fn test_record_matches_headers() {
        let row = OutputRow {
            label: Some(Label::Reward),
            ..OutputRow::default()
        };
        let record = row.to_record();
        assert_eq!(record.len(), OutputRow::HEADERS.len());
        assert_eq!(record[7], "reward");
    }
}
