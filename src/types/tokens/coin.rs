// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw coin type and normalized coin string parsing

use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ClassificationError;

/// Shortest and longest denominations the Cosmos SDK accepts
const MIN_DENOM_LEN: usize = 3;
const MAX_DENOM_LEN: usize = 128;

/// Raw coin amount paired with its base denomination
///
/// The amount is stored in the denomination's smallest unit (e.g. `uosmo`),
/// exactly as it appears in execution logs. Use [`convert_units`](crate::convert_units)
/// to scale it for display.
///
/// # Examples
///
/// ```
/// use taxscan::Coin;
///
/// let coin = Coin::new(1_500_000u64, "uosmo");
/// assert!(coin.is_positive());
/// assert_eq!(coin.to_string(), "1500000uosmo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Amount in the smallest unit of the denomination
    pub amount: BigInt,
    /// Base denomination (e.g. `uosmo`, `ibc/27394FB0...`)
    pub denom: String,
}

impl Coin {
    /// Create a coin from any integer amount
    pub fn new(amount: impl Into<BigInt>, denom: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            denom: denom.into(),
        }
    }

    /// Whether the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.amount.sign() == Sign::Plus
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Parse a comma separated coin list such as `"10uosmo,25ibc/ABCD"`.
///
/// Amounts may carry a fractional part (decimal coins), which is truncated to
/// the integer amount. An empty or whitespace-only input yields no coins.
/// Order is preserved and zero amounts are kept; callers decide what to drop.
///
/// # Errors
///
/// Returns [`ClassificationError::CoinParse`] when an entry has no amount, a
/// malformed amount, or an invalid denomination.
///
/// # Examples
///
/// ```
/// use taxscan::parse_coins_normalized;
///
/// let coins = parse_coins_normalized("10uosmo, 2.75uion").unwrap();
/// assert_eq!(coins.len(), 2);
/// assert_eq!(coins[1].to_string(), "2uion");
/// ```
pub fn parse_coins_normalized(input: &str) -> Result<Vec<Coin>, ClassificationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(',')
        .map(|entry| parse_coin(entry.trim(), input))
        .collect()
}

fn parse_coin(entry: &str, input: &str) -> Result<Coin, ClassificationError> {
    let split = entry
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .ok_or_else(|| ClassificationError::coin_parse(input, format!("{entry:?} has no denomination")))?;
    let (amount, denom) = entry.split_at(split);
    let denom = denom.trim_start();

    if amount.is_empty() {
        return Err(ClassificationError::coin_parse(
            input,
            format!("{entry:?} has no amount"),
        ));
    }
    validate_denom(denom).map_err(|reason| ClassificationError::coin_parse(input, reason))?;

    let integer = match amount.split_once('.') {
        Some((integer, fraction)) => {
            if fraction.contains('.') || (integer.is_empty() && fraction.is_empty()) {
                return Err(ClassificationError::coin_parse(
                    input,
                    format!("{amount:?} is not a decimal amount"),
                ));
            }
            integer
        }
        None => amount,
    };
    let integer = if integer.is_empty() { "0" } else { integer };

    let amount = BigInt::from_str(integer)
        .map_err(|e| ClassificationError::coin_parse(input, e.to_string()))?;

    Ok(Coin {
        amount,
        denom: denom.to_string(),
    })
}

/// Denominations match `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`
fn validate_denom(denom: &str) -> Result<(), String> {
    if denom.len() < MIN_DENOM_LEN || denom.len() > MAX_DENOM_LEN {
        return Err(format!("invalid denom length for {denom:?}"));
    }

    let mut chars = denom.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(format!("denom {denom:?} must start with a letter"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || "/:._-".contains(*c))) {
        return Err(format!("invalid character {bad:?} in denom {denom:?}"));
    }

    Ok(())
}
