// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Distribution module reward claims.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::log::{collect_coins, CoinFlow};
use super::{join_coins, MessageHandler, Msg, TokenMovement};
use crate::errors::ClassificationError;
use crate::types::{Coin, LogMessage};

pub const MSG_WITHDRAW_DELEGATOR_REWARD: &str =
    "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";

/// Claims accumulated staking rewards from one validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgWithdrawDelegatorReward {
    pub delegator_address: String,
    pub validator_address: String,
}

/// Classifier for [`MsgWithdrawDelegatorReward`]: the delegator receives rewards.
#[derive(Debug, Default)]
pub struct WrapperMsgWithdrawDelegatorReward {
    delegator_address: String,
    validator_address: String,
    rewards_received: Vec<Coin>,
}

impl fmt::Display for WrapperMsgWithdrawDelegatorReward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MsgWithdrawDelegatorReward: {} withdrew rewards {} from {}",
            self.delegator_address,
            join_coins(&self.rewards_received),
            self.validator_address
        )
    }
}

impl MessageHandler for WrapperMsgWithdrawDelegatorReward {
    fn handle_msg(
        &mut self,
        msg_type: &str,
        msg: &Msg,
        log: &LogMessage,
    ) -> Result<(), ClassificationError> {
        let Msg::WithdrawDelegatorReward(inner) = msg else {
            return Err(ClassificationError::unexpected_message(
                MSG_WITHDRAW_DELEGATOR_REWARD,
                msg.type_url(),
            ));
        };

        self.rewards_received =
            collect_coins(msg_type, log, CoinFlow::Received, &inner.delegator_address)?;
        self.delegator_address = inner.delegator_address.clone();
        self.validator_address = inner.validator_address.clone();

        Ok(())
    }

    fn parse_relevant_data(&self) -> Vec<TokenMovement> {
        self.rewards_received
            .iter()
            .filter(|token| token.is_positive())
            .map(|token| TokenMovement::received(token, &self.delegator_address))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LogEvent;

    #[test]
    fn test_reward_withdrawal() {
        let msg = Msg::WithdrawDelegatorReward(MsgWithdrawDelegatorReward {
            delegator_address: "cosmos1delegator".into(),
            validator_address: "cosmosvaloper1val".into(),
        });
        let log = LogMessage::new(0)
            .with_event(
                LogEvent::new("message").with_attribute("action", MSG_WITHDRAW_DELEGATOR_REWARD),
            )
            .with_event(
                LogEvent::new("coin_received")
                    .with_attribute("receiver", "cosmos1delegator")
                    .with_attribute("amount", "1234uatom"),
            );

        let mut handler = WrapperMsgWithdrawDelegatorReward::default();
        handler
            .handle_msg(MSG_WITHDRAW_DELEGATOR_REWARD, &msg, &log)
            .unwrap();

        let data = handler.parse_relevant_data();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].denomination, "uatom");
        assert!(handler.to_string().contains("from cosmosvaloper1val"));
    }
}
