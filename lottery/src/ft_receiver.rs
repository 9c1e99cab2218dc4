use near_sdk::json_types::U128;
use near_sdk::{env, near_bindgen, serde_json, AccountId, PromiseOrValue};

use near_contract_standards::fungible_token::receiver::FungibleTokenReceiver;

use crate::storage::*;

#[near_bindgen]
impl FungibleTokenReceiver for Lottery {
    /**
     * Funding entry point for seeded project creation and for bets, the
     * attached wager tokens are the seed pool or the stake
     *
     * @notice only callable by the wager token contract
     * @param msg stringified Payload, e.g. {"BetArgs":{"project_id":0,"option_id":1}}
     * @returns the amount of tokens that were not spent
     */
    fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        if env::predecessor_account_id() != self.wager_token_account_id {
            env::panic_str("ERR_UNAUTHORIZED");
        }

        if amount.0 == 0 {
            env::panic_str("ERR_ZERO_AMOUNT");
        }

        let payload: Payload = serde_json::from_str(&msg).expect("ERR_INVALID_PAYLOAD");

        match payload {
            Payload::CreateProjectArgs(args) => {
                self.assert_only_oracle(&sender_id);
                self.internal_create_project(args.name, args.options, amount.0);

                PromiseOrValue::Value(U128(0))
            }
            Payload::BetArgs(args) => self.internal_bet(sender_id, amount.0, args),
        }
    }
}
