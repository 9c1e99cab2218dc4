use near_sdk::json_types::U128;
use near_sdk::{env, near_bindgen, serde_json, AccountId, PromiseOrValue};

use near_contract_standards::fungible_token::receiver::FungibleTokenReceiver;

use crate::storage::*;

#[near_bindgen]
impl FungibleTokenReceiver for Marketplace {
    /**
     * Purchase entry point: the buyer attaches at least the listing price in
     * wager tokens through ft_transfer_call with a BuyArgs payload
     *
     * @notice only callable by the wager token contract
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
            Payload::BuyArgs(args) => self.buy_ticket(sender_id, amount.0, args),
        }
    }
}
