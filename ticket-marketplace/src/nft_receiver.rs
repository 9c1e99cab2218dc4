use near_sdk::{env, log, near_bindgen, serde_json, AccountId, PromiseOrValue};

use near_contract_standards::non_fungible_token::approval::NonFungibleTokenApprovalReceiver;
use near_contract_standards::non_fungible_token::TokenId;

use crate::storage::*;

#[near_bindgen]
impl NonFungibleTokenApprovalReceiver for Marketplace {
    /**
     * Listing entry point, called by the ticket contract when a seller
     * approves this marketplace through nft_approve
     *
     * The ticket contract has already verified that `owner_id` owns the token,
     * and `approval_id` lets us pull the ticket later without custody
     *
     * @param msg stringified ListTicketArgs, e.g. {"price":"80"}
     */
    fn nft_on_approve(
        &mut self,
        token_id: TokenId,
        owner_id: AccountId,
        approval_id: u64,
        msg: String,
    ) -> PromiseOrValue<String> {
        if env::predecessor_account_id() != self.ticket_account_id {
            env::panic_str("ERR_UNAUTHORIZED");
        }

        let args: ListTicketArgs = serde_json::from_str(&msg).expect("ERR_INVALID_PAYLOAD");

        if args.price.0 == 0 {
            env::panic_str("ERR_INVALID_PRICE");
        }

        self.listings.insert(
            &token_id,
            &Listing {
                seller: owner_id.clone(),
                price: args.price.0,
                approval_id,
            },
        );

        log!(
            "ticket_listed token_id: {} seller: {} price: {}",
            token_id,
            owner_id,
            args.price.0
        );

        PromiseOrValue::Value("".to_string())
    }
}
