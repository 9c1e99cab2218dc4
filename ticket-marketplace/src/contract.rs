use near_sdk::collections::UnorderedMap;
use near_sdk::json_types::U128;
use near_sdk::serde_json::json;
use near_sdk::{env, log, near_bindgen, AccountId, Balance, Promise, PromiseOrValue};
use std::default::Default;

use near_contract_standards::non_fungible_token::TokenId;

use crate::consts::*;
use crate::storage::*;

impl Default for Marketplace {
    fn default() -> Self {
        env::panic_str("ERR_MARKETPLACE_NOT_INITIALIZED")
    }
}

#[near_bindgen]
impl Marketplace {
    #[init]
    pub fn new(wager_token_account_id: AccountId, ticket_account_id: AccountId) -> Self {
        if env::state_exists() {
            env::panic_str("ERR_ALREADY_INITIALIZED");
        }

        Self {
            wager_token_account_id,
            ticket_account_id,
            listings: UnorderedMap::new(StorageKeys::Listings),
        }
    }

    /**
     * Clears a listing
     *
     * @notice only the recorded seller
     * @notice the NEP-178 approval stays on the ticket until the seller revokes it
     */
    pub fn cancel_listing(&mut self, token_id: TokenId) {
        let listing = match self.listings.get(&token_id) {
            Some(listing) => listing,
            None => env::panic_str("ERR_NOT_LISTED"),
        };

        if env::predecessor_account_id() != listing.seller {
            env::panic_str("ERR_NOT_OWNER");
        }

        self.listings.remove(&token_id);

        log!(
            "ticket_unlisted token_id: {} seller: {}",
            token_id,
            listing.seller
        );
    }
}

impl Marketplace {
    /**
     * Atomic swap of wager tokens for a listed ticket
     *
     * Clears the listing and pulls the ticket from the seller using the
     * recorded approval. The callback releases the payment to the seller only
     * after the ticket transfer settles, otherwise it restores the listing and
     * the full amount goes back to the buyer through the token standard.
     */
    pub fn buy_ticket(
        &mut self,
        buyer_id: AccountId,
        amount: Balance,
        args: BuyArgs,
    ) -> PromiseOrValue<U128> {
        let listing = match self.listings.get(&args.token_id) {
            Some(listing) => listing,
            None => env::panic_str("ERR_NOT_LISTED"),
        };

        if amount < listing.price {
            env::panic_str("ERR_PRICE_NOT_MET");
        }

        self.listings.remove(&args.token_id);

        let nft_transfer = Promise::new(self.ticket_account_id.clone()).function_call(
            "nft_transfer".to_string(),
            json!({
                "receiver_id": buyer_id,
                "token_id": args.token_id,
                "approval_id": listing.approval_id,
            })
            .to_string()
            .into_bytes(),
            NFT_TRANSFER_BOND,
            GAS_NFT_TRANSFER,
        );

        let callback = Promise::new(env::current_account_id()).function_call(
            "on_buy_ticket_callback".to_string(),
            json!({
                "token_id": args.token_id,
                "buyer_id": buyer_id,
                "seller_id": listing.seller,
                "price": U128(listing.price),
                "approval_id": listing.approval_id,
                "amount": U128(amount),
            })
            .to_string()
            .into_bytes(),
            0,
            GAS_BUY_TICKET_CALLBACK,
        );

        PromiseOrValue::Promise(nft_transfer.then(callback))
    }
}
