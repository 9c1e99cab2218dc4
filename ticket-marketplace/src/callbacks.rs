use near_sdk::json_types::U128;
use near_sdk::serde_json::json;
use near_sdk::{env, log, near_bindgen, AccountId, Promise, PromiseResult};

use near_contract_standards::non_fungible_token::TokenId;

use crate::consts::*;
use crate::storage::*;

#[near_bindgen]
impl Marketplace {
    /**
     * Settles a purchase after the ticket transfer resolves
     *
     * success: pay the seller, return the excess as unused
     * failure: restore the listing and return the full amount
     */
    #[private]
    pub fn on_buy_ticket_callback(
        &mut self,
        token_id: TokenId,
        buyer_id: AccountId,
        seller_id: AccountId,
        price: U128,
        approval_id: u64,
        amount: U128,
    ) -> U128 {
        match env::promise_result(0) {
            PromiseResult::Successful(_result) => {
                Promise::new(self.wager_token_account_id.clone())
                    .function_call(
                        "ft_transfer".to_string(),
                        json!({
                            "receiver_id": seller_id,
                            "amount": price,
                            "memo": "ticket sale",
                        })
                        .to_string()
                        .into_bytes(),
                        FT_TRANSFER_BOND,
                        GAS_FT_TRANSFER,
                    )
                    .then(Promise::new(env::current_account_id()).function_call(
                        "on_pay_seller_callback".to_string(),
                        json!({
                            "token_id": token_id,
                            "seller_id": seller_id,
                            "price": price,
                        })
                        .to_string()
                        .into_bytes(),
                        0,
                        GAS_PAY_SELLER_CALLBACK,
                    ));

                log!(
                    "ticket_sold token_id: {} seller: {} buyer: {} price: {}",
                    token_id,
                    seller_id,
                    buyer_id,
                    price.0
                );

                U128(amount.0 - price.0)
            }
            _ => {
                self.listings.insert(
                    &token_id,
                    &Listing {
                        seller: seller_id,
                        price: price.0,
                        approval_id,
                    },
                );

                log!(
                    "ticket_sale_failed token_id: {} buyer: {}",
                    token_id,
                    buyer_id
                );

                U128(amount.0)
            }
        }
    }

    /**
     * Flags a seller payment that bounced, the sale itself already settled
     * The price stays on this contract for manual recovery, a payment can
     * only bounce if the seller deregistered from the wager token
     */
    #[private]
    pub fn on_pay_seller_callback(&mut self, token_id: TokenId, seller_id: AccountId, price: U128) {
        match env::promise_result(0) {
            PromiseResult::Successful(_result) => {}
            _ => {
                log!(
                    "seller_payment_failed token_id: {} seller: {} price: {}",
                    token_id,
                    seller_id,
                    price.0
                );
            }
        }
    }
}
