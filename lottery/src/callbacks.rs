use near_sdk::json_types::U128;
use near_sdk::serde_json::json;
use near_sdk::{env, log, near_bindgen, serde_json, AccountId, Promise, PromiseResult};

use near_contract_standards::non_fungible_token::{Token, TokenId};

use crate::consts::*;
use crate::storage::*;

#[near_bindgen]
impl Lottery {
    /**
     * Settles a bet after the ticket mint resolves
     *
     * failure: roll the bet totals back and refund the stake through the
     * token standard's unused-amount return
     */
    #[private]
    pub fn on_bet_callback(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        project_id: ProjectId,
        option_id: OptionId,
    ) -> U128 {
        match env::promise_result(0) {
            PromiseResult::Successful(result) => {
                let token_id: TokenId =
                    serde_json::from_slice(&result).expect("ERR_INVALID_TOKEN_ID");

                log!(
                    "bet_placed project_id: {} option_id: {} account_id: {} amount: {} token_id: {}",
                    project_id,
                    option_id,
                    sender_id,
                    amount.0,
                    token_id
                );

                U128(0)
            }
            _ => {
                // A refunded stake leaves the prize pool and the totals must
                // follow, even when resolution happened while the mint was
                // in flight
                let mut project = self.get_project_or_panic(project_id);
                project.options[option_id as usize].total_bet_amount -= amount.0;
                project.total_player_bets -= amount.0;
                self.projects.insert(&project_id, &project);

                log!(
                    "bet_rejected project_id: {} account_id: {} amount: {}",
                    project_id,
                    sender_id,
                    amount.0
                );

                U128(amount.0)
            }
        }
    }

    /**
     * Validates a claim against the ticket read back from the ticket
     * contract, then burns the certificate before releasing the payout
     */
    #[private]
    pub fn on_claim_winnings_callback(&mut self, token_id: TokenId, payee: AccountId) -> Promise {
        let token: Token = match env::promise_result(0) {
            PromiseResult::Successful(result) => {
                match serde_json::from_slice::<Option<Token>>(&result).expect("ERR_INVALID_TOKEN") {
                    Some(token) => token,
                    None => env::panic_str("ERR_TICKET_NOT_FOUND"),
                }
            }
            _ => env::panic_str("ERR_TICKET_NOT_FOUND"),
        };

        let ticket_info: TicketInfo = match env::promise_result(1) {
            PromiseResult::Successful(result) => {
                serde_json::from_slice(&result).expect("ERR_INVALID_TICKET_INFO")
            }
            _ => env::panic_str("ERR_TICKET_NOT_FOUND"),
        };

        if token.owner_id != payee {
            env::panic_str("ERR_NOT_OWNER");
        }

        let project = self.get_project_or_panic(ticket_info.project_id);
        let payout = self.compute_payout(&project, &ticket_info);

        let burn_ticket = Promise::new(self.ticket_account_id.clone()).function_call(
            "burn_ticket".to_string(),
            json!({ "token_id": token_id }).to_string().into_bytes(),
            0,
            GAS_BURN_TICKET,
        );

        let callback = Promise::new(env::current_account_id()).function_call(
            "on_burn_ticket_callback".to_string(),
            json!({
                "token_id": token_id,
                "payee": payee,
                "payout": U128(payout),
            })
            .to_string()
            .into_bytes(),
            0,
            GAS_BURN_TICKET_CALLBACK,
        );

        burn_ticket.then(callback)
    }

    /**
     * Releases the payout once the certificate is gone
     */
    #[private]
    pub fn on_burn_ticket_callback(
        &mut self,
        token_id: TokenId,
        payee: AccountId,
        payout: U128,
    ) -> Promise {
        match env::promise_result(0) {
            PromiseResult::Successful(_result) => {
                log!(
                    "winnings_claimed token_id: {} account_id: {} payout: {}",
                    token_id,
                    payee,
                    payout.0
                );

                Promise::new(self.wager_token_account_id.clone()).function_call(
                    "ft_transfer".to_string(),
                    json!({
                        "receiver_id": payee,
                        "amount": payout,
                        "memo": "winnings",
                    })
                    .to_string()
                    .into_bytes(),
                    FT_TRANSFER_BOND,
                    GAS_FT_TRANSFER,
                )
            }
            _ => env::panic_str("ERR_BURN_TICKET_UNSUCCESSFUL"),
        }
    }
}
