use near_sdk::{env, near_bindgen, AccountId};

use near_contract_standards::non_fungible_token::TokenId;

use crate::storage::*;

#[near_bindgen]
impl LotteryTicket {
    /**
     * Bet terms of a ticket, queryable by anyone
     * Burned and unknown tickets have none
     */
    pub fn ticket_info(&self, token_id: TokenId) -> TicketInfo {
        match self.tickets.get(&token_id) {
            Some(ticket_info) => ticket_info,
            None => env::panic_str("ERR_TICKET_NOT_FOUND"),
        }
    }

    pub fn get_lottery_account_id(&self) -> Option<AccountId> {
        self.lottery_account_id.clone()
    }

    pub fn get_next_ticket_id(&self) -> u64 {
        self.next_ticket_id
    }
}
