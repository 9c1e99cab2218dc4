use near_sdk::{env, near_bindgen};

use crate::storage::*;

#[near_bindgen]
impl LotteryTicket {
    pub fn assert_only_owner(&self) {
        if env::predecessor_account_id() != self.owner_id {
            env::panic_str("ERR_UNAUTHORIZED");
        }
    }

    pub fn assert_only_lottery(&self) {
        match &self.lottery_account_id {
            Some(lottery_account_id)
                if *lottery_account_id == env::predecessor_account_id() => {}
            _ => env::panic_str("ERR_UNAUTHORIZED"),
        }
    }
}
