use near_sdk::{env, near_bindgen, AccountId};

use crate::storage::*;

#[near_bindgen]
impl Lottery {
    pub fn assert_only_oracle(&self, account_id: &AccountId) {
        if *account_id != self.oracle_account_id {
            env::panic_str("ERR_UNAUTHORIZED");
        }
    }
}
