use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LazyOption, LookupMap};
use near_sdk::{near_bindgen, AccountId, BorshStorageKey};

use near_contract_standards::fungible_token::metadata::FungibleTokenMetadata;
use near_contract_standards::fungible_token::FungibleToken;

#[near_bindgen]
#[derive(BorshSerialize, BorshDeserialize)]
pub struct WagerToken {
    pub owner_id: AccountId,
    pub token: FungibleToken,
    pub metadata: LazyOption<FungibleTokenMetadata>,
    // Accounts that already used the faucet
    pub claims: LookupMap<AccountId, bool>,
}

#[derive(BorshStorageKey, BorshSerialize)]
pub enum StorageKeys {
    FungibleToken,
    Metadata,
    Claims,
}
