use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::UnorderedMap;
use near_sdk::json_types::U128;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{near_bindgen, AccountId, Balance, BorshStorageKey};

use near_contract_standards::non_fungible_token::TokenId;

#[near_bindgen]
#[derive(BorshSerialize, BorshDeserialize)]
pub struct Marketplace {
    pub wager_token_account_id: AccountId,
    pub ticket_account_id: AccountId,
    // At most one active listing per ticket
    pub listings: UnorderedMap<TokenId, Listing>,
}

#[derive(BorshSerialize, BorshDeserialize)]
pub struct Listing {
    pub seller: AccountId,
    pub price: Balance,
    // NEP-178 approval granted to this marketplace by the seller
    pub approval_id: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, PartialEq))]
#[serde(crate = "near_sdk::serde")]
pub struct ListingInfo {
    pub token_id: TokenId,
    pub seller: AccountId,
    pub price: U128,
}

#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct ListTicketArgs {
    pub price: U128,
}

#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct BuyArgs {
    pub token_id: TokenId,
}

#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub enum Payload {
    BuyArgs(BuyArgs),
}

#[derive(BorshStorageKey, BorshSerialize)]
pub enum StorageKeys {
    Listings,
}
