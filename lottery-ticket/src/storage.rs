use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LazyOption, LookupMap};
use near_sdk::json_types::U128;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{near_bindgen, AccountId, BorshStorageKey};

use near_contract_standards::non_fungible_token::metadata::NFTContractMetadata;
use near_contract_standards::non_fungible_token::{NonFungibleToken, TokenId};

pub type ProjectId = u64;
pub type OptionId = u64;

#[near_bindgen]
#[derive(BorshSerialize, BorshDeserialize)]
pub struct LotteryTicket {
    pub tokens: NonFungibleToken,
    pub metadata: LazyOption<NFTContractMetadata>,
    pub owner_id: AccountId,
    // The only account allowed to mint and burn, set once by the owner
    pub lottery_account_id: Option<AccountId>,
    // Bet terms per ticket, untouched by transfers
    pub tickets: LookupMap<TokenId, TicketInfo>,
    pub next_ticket_id: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, PartialEq))]
#[serde(crate = "near_sdk::serde")]
pub struct TicketInfo {
    pub project_id: ProjectId,
    pub option_id: OptionId,
    pub bet_amount: U128,
}

#[derive(BorshStorageKey, BorshSerialize)]
pub enum StorageKeys {
    NonFungibleToken,
    Metadata,
    TokenMetadata,
    Enumeration,
    Approval,
    Tickets,
}
