use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::UnorderedMap;
use near_sdk::json_types::U128;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{near_bindgen, AccountId, Balance, BorshStorageKey};

pub type ProjectId = u64;
pub type OptionId = u64;

#[near_bindgen]
#[derive(BorshSerialize, BorshDeserialize)]
pub struct Lottery {
    pub oracle_account_id: AccountId,
    pub wager_token_account_id: AccountId,
    pub ticket_account_id: AccountId,
    pub projects: UnorderedMap<ProjectId, Project>,
    pub next_project_id: ProjectId,
}

#[derive(BorshSerialize, BorshDeserialize)]
pub struct Project {
    pub name: String,
    // Oracle-funded base prize, fixed at creation
    pub seed_pool: Balance,
    pub options: Vec<ProjectOption>,
    pub is_open: bool,
    pub is_resolved: bool,
    pub winning_option_id: Option<OptionId>,
    pub total_player_bets: Balance,
}

#[derive(BorshSerialize, BorshDeserialize)]
pub struct ProjectOption {
    pub name: String,
    pub total_bet_amount: Balance,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, PartialEq))]
#[serde(crate = "near_sdk::serde")]
pub struct ProjectInfo {
    pub id: ProjectId,
    pub name: String,
    pub seed_pool: U128,
    pub options: Vec<ProjectOptionInfo>,
    pub is_open: bool,
    pub is_resolved: bool,
    pub winning_option_id: Option<OptionId>,
    pub total_player_bets: U128,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, PartialEq))]
#[serde(crate = "near_sdk::serde")]
pub struct ProjectOptionInfo {
    pub name: String,
    pub total_bet_amount: U128,
}

// Mirror of the ticket contract's side-table entry
#[derive(Serialize, Deserialize, Clone)]
#[cfg_attr(not(target_arch = "wasm32"), derive(Debug, PartialEq))]
#[serde(crate = "near_sdk::serde")]
pub struct TicketInfo {
    pub project_id: ProjectId,
    pub option_id: OptionId,
    pub bet_amount: U128,
}

#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct CreateProjectArgs {
    pub name: String,
    pub options: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct BetArgs {
    pub project_id: ProjectId,
    pub option_id: OptionId,
}

#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub enum Payload {
    CreateProjectArgs(CreateProjectArgs),
    BetArgs(BetArgs),
}

#[derive(BorshStorageKey, BorshSerialize)]
pub enum StorageKeys {
    Projects,
}
