use near_sdk::json_types::U128;
use near_sdk::{near_bindgen, AccountId};

use near_contract_standards::non_fungible_token::TokenId;

use crate::storage::*;

#[near_bindgen]
impl Marketplace {
    pub fn get_listing(&self, token_id: TokenId) -> Option<ListingInfo> {
        self.listings.get(&token_id).map(|listing| ListingInfo {
            token_id,
            seller: listing.seller,
            price: U128(listing.price),
        })
    }

    pub fn get_listings(&self, from_index: u64, limit: u64) -> Vec<ListingInfo> {
        self.listings
            .iter()
            .skip(from_index as usize)
            .take(limit as usize)
            .map(|(token_id, listing)| ListingInfo {
                token_id,
                seller: listing.seller,
                price: U128(listing.price),
            })
            .collect()
    }

    pub fn get_listings_length(&self) -> u64 {
        self.listings.len()
    }

    pub fn get_wager_token_account_id(&self) -> AccountId {
        self.wager_token_account_id.clone()
    }

    pub fn get_ticket_account_id(&self) -> AccountId {
        self.ticket_account_id.clone()
    }
}
