use near_sdk::collections::{LazyOption, LookupMap};
use near_sdk::json_types::U128;
use near_sdk::{env, near_bindgen, AccountId, PromiseOrValue};
use std::default::Default;

use near_contract_standards::fungible_token::events::FtMint;
use near_contract_standards::fungible_token::metadata::{
    FungibleTokenMetadata, FungibleTokenMetadataProvider, FT_METADATA_SPEC,
};
use near_contract_standards::fungible_token::FungibleToken;

use crate::consts::*;
use crate::storage::*;

impl Default for WagerToken {
    fn default() -> Self {
        env::panic_str("ERR_WAGER_TOKEN_NOT_INITIALIZED")
    }
}

#[near_bindgen]
impl WagerToken {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        if env::state_exists() {
            env::panic_str("ERR_ALREADY_INITIALIZED");
        }

        let metadata = FungibleTokenMetadata {
            spec: FT_METADATA_SPEC.to_string(),
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            icon: None,
            reference: None,
            reference_hash: None,
            decimals: TOKEN_DECIMALS,
        };
        metadata.assert_valid();

        Self {
            owner_id,
            token: FungibleToken::new(StorageKeys::FungibleToken),
            metadata: LazyOption::new(StorageKeys::Metadata, Some(&metadata)),
            claims: LookupMap::new(StorageKeys::Claims),
        }
    }

    /**
     * Mints FAUCET_AMOUNT for the caller, once per account
     * Registers the account so no prior storage_deposit is needed
     *
     * @returns the minted amount
     */
    pub fn faucet(&mut self) -> U128 {
        let account_id = env::predecessor_account_id();

        if self.claims.get(&account_id).unwrap_or(false) {
            env::panic_str("ERR_ALREADY_CLAIMED");
        }

        if self.token.accounts.get(&account_id).is_none() {
            self.token.internal_register_account(&account_id);
        }

        self.token.internal_deposit(&account_id, FAUCET_AMOUNT);
        self.claims.insert(&account_id, &true);

        FtMint {
            owner_id: &account_id,
            amount: &U128(FAUCET_AMOUNT),
            memo: Some("faucet"),
        }
        .emit();

        U128(FAUCET_AMOUNT)
    }

    pub fn has_claimed(&self, account_id: AccountId) -> bool {
        self.claims.get(&account_id).unwrap_or(false)
    }
}

near_contract_standards::impl_fungible_token_core!(WagerToken, token);
near_contract_standards::impl_fungible_token_storage!(WagerToken, token);

#[near_bindgen]
impl FungibleTokenMetadataProvider for WagerToken {
    fn ft_metadata(&self) -> FungibleTokenMetadata {
        self.metadata.get().unwrap()
    }
}
