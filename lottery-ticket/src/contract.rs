use near_sdk::collections::{LazyOption, LookupMap};
use near_sdk::json_types::U128;
use near_sdk::{env, log, near_bindgen, AccountId, Promise, PromiseOrValue};
use std::default::Default;

use near_contract_standards::non_fungible_token::events::{NftBurn, NftMint};
use near_contract_standards::non_fungible_token::metadata::{
    NFTContractMetadata, NonFungibleTokenMetadataProvider, TokenMetadata, NFT_METADATA_SPEC,
};
use near_contract_standards::non_fungible_token::{NonFungibleToken, Token, TokenId};

use crate::storage::*;

impl Default for LotteryTicket {
    fn default() -> Self {
        env::panic_str("ERR_LOTTERY_TICKET_NOT_INITIALIZED")
    }
}

#[near_bindgen]
impl LotteryTicket {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        if env::state_exists() {
            env::panic_str("ERR_ALREADY_INITIALIZED");
        }

        let metadata = NFTContractMetadata {
            spec: NFT_METADATA_SPEC.to_string(),
            name: "Lottery Ticket".to_string(),
            symbol: "TICKET".to_string(),
            icon: None,
            base_uri: None,
            reference: None,
            reference_hash: None,
        };
        metadata.assert_valid();

        Self {
            tokens: NonFungibleToken::new(
                StorageKeys::NonFungibleToken,
                owner_id.clone(),
                Some(StorageKeys::TokenMetadata),
                Some(StorageKeys::Enumeration),
                Some(StorageKeys::Approval),
            ),
            metadata: LazyOption::new(StorageKeys::Metadata, Some(&metadata)),
            owner_id,
            lottery_account_id: None,
            tickets: LookupMap::new(StorageKeys::Tickets),
            next_ticket_id: 0,
        }
    }

    /**
     * Grants an account the exclusive right to mint and burn tickets
     *
     * @notice only the contract owner, only once
     */
    pub fn set_lottery_contract(&mut self, lottery_account_id: AccountId) {
        self.assert_only_owner();

        if self.lottery_account_id.is_some() {
            env::panic_str("ERR_LOTTERY_ALREADY_SET");
        }

        self.lottery_account_id = Some(lottery_account_id);
    }

    /**
     * Mints a ticket carrying the bet terms, ids are sequential
     *
     * @notice only the lottery contract
     * @returns the new token id
     */
    pub fn mint_ticket(
        &mut self,
        receiver_id: AccountId,
        project_id: ProjectId,
        option_id: OptionId,
        bet_amount: U128,
    ) -> TokenId {
        self.assert_only_lottery();

        let token_id: TokenId = self.next_ticket_id.to_string();
        self.next_ticket_id += 1;

        let token_metadata = TokenMetadata {
            title: Some(format!("Ticket #{}", token_id)),
            description: Some(format!(
                "Bet of {} on option {} of project {}",
                bet_amount.0, option_id, project_id
            )),
            media: None,
            media_hash: None,
            copies: Some(1),
            issued_at: None,
            expires_at: None,
            starts_at: None,
            updated_at: None,
            extra: None,
            reference: None,
            reference_hash: None,
        };

        self.tokens.internal_mint_with_refund(
            token_id.clone(),
            receiver_id.clone(),
            Some(token_metadata),
            None,
        );

        self.tickets.insert(
            &token_id,
            &TicketInfo {
                project_id,
                option_id,
                bet_amount,
            },
        );

        NftMint {
            owner_id: &receiver_id,
            token_ids: &[&token_id],
            memo: None,
        }
        .emit();

        log!(
            "ticket_minted token_id: {} receiver_id: {} project_id: {} option_id: {} bet_amount: {}",
            token_id,
            receiver_id,
            project_id,
            option_id,
            bet_amount.0
        );

        token_id
    }

    /**
     * Destroys a ticket and its bet terms
     *
     * @notice only the lottery contract, on redemption
     */
    pub fn burn_ticket(&mut self, token_id: TokenId) {
        self.assert_only_lottery();

        let owner_id = self.internal_burn(&token_id);
        self.tickets.remove(&token_id);

        NftBurn {
            owner_id: &owner_id,
            token_ids: &[&token_id],
            authorized_id: None,
            memo: None,
        }
        .emit();

        log!("ticket_burned token_id: {} owner_id: {}", token_id, owner_id);
    }
}

impl LotteryTicket {
    fn internal_burn(&mut self, token_id: &TokenId) -> AccountId {
        let owner_id = match self.tokens.owner_by_id.get(token_id) {
            Some(owner_id) => owner_id,
            None => env::panic_str("ERR_TICKET_NOT_FOUND"),
        };

        if let Some(next_approval_id_by_id) = &mut self.tokens.next_approval_id_by_id {
            next_approval_id_by_id.remove(token_id);
        }

        if let Some(approvals_by_id) = &mut self.tokens.approvals_by_id {
            approvals_by_id.remove(token_id);
        }

        if let Some(tokens_per_owner) = &mut self.tokens.tokens_per_owner {
            if let Some(mut owned) = tokens_per_owner.get(&owner_id) {
                owned.remove(token_id);

                if owned.is_empty() {
                    tokens_per_owner.remove(&owner_id);
                } else {
                    tokens_per_owner.insert(&owner_id, &owned);
                }
            }
        }

        if let Some(token_metadata_by_id) = &mut self.tokens.token_metadata_by_id {
            token_metadata_by_id.remove(token_id);
        }

        self.tokens.owner_by_id.remove(token_id);

        owner_id
    }
}

near_contract_standards::impl_non_fungible_token_core!(LotteryTicket, tokens);
near_contract_standards::impl_non_fungible_token_approval!(LotteryTicket, tokens);
near_contract_standards::impl_non_fungible_token_enumeration!(LotteryTicket, tokens);

#[near_bindgen]
impl NonFungibleTokenMetadataProvider for LotteryTicket {
    fn nft_metadata(&self) -> NFTContractMetadata {
        self.metadata.get().unwrap()
    }
}
