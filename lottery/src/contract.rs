use near_sdk::collections::UnorderedMap;
use near_sdk::json_types::U128;
use near_sdk::serde_json::json;
use near_sdk::{env, log, near_bindgen, AccountId, Balance, Promise, PromiseOrValue};
use std::default::Default;

use near_contract_standards::non_fungible_token::TokenId;

use crate::consts::*;
use crate::math;
use crate::storage::*;

impl Default for Lottery {
    fn default() -> Self {
        env::panic_str("ERR_LOTTERY_NOT_INITIALIZED")
    }
}

#[near_bindgen]
impl Lottery {
    #[init]
    pub fn new(
        oracle_account_id: AccountId,
        wager_token_account_id: AccountId,
        ticket_account_id: AccountId,
    ) -> Self {
        if env::state_exists() {
            env::panic_str("ERR_ALREADY_INITIALIZED");
        }

        Self {
            oracle_account_id,
            wager_token_account_id,
            ticket_account_id,
            projects: UnorderedMap::new(StorageKeys::Projects),
            next_project_id: 0,
        }
    }

    /**
     * Creates a project with an empty seed pool
     *
     * Seeded projects are created by sending the seed through
     * ft_transfer_call with a CreateProjectArgs payload, the NEP-141 standard
     * rejects zero-amount transfer calls so this is the zero-seed path
     *
     * @notice only the oracle
     * @returns the new project id
     */
    pub fn create_project(&mut self, name: String, options: Vec<String>) -> ProjectId {
        self.assert_only_oracle(&env::predecessor_account_id());

        self.internal_create_project(name, options, 0)
    }

    /**
     * Locks the winning option, one-shot
     *
     * Bet totals freeze here, every later claim reads them as fixed
     *
     * @notice only the oracle
     */
    pub fn resolve_project(&mut self, project_id: ProjectId, winning_option_id: OptionId) {
        self.assert_only_oracle(&env::predecessor_account_id());

        let mut project = self.get_project_or_panic(project_id);

        if project.is_resolved {
            env::panic_str("ERR_ALREADY_RESOLVED");
        }

        if winning_option_id as usize >= project.options.len() {
            env::panic_str("ERR_INVALID_OPTION");
        }

        project.is_open = false;
        project.is_resolved = true;
        project.winning_option_id = Some(winning_option_id);

        self.projects.insert(&project_id, &project);

        log!(
            "project_resolved project_id: {} winning_option_id: {}",
            project_id,
            winning_option_id
        );
    }

    /**
     * Starts redemption of a winning ticket
     *
     * Ownership and bet terms are read back from the ticket contract, the
     * callback validates the claim, burns the ticket and releases the payout.
     * Burning first makes redemption one-shot, a second claim no longer finds
     * the ticket
     */
    pub fn claim_winnings(&mut self, token_id: TokenId) {
        let payee = env::predecessor_account_id();

        let nft_token_promise = env::promise_create(
            self.ticket_account_id.clone(),
            "nft_token",
            json!({ "token_id": token_id }).to_string().as_bytes(),
            0,
            GAS_NFT_TOKEN,
        );

        let ticket_info_promise = env::promise_create(
            self.ticket_account_id.clone(),
            "ticket_info",
            json!({ "token_id": token_id }).to_string().as_bytes(),
            0,
            GAS_TICKET_INFO,
        );

        let promises = env::promise_and(&[nft_token_promise, ticket_info_promise]);

        let callback = env::promise_then(
            promises,
            env::current_account_id(),
            "on_claim_winnings_callback",
            json!({ "token_id": token_id, "payee": payee })
                .to_string()
                .as_bytes(),
            0,
            GAS_CLAIM_WINNINGS_CALLBACK,
        );

        env::promise_return(callback);
    }
}

impl Lottery {
    pub fn internal_create_project(
        &mut self,
        name: String,
        options: Vec<String>,
        seed_pool: Balance,
    ) -> ProjectId {
        if options.len() < 2 {
            env::panic_str("ERR_INVALID_OPTIONS");
        }

        let project_id = self.next_project_id;
        self.next_project_id += 1;

        let project = Project {
            name: name.clone(),
            seed_pool,
            options: options
                .into_iter()
                .map(|name| ProjectOption {
                    name,
                    total_bet_amount: 0,
                })
                .collect(),
            is_open: true,
            is_resolved: false,
            winning_option_id: None,
            total_player_bets: 0,
        };

        self.projects.insert(&project_id, &project);

        log!(
            "project_created project_id: {} name: {} seed_pool: {}",
            project_id,
            name,
            seed_pool
        );

        project_id
    }

    /**
     * Records a bet and mints the certificate
     *
     * Totals are bumped before the mint, the callback rolls them back and
     * refunds the stake if minting fails
     */
    pub fn internal_bet(
        &mut self,
        sender_id: AccountId,
        amount: Balance,
        args: BetArgs,
    ) -> PromiseOrValue<U128> {
        let mut project = self.get_project_or_panic(args.project_id);

        if !project.is_open {
            env::panic_str("ERR_PROJECT_CLOSED");
        }

        if args.option_id as usize >= project.options.len() {
            env::panic_str("ERR_INVALID_OPTION");
        }

        project.options[args.option_id as usize].total_bet_amount += amount;
        project.total_player_bets += amount;
        self.projects.insert(&args.project_id, &project);

        let mint_ticket = Promise::new(self.ticket_account_id.clone()).function_call(
            "mint_ticket".to_string(),
            json!({
                "receiver_id": sender_id,
                "project_id": args.project_id,
                "option_id": args.option_id,
                "bet_amount": U128(amount),
            })
            .to_string()
            .into_bytes(),
            0,
            GAS_MINT_TICKET,
        );

        let callback = Promise::new(env::current_account_id()).function_call(
            "on_bet_callback".to_string(),
            json!({
                "sender_id": sender_id,
                "amount": U128(amount),
                "project_id": args.project_id,
                "option_id": args.option_id,
            })
            .to_string()
            .into_bytes(),
            0,
            GAS_BET_CALLBACK,
        );

        PromiseOrValue::Promise(mint_ticket.then(callback))
    }

    /**
     * Pari-mutuel share of a winning ticket
     *
     * payout = bet_amount * (seed_pool + total_player_bets) / winning_total,
     * truncating toward zero. The residue across all winning tickets stays
     * below the number of winning tickets
     */
    pub fn compute_payout(&self, project: &Project, ticket_info: &TicketInfo) -> Balance {
        let winning_option_id = match project.winning_option_id {
            Some(winning_option_id) => winning_option_id,
            None => env::panic_str("ERR_PROJECT_NOT_RESOLVED"),
        };

        if ticket_info.option_id != winning_option_id {
            env::panic_str("ERR_NOT_WINNING_TICKET");
        }

        let winning_total = project.options[winning_option_id as usize].total_bet_amount;

        if winning_total == 0 {
            env::panic_str("ERR_NO_WINNING_BETS");
        }

        let prize_pool = project.seed_pool + project.total_player_bets;

        math::mul_div(ticket_info.bet_amount.0, prize_pool, winning_total)
    }

    pub fn get_project_or_panic(&self, project_id: ProjectId) -> Project {
        match self.projects.get(&project_id) {
            Some(project) => project,
            None => env::panic_str("ERR_PROJECT_NOT_FOUND"),
        }
    }
}
