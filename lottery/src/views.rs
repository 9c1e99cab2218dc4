use near_sdk::json_types::U128;
use near_sdk::{env, near_bindgen, AccountId};

use crate::storage::*;

#[near_bindgen]
impl Lottery {
    pub fn get_project_info(&self, project_id: ProjectId) -> ProjectInfo {
        let project = self.get_project_or_panic(project_id);

        self.project_info(project_id, project)
    }

    pub fn get_project_option(
        &self,
        project_id: ProjectId,
        option_id: OptionId,
    ) -> ProjectOptionInfo {
        let project = self.get_project_or_panic(project_id);

        match project.options.into_iter().nth(option_id as usize) {
            Some(option) => ProjectOptionInfo {
                name: option.name,
                total_bet_amount: U128(option.total_bet_amount),
            },
            None => env::panic_str("ERR_INVALID_OPTION"),
        }
    }

    pub fn get_projects(&self, from_index: u64, limit: u64) -> Vec<ProjectInfo> {
        self.projects
            .iter()
            .skip(from_index as usize)
            .take(limit as usize)
            .map(|(project_id, project)| self.project_info(project_id, project))
            .collect()
    }

    pub fn next_project_id(&self) -> ProjectId {
        self.next_project_id
    }

    pub fn oracle(&self) -> AccountId {
        self.oracle_account_id.clone()
    }

    pub fn get_wager_token_account_id(&self) -> AccountId {
        self.wager_token_account_id.clone()
    }

    pub fn get_ticket_account_id(&self) -> AccountId {
        self.ticket_account_id.clone()
    }
}

impl Lottery {
    fn project_info(&self, project_id: ProjectId, project: Project) -> ProjectInfo {
        ProjectInfo {
            id: project_id,
            name: project.name,
            seed_pool: U128(project.seed_pool),
            options: project
                .options
                .into_iter()
                .map(|option| ProjectOptionInfo {
                    name: option.name,
                    total_bet_amount: U128(option.total_bet_amount),
                })
                .collect(),
            is_open: project.is_open,
            is_resolved: project.is_resolved,
            winning_option_id: project.winning_option_id,
            total_player_bets: U128(project.total_player_bets),
        }
    }
}
