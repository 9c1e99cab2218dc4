#[cfg(test)]
mod tests {
    use crate::storage::*;
    use near_contract_standards::fungible_token::receiver::FungibleTokenReceiver;
    use near_contract_standards::non_fungible_token::approval::NonFungibleTokenApprovalReceiver;
    use near_sdk::json_types::U128;
    use near_sdk::test_utils::test_env::{alice, bob};
    use near_sdk::test_utils::VMContextBuilder;
    use near_sdk::{serde_json, testing_env, AccountId, PromiseResult};

    fn wager_token_account_id() -> AccountId {
        AccountId::new_unchecked("wager.near".to_string())
    }

    fn ticket_account_id() -> AccountId {
        AccountId::new_unchecked("ticket.near".to_string())
    }

    fn marketplace_account_id() -> AccountId {
        AccountId::new_unchecked("marketplace.near".to_string())
    }

    fn setup_context() -> VMContextBuilder {
        let mut context = VMContextBuilder::new();
        testing_env!(context
            .current_account_id(marketplace_account_id())
            .predecessor_account_id(alice())
            .build());

        context
    }

    fn setup_contract() -> Marketplace {
        Marketplace::new(wager_token_account_id(), ticket_account_id())
    }

    fn list_ticket(
        c: &mut Marketplace,
        context: &mut VMContextBuilder,
        token_id: &str,
        seller: AccountId,
        approval_id: u64,
        price: u128,
    ) {
        testing_env!(context.predecessor_account_id(ticket_account_id()).build());

        let msg = serde_json::json!({ "price": U128(price) });

        c.nft_on_approve(token_id.to_string(), seller, approval_id, msg.to_string());
    }

    fn buy_ticket(
        c: &mut Marketplace,
        context: &mut VMContextBuilder,
        token_id: &str,
        buyer: AccountId,
        amount: u128,
    ) {
        testing_env!(context
            .predecessor_account_id(wager_token_account_id())
            .build());

        let msg = serde_json::json!({
            "BuyArgs": {
                "token_id": token_id,
            }
        });

        c.ft_on_transfer(buyer, U128(amount), msg.to_string());
    }

    #[test]
    fn test_list_ticket_records_listing() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 80);

        assert_eq!(
            Some(ListingInfo {
                token_id: "0".to_string(),
                seller: alice(),
                price: U128(80),
            }),
            contract.get_listing("0".to_string())
        );
        assert_eq!(1, contract.get_listings_length());
    }

    #[test]
    fn test_list_ticket_overwrites_listing() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 80);
        list_ticket(&mut contract, &mut context, "0", alice(), 2, 120);

        assert_eq!(
            Some(ListingInfo {
                token_id: "0".to_string(),
                seller: alice(),
                price: U128(120),
            }),
            contract.get_listing("0".to_string())
        );
        assert_eq!(1, contract.get_listings_length());
    }

    #[test]
    #[should_panic(expected = "ERR_UNAUTHORIZED")]
    fn test_list_ticket_requires_ticket_contract() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        testing_env!(context.predecessor_account_id(bob()).build());

        let msg = serde_json::json!({ "price": U128(80) });

        contract.nft_on_approve("0".to_string(), alice(), 1, msg.to_string());
    }

    #[test]
    #[should_panic(expected = "ERR_INVALID_PRICE")]
    fn test_list_ticket_requires_positive_price() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 0);
    }

    #[test]
    fn test_cancel_listing_clears_listing() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 80);

        testing_env!(context.predecessor_account_id(alice()).build());

        contract.cancel_listing("0".to_string());

        assert_eq!(None, contract.get_listing("0".to_string()));
        assert_eq!(0, contract.get_listings_length());
    }

    #[test]
    #[should_panic(expected = "ERR_NOT_OWNER")]
    fn test_cancel_listing_requires_seller() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 80);

        testing_env!(context.predecessor_account_id(bob()).build());

        contract.cancel_listing("0".to_string());
    }

    #[test]
    #[should_panic(expected = "ERR_NOT_LISTED")]
    fn test_cancel_listing_requires_listing() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        testing_env!(context.predecessor_account_id(alice()).build());

        contract.cancel_listing("99".to_string());
    }

    #[test]
    fn test_buy_ticket_clears_listing() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 80);
        buy_ticket(&mut contract, &mut context, "0", bob(), 80);

        assert_eq!(None, contract.get_listing("0".to_string()));
    }

    #[test]
    #[should_panic(expected = "ERR_NOT_LISTED")]
    fn test_buy_ticket_requires_listing() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        buy_ticket(&mut contract, &mut context, "99", bob(), 80);
    }

    #[test]
    #[should_panic(expected = "ERR_UNAUTHORIZED")]
    fn test_buy_ticket_requires_wager_token_contract() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 80);

        testing_env!(context.predecessor_account_id(bob()).build());

        let msg = serde_json::json!({
            "BuyArgs": {
                "token_id": "0",
            }
        });

        contract.ft_on_transfer(bob(), U128(80), msg.to_string());
    }

    #[test]
    #[should_panic(expected = "ERR_PRICE_NOT_MET")]
    fn test_buy_ticket_requires_full_price() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 80);
        buy_ticket(&mut contract, &mut context, "0", bob(), 79);
    }

    #[test]
    #[should_panic(expected = "ERR_ZERO_AMOUNT")]
    fn test_buy_ticket_requires_positive_amount() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 80);
        buy_ticket(&mut contract, &mut context, "0", bob(), 0);
    }

    #[test]
    fn test_buy_ticket_callback_pays_seller_and_refunds_excess() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 80);
        buy_ticket(&mut contract, &mut context, "0", bob(), 85);

        testing_env!(
            context
                .predecessor_account_id(marketplace_account_id())
                .build(),
            near_sdk::VMConfig::test(),
            near_sdk::RuntimeFeesConfig::test(),
            Default::default(),
            vec![PromiseResult::Successful(vec![])],
        );

        let unused = contract.on_buy_ticket_callback(
            "0".to_string(),
            bob(),
            alice(),
            U128(80),
            1,
            U128(85),
        );

        assert_eq!(U128(5), unused);
        assert_eq!(None, contract.get_listing("0".to_string()));
    }

    #[test]
    fn test_buy_ticket_callback_restores_listing_on_failure() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 80);
        buy_ticket(&mut contract, &mut context, "0", bob(), 80);

        testing_env!(
            context
                .predecessor_account_id(marketplace_account_id())
                .build(),
            near_sdk::VMConfig::test(),
            near_sdk::RuntimeFeesConfig::test(),
            Default::default(),
            vec![PromiseResult::Failed],
        );

        let unused = contract.on_buy_ticket_callback(
            "0".to_string(),
            bob(),
            alice(),
            U128(80),
            1,
            U128(80),
        );

        assert_eq!(U128(80), unused);
        assert_eq!(
            Some(ListingInfo {
                token_id: "0".to_string(),
                seller: alice(),
                price: U128(80),
            }),
            contract.get_listing("0".to_string())
        );
    }

    #[test]
    fn test_pay_seller_callback_flags_failed_payment() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        testing_env!(
            context
                .predecessor_account_id(marketplace_account_id())
                .build(),
            near_sdk::VMConfig::test(),
            near_sdk::RuntimeFeesConfig::test(),
            Default::default(),
            vec![PromiseResult::Failed],
        );

        contract.on_pay_seller_callback("0".to_string(), alice(), U128(80));

        assert_eq!(
            true,
            near_sdk::test_utils::get_logs()
                .iter()
                .any(|log| log.contains("seller_payment_failed"))
        );
    }

    #[test]
    fn test_pay_seller_callback_is_silent_on_success() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        testing_env!(
            context
                .predecessor_account_id(marketplace_account_id())
                .build(),
            near_sdk::VMConfig::test(),
            near_sdk::RuntimeFeesConfig::test(),
            Default::default(),
            vec![PromiseResult::Successful(vec![])],
        );

        contract.on_pay_seller_callback("0".to_string(), alice(), U128(80));

        assert_eq!(0, near_sdk::test_utils::get_logs().len());
    }

    #[test]
    fn test_get_listings_paginates() {
        let mut context = setup_context();
        let mut contract = setup_contract();

        list_ticket(&mut contract, &mut context, "0", alice(), 1, 80);
        list_ticket(&mut contract, &mut context, "1", alice(), 2, 50);
        list_ticket(&mut contract, &mut context, "2", bob(), 1, 70);

        assert_eq!(3, contract.get_listings_length());
        assert_eq!(2, contract.get_listings(0, 2).len());
        assert_eq!(1, contract.get_listings(2, 10).len());
    }
}
