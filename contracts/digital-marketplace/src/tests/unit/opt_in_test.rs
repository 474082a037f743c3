use crate::tests::test_utils::*;
use crate::*;
use near_sdk::test_utils::get_logs;
use near_sdk::{testing_env, PromiseError};

#[test]
fn opt_in_happy() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(creator(), mbr()).build());

    contract.opt_in_to_asset().unwrap();
    assert_eq!(contract.get_status(), ListingStatus::OptedIn);
}

#[test]
fn opt_in_emits_event() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(creator(), mbr()).build());

    contract.opt_in_to_asset().unwrap();

    let logs = get_logs();
    assert!(
        logs.iter()
            .any(|log| log.contains("\"event\":\"asset_opted_in\"")),
        "Expected asset_opted_in event, got: {:?}",
        logs
    );
}

#[test]
fn opt_in_is_not_creator_gated() {
    // Opt-in is open to any funder; only the payment amount is checked.
    let mut contract = new_contract();
    testing_env!(context_with_deposit(buyer(), mbr()).build());

    contract.opt_in_to_asset().unwrap();
    assert_eq!(contract.get_status(), ListingStatus::OptedIn);
}

#[test]
fn opt_in_underpayment_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(creator(), mbr() - 1).build());

    let err = contract.opt_in_to_asset().err().unwrap();
    assert!(matches!(err, MarketplaceError::InsufficientMbrPayment));
    assert_eq!(contract.get_status(), ListingStatus::Created);
}

#[test]
fn opt_in_overpayment_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(creator(), mbr() + 1).build());

    let err = contract.opt_in_to_asset().err().unwrap();
    assert!(matches!(err, MarketplaceError::InsufficientMbrPayment));
    assert_eq!(contract.get_status(), ListingStatus::Created);
}

#[test]
fn opt_in_twice_fails() {
    let mut contract = opted_in_contract();
    testing_env!(context_with_deposit(creator(), mbr()).build());

    let err = contract.opt_in_to_asset().err().unwrap();
    assert!(matches!(err, MarketplaceError::AlreadyOptedIn));
    assert_eq!(contract.get_status(), ListingStatus::OptedIn);
}

#[test]
fn opt_in_after_delete_fails() {
    let mut contract = new_contract();
    testing_env!(context(creator()).build());
    contract.delete_contract().unwrap();

    testing_env!(context_with_deposit(creator(), mbr()).build());
    let err = contract.opt_in_to_asset().err().unwrap();
    assert!(matches!(err, MarketplaceError::ListingClosed));
}

// --- registration callback ---

#[test]
fn failed_registration_rolls_back_opt_in() {
    let mut contract = opted_in_contract();

    testing_env!(context(market()).build());
    contract.on_asset_registered(creator(), Err(PromiseError::Failed));
    assert_eq!(contract.get_status(), ListingStatus::Created);

    // The listing is opt-in-able again after the rollback.
    testing_env!(context_with_deposit(creator(), mbr()).build());
    contract.opt_in_to_asset().unwrap();
    assert_eq!(contract.get_status(), ListingStatus::OptedIn);
}

#[test]
fn successful_registration_keeps_opt_in() {
    let mut contract = opted_in_contract();

    testing_env!(context(market()).build());
    contract.on_asset_registered(
        creator(),
        Ok(StorageBalance {
            total: near_sdk::json_types::U128(
                crate::constants::ASSET_OPT_IN_MIN_BALANCE.as_yoctonear(),
            ),
            available: near_sdk::json_types::U128(0),
        }),
    );
    assert_eq!(contract.get_status(), ListingStatus::OptedIn);
}
