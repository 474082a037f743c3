// External contract interfaces for cross-contract calls
//
// `#[ext_contract]` generates helper structs that the compiler flags as dead_code
// even though they are used at runtime for cross-contract calls.
#![allow(dead_code)]

use crate::types::{StorageBalance, StorageBalanceBounds};
use near_sdk::json_types::U128;
use near_sdk::{ext_contract, AccountId, PromiseOrValue};

/// NEP-141 / NEP-145 surface of the listed asset's token contract.
#[ext_contract(ext_ft)]
pub trait FungibleToken {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);
    fn ft_balance_of(&self, account_id: AccountId) -> U128;
    fn storage_deposit(
        &mut self,
        account_id: Option<AccountId>,
        registration_only: Option<bool>,
    ) -> StorageBalance;
    fn storage_balance_bounds(&self) -> StorageBalanceBounds;
}

/// Self callback interface
#[ext_contract(ext_self)]
pub trait SelfCallback {
    fn on_asset_registered(&mut self, payer: AccountId);
    fn resolve_purchase(
        &mut self,
        buyer_id: AccountId,
        quantity: U128,
        total_price: U128,
    ) -> PromiseOrValue<()>;
    fn on_sweep_balance(&mut self) -> PromiseOrValue<()>;
    fn on_assets_swept(&mut self, swept: U128) -> PromiseOrValue<()>;
}
