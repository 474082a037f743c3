//! Digital Marketplace — escrow contract holding a single fungible-asset
//! listing, sold at a creator-controlled unitary price against exact-amount
//! payments. Creator-gated admin, NEP-297 JSON events.

use crate::external::{ext_ft, ext_self};
use crate::state::ListingState;
use near_sdk::json_types::U128;
use near_sdk::{
    env, near, AccountId, Gas, NearToken, PanicOnDefault, Promise, PromiseError, PromiseOrValue,
};

mod admin;
pub mod constants;
mod errors;
mod events;
mod external;
mod listing;
mod state;
pub mod types;

pub use constants::*;
pub use errors::MarketplaceError;
pub use events::MarketplaceEvent;
pub use state::ListingStatus;
pub use types::{ListingView, StorageBalance};

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct DigitalMarketplace {
    state: ListingState,
}

#[near]
impl DigitalMarketplace {
    /// Deploys the listing: binds the creator and the asset, stores the
    /// initial ask. No asset transfer happens here; the contract cannot hold
    /// the asset until `opt_in_to_asset`.
    #[init]
    pub fn new(asset: AccountId, unitary_price: U128) -> Self {
        let creator = env::predecessor_account_id();

        MarketplaceEvent::ListingCreated {
            creator: creator.clone(),
            asset: asset.clone(),
            unitary_price,
        }
        .emit();

        Self {
            state: ListingState::new(creator, asset, unitary_price),
        }
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let old: ListingState = env::state_read()
            .unwrap_or_else(|| env::panic_str("Failed to read prior state"));
        let old_version = old.version.clone();

        let state = ListingState {
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..old
        };

        if old_version != state.version {
            MarketplaceEvent::StateMigrated {
                old_version,
                new_version: state.version.clone(),
            }
            .emit();
        }

        Self { state }
    }

    #[handle_result]
    pub fn set_price(&mut self, unitary_price: U128) -> Result<(), MarketplaceError> {
        crate::admin::set_price(&mut self.state, unitary_price)
    }

    #[payable]
    #[handle_result]
    pub fn opt_in_to_asset(&mut self) -> Result<Promise, MarketplaceError> {
        crate::listing::opt_in_to_asset(&mut self.state)
    }

    #[payable]
    #[handle_result]
    pub fn buy(&mut self, quantity: U128) -> Result<Promise, MarketplaceError> {
        crate::listing::buy(&mut self.state, quantity)
    }

    #[handle_result]
    pub fn delete_contract(&mut self) -> Result<Promise, MarketplaceError> {
        crate::admin::delete_contract(&mut self.state)
    }

    // --- Views ---

    pub fn get_listing(&self) -> ListingView {
        ListingView {
            creator: self.state.creator.clone(),
            asset: self.state.asset.clone(),
            unitary_price: self.state.unitary_price,
            status: self.state.status,
        }
    }

    pub fn get_price(&self) -> U128 {
        self.state.unitary_price
    }

    pub fn get_asset(&self) -> AccountId {
        self.state.asset.clone()
    }

    pub fn get_creator(&self) -> AccountId {
        self.state.creator.clone()
    }

    pub fn get_status(&self) -> ListingStatus {
        self.state.status
    }

    // --- Callbacks ---

    /// Only callable by this contract. Safety: must not panic; a failed
    /// registration rolls the opt-in back and returns the MBR payment.
    #[private]
    pub fn on_asset_registered(
        &mut self,
        payer: AccountId,
        #[callback_result] result: Result<StorageBalance, PromiseError>,
    ) {
        if result.is_err() {
            env::log_str("Opt-in failed: storage_deposit call failed, rolling back");
            self.state.status = ListingStatus::Created;
            Promise::new(payer).transfer(required_mbr());
        }
    }

    /// Only callable by this contract. Safety: must not panic — the payment is
    /// already held here; on a failed transfer it is returned in full, so a
    /// failed purchase leaves both balances unchanged.
    #[private]
    pub fn resolve_purchase(
        &mut self,
        buyer_id: AccountId,
        quantity: U128,
        total_price: U128,
        #[callback_result] result: Result<(), PromiseError>,
    ) -> PromiseOrValue<()> {
        match result {
            Ok(()) => {
                MarketplaceEvent::AssetSold {
                    buyer: buyer_id,
                    quantity,
                    total_price,
                }
                .emit();
                PromiseOrValue::Value(())
            }
            Err(_) => {
                env::log_str("Purchase failed: asset transfer failed, refunding buyer");
                MarketplaceEvent::PurchaseRefunded {
                    buyer: buyer_id.clone(),
                    amount: total_price,
                }
                .emit();
                if total_price.0 > 0 {
                    PromiseOrValue::Promise(
                        Promise::new(buyer_id).transfer(NearToken::from_yoctonear(total_price.0)),
                    )
                } else {
                    PromiseOrValue::Value(())
                }
            }
        }
    }

    /// Only callable by this contract. Safety: must not panic; a failed
    /// balance check restores the listing so the creator can retry teardown.
    #[private]
    pub fn on_sweep_balance(
        &mut self,
        #[callback_result] result: Result<U128, PromiseError>,
    ) -> PromiseOrValue<()> {
        let creator = self.state.creator.clone();
        let balance = match result {
            Ok(balance) => balance,
            Err(_) => {
                env::log_str("Delete failed: balance check failed, listing restored");
                self.state.status = ListingStatus::OptedIn;
                return PromiseOrValue::Value(());
            }
        };

        if balance.0 == 0 {
            // Nothing to sweep; close the native balance to the creator.
            return PromiseOrValue::Promise(
                Promise::new(env::current_account_id()).delete_account(creator),
            );
        }

        PromiseOrValue::Promise(
            ext_ft::ext(self.state.asset.clone())
                .with_static_gas(Gas::from_tgas(FT_TRANSFER_GAS))
                .with_attached_deposit(ONE_YOCTO)
                .ft_transfer(creator, balance, Some("Listing closed".to_string()))
                .then(
                    ext_self::ext(env::current_account_id())
                        .with_static_gas(Gas::from_tgas(RESOLVE_GAS))
                        .on_assets_swept(balance),
                ),
        )
    }

    /// Only callable by this contract. Safety: must not panic; the account is
    /// only deleted once the asset balance has actually been swept.
    #[private]
    pub fn on_assets_swept(
        &mut self,
        swept: U128,
        #[callback_result] result: Result<(), PromiseError>,
    ) -> PromiseOrValue<()> {
        if result.is_err() {
            env::log_str("Delete failed: asset sweep failed, listing restored");
            self.state.status = ListingStatus::OptedIn;
            return PromiseOrValue::Value(());
        }

        env::log_str(&format!("Swept {} asset units to creator", swept.0));
        PromiseOrValue::Promise(
            Promise::new(env::current_account_id()).delete_account(self.state.creator.clone()),
        )
    }
}

#[cfg(test)]
mod tests;
