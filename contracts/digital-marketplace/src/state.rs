use crate::errors::MarketplaceError;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::U128;
use near_sdk::{env, near, AccountId};
use near_sdk_macros::NearSchema;

/// Lifecycle of the single listing this contract holds.
///
/// The guards in `listing.rs` and `admin.rs` only ever move this forward:
/// `Created -> OptedIn -> Deleted`. `Deleted` is terminal; it is set when the
/// teardown promise chain is scheduled and only rolled back to `OptedIn` if a
/// sweep leg fails (see the resolve callbacks in `lib.rs`).
#[near(serializers = [borsh, json])]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    /// Listing exists but the contract cannot hold the asset yet.
    Created,
    /// Contract is registered with the token contract and can hold stock.
    OptedIn,
    /// Teardown scheduled; no further operations are accepted.
    Deleted,
}

#[derive(BorshSerialize, BorshDeserialize, NearSchema)]
#[abi(borsh)]
pub struct ListingState {
    pub version: String,
    /// Account that deployed the listing; sole admin credential.
    pub creator: AccountId,
    /// NEP-141 token contract of the listed asset. Immutable after init.
    pub asset: AccountId,
    /// Ask per asset unit, in yoctoNEAR. Zero is a valid "free/unset" state.
    pub unitary_price: U128,
    pub status: ListingStatus,
}

impl ListingState {
    pub fn new(creator: AccountId, asset: AccountId, unitary_price: U128) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            creator,
            asset,
            unitary_price,
            status: ListingStatus::Created,
        }
    }

    pub fn is_creator(&self, account_id: &AccountId) -> bool {
        &self.creator == account_id
    }

    pub fn require_creator(&self) -> Result<(), MarketplaceError> {
        if !self.is_creator(&env::predecessor_account_id()) {
            return Err(MarketplaceError::Unauthorized);
        }
        Ok(())
    }

    /// Rejects every operation once teardown has been scheduled.
    pub fn require_active(&self) -> Result<(), MarketplaceError> {
        if self.status == ListingStatus::Deleted {
            return Err(MarketplaceError::ListingClosed);
        }
        Ok(())
    }
}
