use crate::state::ListingStatus;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::U128;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::AccountId;
use near_sdk_macros::NearSchema;

/// NEP-145 storage balance, as returned by the token contract.
#[derive(NearSchema, Serialize, Deserialize, Clone, BorshSerialize, BorshDeserialize)]
#[abi(borsh, json)]
#[serde(crate = "near_sdk::serde")]
pub struct StorageBalance {
    pub total: U128,
    pub available: U128,
}

#[derive(NearSchema, Serialize, Deserialize, Clone, BorshSerialize, BorshDeserialize)]
#[abi(borsh, json)]
#[serde(crate = "near_sdk::serde")]
pub struct StorageBalanceBounds {
    pub min: U128,
    pub max: Option<U128>,
}

/// Read-only snapshot of the listing, for the `get_listing` view.
#[derive(NearSchema, Serialize, Deserialize, Clone)]
#[abi(json)]
#[serde(crate = "near_sdk::serde")]
pub struct ListingView {
    pub creator: AccountId,
    pub asset: AccountId,
    pub unitary_price: U128,
    pub status: ListingStatus,
}
