//! Opt-in and purchase paths of the listing.

use crate::constants::*;
use crate::errors::MarketplaceError;
use crate::events::MarketplaceEvent;
use crate::external::{ext_ft, ext_self};
use crate::state::{ListingState, ListingStatus};
use near_sdk::json_types::U128;
use near_sdk::{env, Gas, Promise};

/// Registers the contract with the token contract so it can hold the asset.
/// The attached deposit must equal the minimum balance requirement exactly;
/// over- and underpayment are both rejected.
pub fn opt_in_to_asset(state: &mut ListingState) -> Result<Promise, MarketplaceError> {
    state.require_active()?;
    if state.status == ListingStatus::OptedIn {
        return Err(MarketplaceError::AlreadyOptedIn);
    }
    let required = required_mbr();
    if env::attached_deposit() != required {
        return Err(MarketplaceError::InsufficientMbrPayment);
    }

    let payer = env::predecessor_account_id();

    // Flipped before the cross-contract call so a second opt-in in the same
    // block is rejected; on_asset_registered rolls back on failure.
    state.status = ListingStatus::OptedIn;

    MarketplaceEvent::AssetOptedIn {
        asset: state.asset.clone(),
        mbr: U128(required.as_yoctonear()),
    }
    .emit();

    Ok(ext_ft::ext(state.asset.clone())
        .with_static_gas(Gas::from_tgas(STORAGE_DEPOSIT_GAS))
        .with_attached_deposit(ASSET_OPT_IN_MIN_BALANCE)
        .storage_deposit(Some(env::current_account_id()), Some(true))
        .then(
            ext_self::ext(env::current_account_id())
                .with_static_gas(Gas::from_tgas(RESOLVE_GAS))
                .on_asset_registered(payer),
        ))
}

/// Sells `quantity` units against the attached deposit. The deposit must
/// equal `unitary_price * quantity` exactly; no partial fills.
///
/// No inventory counter is kept: overselling (and buying before opt-in) is
/// rejected by the token contract itself, and `resolve_purchase` returns the
/// payment when that happens.
pub fn buy(state: &mut ListingState, quantity: U128) -> Result<Promise, MarketplaceError> {
    state.require_active()?;
    if quantity.0 == 0 {
        return Err(MarketplaceError::InvalidQuantity);
    }
    let total = state
        .unitary_price
        .0
        .checked_mul(quantity.0)
        .ok_or(MarketplaceError::PriceOverflow)?;
    if env::attached_deposit().as_yoctonear() != total {
        return Err(MarketplaceError::PriceMismatch);
    }

    let buyer_id = env::predecessor_account_id();

    Ok(ext_ft::ext(state.asset.clone())
        .with_static_gas(Gas::from_tgas(FT_TRANSFER_GAS))
        .with_attached_deposit(ONE_YOCTO)
        .ft_transfer(
            buyer_id.clone(),
            quantity,
            Some("Purchased from digital marketplace".to_string()),
        )
        .then(
            ext_self::ext(env::current_account_id())
                .with_static_gas(Gas::from_tgas(RESOLVE_GAS))
                .resolve_purchase(buyer_id, quantity, U128(total)),
        ))
}
