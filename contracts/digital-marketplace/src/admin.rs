//! Creator-only operations: price updates and contract teardown.

use crate::constants::*;
use crate::errors::MarketplaceError;
use crate::events::MarketplaceEvent;
use crate::external::{ext_ft, ext_self};
use crate::state::{ListingState, ListingStatus};
use near_sdk::json_types::U128;
use near_sdk::{env, Gas, Promise};

/// Overwrites the ask. No bounds checking: zero and arbitrarily large values
/// are accepted, and callers must not assume monotonicity.
pub fn set_price(state: &mut ListingState, unitary_price: U128) -> Result<(), MarketplaceError> {
    state.require_active()?;
    state.require_creator()?;

    state.unitary_price = unitary_price;

    MarketplaceEvent::PriceUpdated { unitary_price }.emit();
    Ok(())
}

/// Tears the listing down: sweeps any remaining asset units to the creator,
/// then deletes the contract account with the creator as beneficiary, which
/// closes the native balance to zero.
pub fn delete_contract(state: &mut ListingState) -> Result<Promise, MarketplaceError> {
    state.require_active()?;
    state.require_creator()?;

    let was_opted_in = state.status == ListingStatus::OptedIn;
    state.status = ListingStatus::Deleted;

    MarketplaceEvent::ListingDeleted {
        creator: state.creator.clone(),
    }
    .emit();

    if !was_opted_in {
        // Never held the asset; only the native balance needs closing.
        return Ok(Promise::new(env::current_account_id()).delete_account(state.creator.clone()));
    }

    Ok(ext_ft::ext(state.asset.clone())
        .with_static_gas(Gas::from_tgas(BALANCE_OF_GAS))
        .ft_balance_of(env::current_account_id())
        .then(
            ext_self::ext(env::current_account_id())
                .with_static_gas(Gas::from_tgas(SWEEP_RESOLVE_GAS))
                .on_sweep_balance(),
        ))
}
