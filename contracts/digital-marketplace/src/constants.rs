//! Contract-wide constants.

use near_sdk::NearToken;

/// Base reserve the contract account keeps for its own storage (0.1 NEAR).
pub const BASE_MIN_BALANCE: NearToken = NearToken::from_millinear(100);

/// Registration deposit forwarded to the token contract on opt-in
/// (0.00125 NEAR, the standard NEP-141 storage bound).
pub const ASSET_OPT_IN_MIN_BALANCE: NearToken =
    NearToken::from_yoctonear(1_250_000_000_000_000_000_000);

/// No deposit / 1 yocto
pub const NO_DEPOSIT: NearToken = NearToken::from_yoctonear(0);
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

// Gas constants (TGas)
pub const FT_TRANSFER_GAS: u64 = 30;
pub const STORAGE_DEPOSIT_GAS: u64 = 30;
pub const BALANCE_OF_GAS: u64 = 10;
pub const RESOLVE_GAS: u64 = 50;
/// Covers `on_sweep_balance` plus the `ft_transfer` and final callback it schedules.
pub const SWEEP_RESOLVE_GAS: u64 = 100;

/// Exact deposit `opt_in_to_asset` requires: base reserve plus the per-asset
/// registration minimum.
pub fn required_mbr() -> NearToken {
    BASE_MIN_BALANCE.saturating_add(ASSET_OPT_IN_MIN_BALANCE)
}
