use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::FunctionError;
use near_sdk_macros::NearSchema;

/// Every variant aborts the whole receipt via `#[handle_result]`; nothing is
/// caught or compensated locally. Insufficient stock has no variant on
/// purpose: it surfaces as a failed `ft_transfer` promise and is settled by
/// refund in `resolve_purchase`.
#[derive(Debug, NearSchema, BorshSerialize, BorshDeserialize)]
#[abi(borsh)]
pub enum MarketplaceError {
    Unauthorized,
    AlreadyOptedIn,
    InsufficientMbrPayment,
    PriceMismatch,
    PriceOverflow,
    InvalidQuantity,
    ListingClosed,
}

impl FunctionError for MarketplaceError {
    fn panic(&self) -> ! {
        panic!(
            "{}",
            match self {
                MarketplaceError::Unauthorized => "Only the creator can perform this action",
                MarketplaceError::AlreadyOptedIn => "Contract is already opted in to the asset",
                MarketplaceError::InsufficientMbrPayment =>
                    "Attached deposit must equal the minimum balance requirement exactly",
                MarketplaceError::PriceMismatch =>
                    "Attached deposit must equal unitary_price * quantity exactly",
                MarketplaceError::PriceOverflow => "Total price overflows",
                MarketplaceError::InvalidQuantity => "Quantity must be greater than zero",
                MarketplaceError::ListingClosed => "Listing has been deleted",
            }
        )
    }
}
