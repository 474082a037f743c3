use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

#[near(event_json(standard = "nep297"))]
pub enum MarketplaceEvent {
    #[event_version("1.0.0")]
    ListingCreated {
        creator: AccountId,
        asset: AccountId,
        unitary_price: U128,
    },
    #[event_version("1.0.0")]
    PriceUpdated { unitary_price: U128 },
    #[event_version("1.0.0")]
    AssetOptedIn { asset: AccountId, mbr: U128 },
    #[event_version("1.0.0")]
    AssetSold {
        buyer: AccountId,
        quantity: U128,
        total_price: U128,
    },
    #[event_version("1.0.0")]
    PurchaseRefunded { buyer: AccountId, amount: U128 },
    #[event_version("1.0.0")]
    ListingDeleted { creator: AccountId },
    #[event_version("1.0.0")]
    StateMigrated {
        old_version: String,
        new_version: String,
    },
}
