use crate::types::RentalStatus;
use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

#[near(event_json(standard = "nep297"))]
pub enum RentalEvent {
    #[event_version("1.0.0")]
    RentalCreated {
        rental_id: u64,
        nft_id: u64,
        owner: AccountId,
        duration: u64,
        price: U128,
    },
    #[event_version("1.0.0")]
    NftRented {
        rental_id: u64,
        renter: AccountId,
        rental_start: u64,
        rental_end: u64,
        price_paid: U128,
    },
    #[event_version("1.0.0")]
    RentalEnded {
        rental_id: u64,
        renter: AccountId,
        ended_at: u64,
    },
    #[event_version("1.0.0")]
    RentalExtended {
        rental_id: u64,
        renter: AccountId,
        extra_duration: u64,
        rental_end: u64,
    },
    #[event_version("1.0.0")]
    DisputeFiled {
        rental_id: u64,
        filed_by: AccountId,
        reason: String,
    },
    #[event_version("1.0.0")]
    EmergencyReturn {
        rental_id: u64,
        admin: AccountId,
        owner: AccountId,
        previous_status: RentalStatus,
    },
    #[event_version("1.0.0")]
    RentalRated {
        rental_id: u64,
        rater: AccountId,
        rated: AccountId,
        score: u8,
    },
    #[event_version("1.0.0")]
    PriceUpdated {
        rental_id: u64,
        old_price: U128,
        new_price: U128,
    },
    #[event_version("1.0.0")]
    DiscountOffered { rental_id: u64, discount_bps: u16 },
    #[event_version("1.0.0")]
    AdminChanged {
        old_admin: AccountId,
        new_admin: AccountId,
    },
    #[event_version("1.0.0")]
    ContractUpgraded { manager: AccountId, timestamp: u64 },
    #[event_version("1.0.0")]
    StateMigrated {
        old_version: String,
        new_version: String,
    },
}
