//! Typed errors for the rental ledger.
//!
//! Every variant carries a fixed numeric code that is part of the public
//! interface: codes are never renumbered or reused. Returning
//! `Err(RentalError::Xxx)` from a `#[handle_result]` method fails the receipt
//! with the `Display` message (`"E<code>: ..."`), which reverts all state
//! written during the call.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RentalError {
    /// Caller is not the contract administrator.
    OwnerOnly,
    /// No rental exists under the requested id.
    NotFound,
    /// Caller is not a party allowed to act on this rental.
    Unauthorized,
    /// Operation not allowed in the rental's current status.
    InvalidStatus,
    /// The lease end height has not been reached yet.
    NotExpired,
    /// Rating score outside `MIN_SCORE..=MAX_SCORE`.
    InvalidRating,
    /// Discount above `BASIS_POINTS`.
    InvalidDiscount,
    /// Malformed argument (empty or oversized text, zero extension, overflow).
    InvalidInput(String),
    /// The requested rating slot has already been filled.
    AlreadyRated,
    /// Attached deposit does not cover the effective price.
    InsufficientDeposit,
}

impl RentalError {
    pub const fn code(&self) -> u32 {
        match self {
            Self::OwnerOnly => 100,
            Self::NotFound => 101,
            Self::Unauthorized => 102,
            Self::InvalidStatus => 103,
            Self::NotExpired => 104,
            Self::InvalidRating => 105,
            Self::InvalidDiscount => 106,
            Self::InvalidInput(_) => 107,
            Self::AlreadyRated => 108,
            Self::InsufficientDeposit => 109,
        }
    }

    pub fn invalid_input(msg: &str) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl std::fmt::Display for RentalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}: ", self.code())?;
        match self {
            Self::OwnerOnly => {
                write!(f, "Only the contract administrator can perform this action")
            }
            Self::NotFound => write!(f, "Rental not found"),
            Self::Unauthorized => write!(f, "Caller is not a party to this rental"),
            Self::InvalidStatus => write!(f, "Operation not allowed in the current rental status"),
            Self::NotExpired => write!(f, "Rental period has not ended"),
            Self::InvalidRating => write!(f, "Rating score must be between 1 and 5"),
            Self::InvalidDiscount => write!(f, "Discount must not exceed 10000 basis points"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::AlreadyRated => write!(f, "Rating already submitted"),
            Self::InsufficientDeposit => {
                write!(f, "Attached deposit does not cover the rental price")
            }
        }
    }
}
