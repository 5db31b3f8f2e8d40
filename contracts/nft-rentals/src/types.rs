use crate::constants::BASIS_POINTS;
use crate::errors::RentalError;
use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[near(serializers = [json, borsh])]
pub enum RentalStatus {
    Listed,
    Active,
    Disputed,
    Ended,
}

impl RentalStatus {
    /// Lifecycle table. `Ended` has no outgoing edge.
    pub fn can_transition_to(self, next: RentalStatus) -> bool {
        matches!(
            (self, next),
            (Self::Listed, Self::Active)
                | (Self::Active, Self::Disputed)
                | (Self::Active, Self::Ended)
                | (Self::Disputed, Self::Ended)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[near(serializers = [json, borsh])]
pub struct Lease {
    pub renter: AccountId,
    pub rental_start: u64,
    pub rental_end: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[near(serializers = [json, borsh])]
pub struct Rating {
    pub score: u8,
    pub comment: Option<String>,
    pub rater: AccountId,
    pub block_height: u64,
}

/// Which party a rating is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatedParty {
    Owner,
    Renter,
}

impl RatedParty {
    pub fn from_rating_owner(rating_owner: bool) -> Self {
        if rating_owner {
            Self::Owner
        } else {
            Self::Renter
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[near(serializers = [json, borsh])]
pub struct Rental {
    pub id: u64,
    pub nft_id: u64,
    pub duration: u64,
    pub price: U128,
    pub owner: AccountId,
    pub status: RentalStatus,
    pub lease: Option<Lease>,
    pub dispute_reason: Option<String>,
    pub owner_rating: Option<Rating>,
    pub renter_rating: Option<Rating>,
    pub discount_bps: Option<u16>,
    pub created_at: u64,
    pub ended_at: Option<u64>,
}

impl Rental {
    pub fn new(
        id: u64,
        nft_id: u64,
        duration: u64,
        price: U128,
        owner: AccountId,
        created_at: u64,
    ) -> Self {
        Self {
            id,
            nft_id,
            duration,
            price,
            owner,
            status: RentalStatus::Listed,
            lease: None,
            dispute_reason: None,
            owner_rating: None,
            renter_rating: None,
            discount_bps: None,
            created_at,
            ended_at: None,
        }
    }

    pub fn renter(&self) -> Option<&AccountId> {
        self.lease.as_ref().map(|lease| &lease.renter)
    }

    pub fn is_renter(&self, account_id: &AccountId) -> bool {
        self.renter() == Some(account_id)
    }

    pub fn is_party(&self, account_id: &AccountId) -> bool {
        &self.owner == account_id || self.is_renter(account_id)
    }

    pub fn require_status(&self, allowed: &[RentalStatus]) -> Result<(), RentalError> {
        if allowed.contains(&self.status) {
            Ok(())
        } else {
            Err(RentalError::InvalidStatus)
        }
    }

    /// Applies a lifecycle edge. Callers run every other check first so a
    /// rejected edge leaves the rental untouched.
    pub fn transition(&mut self, next: RentalStatus) -> Result<(), RentalError> {
        if !self.status.can_transition_to(next) {
            return Err(RentalError::InvalidStatus);
        }
        self.status = next;
        Ok(())
    }

    /// Price after the offered discount.
    pub fn effective_price(&self) -> u128 {
        let price = self.price.0;
        let Some(bps) = self.discount_bps else {
            return price;
        };
        let bps = u128::from(bps);
        let denom = u128::from(BASIS_POINTS);
        let discount = price / denom * bps + price % denom * bps / denom;
        price - discount
    }

    pub fn is_expired(&self, block_height: u64) -> bool {
        self.lease
            .as_ref()
            .is_some_and(|lease| block_height >= lease.rental_end)
    }

    pub fn rating_slot(&self, party: RatedParty) -> &Option<Rating> {
        match party {
            RatedParty::Owner => &self.owner_rating,
            RatedParty::Renter => &self.renter_rating,
        }
    }

    pub fn rating_slot_mut(&mut self, party: RatedParty) -> &mut Option<Rating> {
        match party {
            RatedParty::Owner => &mut self.owner_rating,
            RatedParty::Renter => &mut self.renter_rating,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[near(serializers = [json, borsh])]
pub struct Reputation {
    pub total_ratings: u32,
    pub total_score: u64,
    /// Scaled by 100 (e.g., 450 = 4.5)
    pub average_rating: u32,
}

impl Reputation {
    pub fn record(&mut self, score: u8) {
        self.total_ratings = self.total_ratings.saturating_add(1);
        self.total_score = self.total_score.saturating_add(u64::from(score));
        self.average_rating = (self.total_score * 100 / u64::from(self.total_ratings)) as u32;
    }
}
