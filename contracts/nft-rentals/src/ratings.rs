use crate::constants::{MAX_COMMENT_LEN, MAX_SCORE, MIN_SCORE};
use crate::errors::RentalError;
use crate::events::RentalEvent;
use crate::state::RentalLedger;
use crate::types::{RatedParty, Rating, RentalStatus};
use near_sdk::AccountId;

/// Stores one party's rating of the other.
///
/// `rating_owner` selects who is being rated: `true` means the renter rates
/// the owner, `false` means the owner rates the renter. Each slot can be filled
/// once, while the lease is running or disputed.
pub fn rate_rental(
    state: &mut RentalLedger,
    caller: &AccountId,
    block_height: u64,
    rental_id: u64,
    rating_owner: bool,
    score: u32,
    comment: Option<String>,
) -> Result<(), RentalError> {
    let rental = state.rental_mut(rental_id)?;
    rental.require_status(&[RentalStatus::Active, RentalStatus::Disputed])?;

    let party = RatedParty::from_rating_owner(rating_owner);
    let rated = match party {
        RatedParty::Owner if rental.is_renter(caller) => rental.owner.clone(),
        RatedParty::Renter if &rental.owner == caller => rental
            .renter()
            .cloned()
            .ok_or(RentalError::Unauthorized)?,
        _ => return Err(RentalError::Unauthorized),
    };

    let score = u8::try_from(score)
        .ok()
        .filter(|s| (MIN_SCORE..=MAX_SCORE).contains(s))
        .ok_or(RentalError::InvalidRating)?;
    if comment.as_ref().is_some_and(|c| c.len() > MAX_COMMENT_LEN) {
        return Err(RentalError::InvalidInput(format!(
            "Comment exceeds {} bytes",
            MAX_COMMENT_LEN
        )));
    }
    if rental.rating_slot(party).is_some() {
        return Err(RentalError::AlreadyRated);
    }

    *rental.rating_slot_mut(party) = Some(Rating {
        score,
        comment,
        rater: caller.clone(),
        block_height,
    });
    state.record_rating(&rated, score);

    RentalEvent::RentalRated {
        rental_id,
        rater: caller.clone(),
        rated,
        score,
    }
    .emit();
    Ok(())
}
