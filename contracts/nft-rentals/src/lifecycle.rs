use crate::constants::MAX_REASON_LEN;
use crate::errors::RentalError;
use crate::events::RentalEvent;
use crate::state::RentalLedger;
use crate::types::{Lease, RentalStatus};
use near_sdk::json_types::U128;
use near_sdk::{AccountId, NearToken, Promise};

/// Starts a lease for `caller`. The effective price is forwarded to the owner
/// and whatever is attached beyond it goes back to the renter.
pub fn rent_nft(
    state: &mut RentalLedger,
    caller: &AccountId,
    block_height: u64,
    attached: NearToken,
    rental_id: u64,
) -> Result<(), RentalError> {
    let rental = state.rental_mut(rental_id)?;
    rental.require_status(&[RentalStatus::Listed])?;

    let price = rental.effective_price();
    let attached = attached.as_yoctonear();
    if attached < price {
        return Err(RentalError::InsufficientDeposit);
    }
    let rental_end = block_height
        .checked_add(rental.duration)
        .ok_or_else(|| RentalError::invalid_input("Rental end height overflows"))?;

    rental.transition(RentalStatus::Active)?;
    rental.lease = Some(Lease {
        renter: caller.clone(),
        rental_start: block_height,
        rental_end,
    });

    if price > 0 {
        Promise::new(rental.owner.clone()).transfer(NearToken::from_yoctonear(price));
    }
    let refund = attached - price;
    if refund > 0 {
        Promise::new(caller.clone()).transfer(NearToken::from_yoctonear(refund));
    }

    RentalEvent::NftRented {
        rental_id,
        renter: caller.clone(),
        rental_start: block_height,
        rental_end,
        price_paid: U128(price),
    }
    .emit();
    Ok(())
}

pub fn end_rental(
    state: &mut RentalLedger,
    caller: &AccountId,
    block_height: u64,
    rental_id: u64,
) -> Result<(), RentalError> {
    let rental = state.rental_mut(rental_id)?;
    rental.require_status(&[RentalStatus::Active])?;
    if !rental.is_renter(caller) {
        return Err(RentalError::Unauthorized);
    }
    if !rental.is_expired(block_height) {
        return Err(RentalError::NotExpired);
    }

    rental.transition(RentalStatus::Ended)?;
    rental.ended_at = Some(block_height);

    RentalEvent::RentalEnded {
        rental_id,
        renter: caller.clone(),
        ended_at: block_height,
    }
    .emit();
    Ok(())
}

pub fn extend_rental(
    state: &mut RentalLedger,
    caller: &AccountId,
    rental_id: u64,
    extra_duration: u64,
) -> Result<(), RentalError> {
    let rental = state.rental_mut(rental_id)?;
    rental.require_status(&[RentalStatus::Active])?;
    if !rental.is_renter(caller) {
        return Err(RentalError::Unauthorized);
    }
    if extra_duration == 0 {
        return Err(RentalError::invalid_input("Extension must be at least one block"));
    }
    let lease = rental
        .lease
        .as_mut()
        .ok_or_else(|| RentalError::invalid_input("Active rental has no lease"))?;
    let rental_end = lease
        .rental_end
        .checked_add(extra_duration)
        .ok_or_else(|| RentalError::invalid_input("Rental end height overflows"))?;
    lease.rental_end = rental_end;

    RentalEvent::RentalExtended {
        rental_id,
        renter: caller.clone(),
        extra_duration,
        rental_end,
    }
    .emit();
    Ok(())
}

pub fn file_rental_dispute(
    state: &mut RentalLedger,
    caller: &AccountId,
    rental_id: u64,
    reason: String,
) -> Result<(), RentalError> {
    let rental = state.rental_mut(rental_id)?;
    rental.require_status(&[RentalStatus::Active])?;
    if !rental.is_party(caller) {
        return Err(RentalError::Unauthorized);
    }
    if reason.trim().is_empty() {
        return Err(RentalError::invalid_input("Dispute reason is empty"));
    }
    if reason.len() > MAX_REASON_LEN {
        return Err(RentalError::InvalidInput(format!(
            "Dispute reason exceeds {} bytes",
            MAX_REASON_LEN
        )));
    }

    rental.transition(RentalStatus::Disputed)?;
    rental.dispute_reason = Some(reason.clone());

    RentalEvent::DisputeFiled {
        rental_id,
        filed_by: caller.clone(),
        reason,
    }
    .emit();
    Ok(())
}
