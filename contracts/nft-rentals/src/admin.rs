use crate::constants::BASIS_POINTS;
use crate::errors::RentalError;
use crate::events::RentalEvent;
use crate::state::RentalLedger;
use crate::types::{Rental, RentalStatus};
use near_sdk::json_types::U128;
use near_sdk::AccountId;

pub fn create_rental(
    state: &mut RentalLedger,
    caller: &AccountId,
    block_height: u64,
    nft_id: u64,
    duration: u64,
    price: U128,
) -> Result<u64, RentalError> {
    state.require_admin(caller)?;
    let rental_id = state.push_rental(|id| {
        Rental::new(id, nft_id, duration, price, caller.clone(), block_height)
    });
    RentalEvent::RentalCreated {
        rental_id,
        nft_id,
        owner: caller.clone(),
        duration,
        price,
    }
    .emit();
    Ok(rental_id)
}

pub fn update_rental_price(
    state: &mut RentalLedger,
    caller: &AccountId,
    rental_id: u64,
    new_price: U128,
) -> Result<(), RentalError> {
    state.require_admin(caller)?;
    let rental = state.rental_mut(rental_id)?;
    rental.require_status(&[RentalStatus::Listed])?;
    let old_price = std::mem::replace(&mut rental.price, new_price);
    RentalEvent::PriceUpdated {
        rental_id,
        old_price,
        new_price,
    }
    .emit();
    Ok(())
}

pub fn offer_rental_discount(
    state: &mut RentalLedger,
    caller: &AccountId,
    rental_id: u64,
    discount_bps: u32,
) -> Result<(), RentalError> {
    state.require_admin(caller)?;
    let rental = state.rental_mut(rental_id)?;
    rental.require_status(&[RentalStatus::Listed])?;
    let discount_bps = u16::try_from(discount_bps)
        .ok()
        .filter(|bps| *bps <= BASIS_POINTS)
        .ok_or(RentalError::InvalidDiscount)?;
    rental.discount_bps = Some(discount_bps);
    RentalEvent::DiscountOffered {
        rental_id,
        discount_bps,
    }
    .emit();
    Ok(())
}

/// Force-closes an active or disputed lease and hands the NFT back to the
/// owner. Any remaining lease time is cut at the current height.
pub fn emergency_return_nft(
    state: &mut RentalLedger,
    caller: &AccountId,
    block_height: u64,
    rental_id: u64,
) -> Result<(), RentalError> {
    state.require_admin(caller)?;
    let rental = state.rental_mut(rental_id)?;
    rental.require_status(&[RentalStatus::Active, RentalStatus::Disputed])?;
    let previous_status = rental.status;
    rental.transition(RentalStatus::Ended)?;
    rental.ended_at = Some(block_height);
    if let Some(lease) = rental.lease.as_mut() {
        lease.rental_end = lease.rental_end.min(block_height);
    }
    RentalEvent::EmergencyReturn {
        rental_id,
        admin: caller.clone(),
        owner: rental.owner.clone(),
        previous_status,
    }
    .emit();
    Ok(())
}
