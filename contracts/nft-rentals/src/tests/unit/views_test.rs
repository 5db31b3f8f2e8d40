use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;

#[test]
fn initial_views() {
    let contract = new_contract();
    assert_eq!(contract.get_admin(), admin());
    assert_eq!(contract.get_version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(contract.get_rental_count(), 0);
    assert!(contract.get_rental(0).is_none());
    assert!(contract.get_rentals(None, None).is_empty());
    assert!(contract.get_effective_price(0).is_none());
    assert!(!contract.is_rental_expired(0));
}

#[test]
fn get_rentals_paginates() {
    let mut contract = new_contract();
    call_as(admin(), START_HEIGHT);
    for nft_id in 0..5 {
        contract.create_rental(nft_id, DURATION, U128(PRICE)).unwrap();
    }

    let all = contract.get_rentals(None, None);
    assert_eq!(all.len(), 5);
    assert_eq!(
        all.iter().map(|rental| rental.id).collect::<Vec<_>>(),
        vec![0, 1, 2, 3, 4]
    );

    let page = contract.get_rentals(Some(3), Some(10));
    assert_eq!(page.iter().map(|rental| rental.id).collect::<Vec<_>>(), vec![3, 4]);

    assert!(contract.get_rentals(Some(5), Some(10)).is_empty());
    assert!(contract.get_rentals(Some(u64::MAX), Some(u64::MAX)).is_empty());
    assert_eq!(contract.get_rentals(Some(1), Some(2)).len(), 2);
}

#[test]
fn get_rentals_caps_limit() {
    let mut contract = new_contract();
    for nft_id in 0..(constants::MAX_PAGE_LIMIT + 5) {
        // Fresh context per call keeps the event log under the host limit.
        call_as(admin(), START_HEIGHT);
        contract.create_rental(nft_id, DURATION, U128(PRICE)).unwrap();
    }

    assert_eq!(contract.get_rental_count(), constants::MAX_PAGE_LIMIT + 5);
    let page = contract.get_rentals(None, Some(u64::MAX));
    assert_eq!(page.len() as u64, constants::MAX_PAGE_LIMIT);
    assert_eq!(page.last().map(|rental| rental.id), Some(constants::MAX_PAGE_LIMIT - 1));
    assert_eq!(
        contract.get_rentals(None, None).len() as u64,
        constants::DEFAULT_PAGE_LIMIT
    );
}

#[test]
fn is_rental_expired_tracks_block_height() {
    let mut contract = new_contract();
    let rental_id = active_rental(&mut contract);

    call_as(stranger(), START_HEIGHT + DURATION - 1);
    assert!(!contract.is_rental_expired(rental_id));

    call_as(stranger(), START_HEIGHT + DURATION);
    assert!(contract.is_rental_expired(rental_id));
}

#[test]
fn listed_rental_is_never_expired() {
    let mut contract = new_contract();
    let rental_id = listed_rental(&mut contract);

    call_as(stranger(), 10_000);
    assert!(!contract.is_rental_expired(rental_id));
}
