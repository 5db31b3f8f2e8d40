use crate::constants::MAX_REASON_LEN;
use crate::tests::test_utils::*;
use crate::types::RentalStatus;
use crate::*;

#[test]
fn renter_files_dispute() {
    let mut contract = new_contract();
    let rental_id = active_rental(&mut contract);

    call_as(renter(), 5);
    assert!(contract
        .file_rental_dispute(rental_id, "Rental terms violated".to_string())
        .unwrap());

    let rental = contract.get_rental(rental_id).unwrap();
    assert_eq!(rental.status, RentalStatus::Disputed);
    assert_eq!(rental.dispute_reason.as_deref(), Some("Rental terms violated"));
    assert_eq!(rental.renter(), Some(&renter()));
    assert!(event_logged("dispute_filed"));
}

#[test]
fn owner_files_dispute() {
    let mut contract = new_contract();
    let rental_id = active_rental(&mut contract);

    call_as(admin(), 5);
    assert!(contract
        .file_rental_dispute(rental_id, "NFT misused".to_string())
        .unwrap());
    assert_eq!(
        contract.get_rental(rental_id).unwrap().status,
        RentalStatus::Disputed
    );
}

#[test]
fn stranger_cannot_file_dispute() {
    let mut contract = new_contract();
    let rental_id = active_rental(&mut contract);

    call_as(stranger(), 5);
    let err = contract
        .file_rental_dispute(rental_id, "Not my rental".to_string())
        .unwrap_err();
    assert_eq!(err, RentalError::Unauthorized);
    assert_eq!(
        contract.get_rental(rental_id).unwrap().status,
        RentalStatus::Active
    );
}

#[test]
fn dispute_requires_active_rental() {
    let mut contract = new_contract();
    let rental_id = listed_rental(&mut contract);

    call_as(admin(), 5);
    assert_eq!(
        contract
            .file_rental_dispute(rental_id, "Too early".to_string())
            .unwrap_err(),
        RentalError::InvalidStatus
    );
}

#[test]
fn second_dispute_fails() {
    let mut contract = new_contract();
    let rental_id = active_rental(&mut contract);

    call_as(renter(), 5);
    contract
        .file_rental_dispute(rental_id, "First".to_string())
        .unwrap();
    assert_eq!(
        contract
            .file_rental_dispute(rental_id, "Second".to_string())
            .unwrap_err(),
        RentalError::InvalidStatus
    );
    assert_eq!(
        contract.get_rental(rental_id).unwrap().dispute_reason.as_deref(),
        Some("First")
    );
}

#[test]
fn dispute_reason_validation() {
    let mut contract = new_contract();
    let rental_id = active_rental(&mut contract);

    call_as(renter(), 5);
    let err = contract
        .file_rental_dispute(rental_id, "   ".to_string())
        .unwrap_err();
    assert!(matches!(err, RentalError::InvalidInput(_)));

    let err = contract
        .file_rental_dispute(rental_id, "x".repeat(MAX_REASON_LEN + 1))
        .unwrap_err();
    assert!(matches!(err, RentalError::InvalidInput(_)));

    assert!(contract
        .file_rental_dispute(rental_id, "x".repeat(MAX_REASON_LEN))
        .unwrap());
}

#[test]
fn disputed_rental_cannot_be_ended_or_extended_by_renter() {
    let mut contract = new_contract();
    let rental_id = active_rental(&mut contract);

    call_as(renter(), 5);
    contract
        .file_rental_dispute(rental_id, "Broken metadata".to_string())
        .unwrap();

    call_as(renter(), START_HEIGHT + DURATION);
    assert_eq!(
        contract.end_rental(rental_id).unwrap_err(),
        RentalError::InvalidStatus
    );
    assert_eq!(
        contract.extend_rental(rental_id, 10).unwrap_err(),
        RentalError::InvalidStatus
    );
}

#[test]
fn emergency_return_resolves_dispute() {
    let mut contract = new_contract();
    let rental_id = active_rental(&mut contract);

    call_as(renter(), 5);
    contract
        .file_rental_dispute(rental_id, "Rental terms violated".to_string())
        .unwrap();

    call_as(admin(), 6);
    assert!(contract.emergency_return_nft(rental_id).unwrap());

    let rental = contract.get_rental(rental_id).unwrap();
    assert_eq!(rental.status, RentalStatus::Ended);
    assert_eq!(rental.dispute_reason.as_deref(), Some("Rental terms violated"));
    assert_eq!(rental.lease.unwrap().rental_end, 6);
}
