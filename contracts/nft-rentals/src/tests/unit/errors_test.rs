use crate::*;

#[test]
fn error_codes_are_stable() {
    let codes = [
        (RentalError::OwnerOnly, 100),
        (RentalError::NotFound, 101),
        (RentalError::Unauthorized, 102),
        (RentalError::InvalidStatus, 103),
        (RentalError::NotExpired, 104),
        (RentalError::InvalidRating, 105),
        (RentalError::InvalidDiscount, 106),
        (RentalError::invalid_input("bad"), 107),
        (RentalError::AlreadyRated, 108),
        (RentalError::InsufficientDeposit, 109),
    ];
    for (error, code) in codes {
        assert_eq!(error.code(), code);
        assert!(error.to_string().starts_with(&format!("E{}: ", code)));
    }
}

#[test]
fn invalid_input_message_carries_detail() {
    let error = RentalError::invalid_input("Dispute reason is empty");
    assert_eq!(
        error.to_string(),
        "E107: Invalid input: Dispute reason is empty"
    );
}

#[test]
#[should_panic(expected = "E100: Only the contract administrator can perform this action")]
fn function_error_panics_with_message() {
    use near_sdk::FunctionError;
    RentalError::OwnerOnly.panic();
}
