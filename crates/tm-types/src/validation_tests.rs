//! Unit tests for form validation.

use super::*;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn registration<'a>(role: Role, agency: &'a str) -> RegistrationInput<'a> {
    RegistrationInput {
        username: "ana",
        email: "ana@example.com",
        password: "secret",
        confirm_password: "secret",
        role,
        travel_agency_name: agency,
    }
}

#[test]
fn test_registration_validation() {
    assert!(registration(Role::Traveller, "").validate().is_empty());

    // Agency accounts must name the agency
    let errors = registration(Role::TravelAgency, "  ").validate();
    assert_eq!(errors.get("travel_agency_name"), Some(&ValidationError::Required));
    assert!(registration(Role::TravelAgency, "Globetrotters").validate().is_empty());

    let input = RegistrationInput {
        email: "not-an-email",
        confirm_password: "other",
        ..registration(Role::Traveller, "")
    };
    let errors = input.validate();
    assert!(matches!(errors.get("email"), Some(ValidationError::InvalidFormat(_))));
    assert!(matches!(errors.get("confirm_password"), Some(ValidationError::Other(_))));
}

#[test]
fn test_login_validation() {
    let errors = validate_login(" ", "");
    assert_eq!(errors.len(), 2);
    assert!(validate_login("ana", "secret").is_empty());
}

#[test]
fn test_price_parsing() {
    assert_eq!(parse_price(" 120.5 "), Ok(120.5));
    assert_eq!(parse_price(""), Err(ValidationError::Required));
    assert!(matches!(parse_price("abc"), Err(ValidationError::InvalidFormat(_))));
    assert!(matches!(parse_price("0"), Err(ValidationError::Other(_))));
    assert!(matches!(parse_price("-3"), Err(ValidationError::Other(_))));
}

#[test]
fn test_catalog_forms() {
    let hotel = HotelForm {
        name: "Sea View".to_string(),
        location: "Lisbon".to_string(),
        price_per_night: "0".to_string(),
        address: String::new(),
        destination_id: None,
    };
    let errors = validate_hotel(&hotel);
    assert!(errors.contains_key("price_per_night"));
    assert_eq!(errors.get("address"), Some(&ValidationError::Required));

    let destination = DestinationForm {
        name: "Lisbon".to_string(),
        country: "Portugal".to_string(),
        description: String::new(),
    };
    assert!(validate_destination(&destination).is_empty());

    let restaurant = RestaurantForm {
        name: "Tasca".to_string(),
        ..Default::default()
    };
    let errors = validate_restaurant(&restaurant);
    assert!(!errors.contains_key("name"));
    assert!(errors.contains_key("cuisine"));
}

#[test]
fn test_package_form() {
    let form = PackageForm {
        package_name: "Lisbon Long Weekend".to_string(),
        destination: "Lisbon".to_string(),
        price: "899".to_string(),
        ..Default::default()
    };
    assert!(validate_package(&form).is_empty());

    let form = PackageForm {
        price: "free".to_string(),
        ..form
    };
    assert!(validate_package(&form).contains_key("price"));
}

#[test]
fn test_package_booking_dates() {
    let today = date("2026-03-01");
    assert!(validate_package_booking(today, Some(today)).is_empty());
    assert!(validate_package_booking(today, Some(date("2026-02-28"))).contains_key("travel_date"));
    assert_eq!(
        validate_package_booking(today, None).get("travel_date"),
        Some(&ValidationError::Required)
    );
}

#[test]
fn test_stay_validation() {
    let today = date("2026-03-01");
    let stay = StayInput {
        hotel_id: Some(3),
        travel_date: Some(date("2026-03-10")),
        return_date: Some(date("2026-03-12")),
        travellers: 2,
    };
    assert!(stay.validate(today).is_empty());

    // Return must be strictly after travel
    let same_day = StayInput {
        return_date: Some(date("2026-03-10")),
        ..stay.clone()
    };
    assert!(same_day.validate(today).contains_key("return_date"));

    let errors = StayInput::default().validate(today);
    assert!(errors.contains_key("hotel"));
    assert!(errors.contains_key("travel_date"));
    assert!(errors.contains_key("return_date"));
    assert!(errors.contains_key("travellers"));

    let past = StayInput {
        travel_date: Some(date("2026-02-01")),
        ..stay
    };
    assert!(past.validate(today).contains_key("travel_date"));
}

#[test]
fn test_complaint_validation() {
    let ok = ComplaintInput {
        subject: "Cold food",
        description: "The dinner was served cold.",
        entity_name: "Tasca",
    };
    assert!(ok.validate().is_empty());

    let long = "x".repeat(COMPLAINT_DESCRIPTION_MAX + 1);
    let errors = ComplaintInput {
        description: &long,
        ..ok.clone()
    }
    .validate();
    assert_eq!(errors.get("description"), Some(&ValidationError::TooLong(COMPLAINT_DESCRIPTION_MAX)));

    let exact = "é".repeat(COMPLAINT_DESCRIPTION_MAX);
    assert!(ComplaintInput {
        description: &exact,
        ..ok
    }
    .validate()
    .is_empty());

    let errors = ComplaintInput::default().validate();
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_form_date_parsing() {
    assert_eq!(parse_form_date("2026-04-10"), Some(date("2026-04-10")));
    assert_eq!(parse_form_date(""), None);
    assert_eq!(parse_form_date("10/04/2026"), None);
}

#[test]
fn test_format_errors_is_sorted() {
    let errors = validate_login("", "");
    assert_eq!(
        format_errors(&errors),
        "password: This field is required, username: This field is required"
    );
}
