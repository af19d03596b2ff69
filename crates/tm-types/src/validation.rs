use std::{collections::HashMap, fmt};

use chrono::NaiveDate;

use crate::{
    auth::Role, catalog::{DestinationForm, HotelForm, RestaurantForm}, packages::PackageForm
};

/// Longest complaint description the backend accepts.
pub const COMPLAINT_DESCRIPTION_MAX: usize = 1000;

/// Field level validation errors shown inline next to form inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Required,
    InvalidFormat(String),
    TooLong(usize),
    Other(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required => write!(f, "This field is required"),
            ValidationError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            ValidationError::TooLong(max) => write!(f, "Must be at most {} characters", max),
            ValidationError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

fn require(errors: &mut HashMap<String, ValidationError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), ValidationError::Required);
    }
}

/// Parse a price typed into a form. Must be a finite number above zero.
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        Ok(_) => Err(ValidationError::Other("Price must be greater than zero".to_string())),
        Err(_) => Err(ValidationError::InvalidFormat("expected a number".to_string())),
    }
}

fn check_price(errors: &mut HashMap<String, ValidationError>, field: &str, raw: &str) {
    if let Err(err) = parse_price(raw) {
        errors.insert(field.to_string(), err);
    }
}

/// Parse the value of an `<input type="date">`. Blank or malformed input yields `None`.
pub fn parse_form_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Registration form as typed by the user.
#[derive(Debug, Clone)]
pub struct RegistrationInput<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub role: Role,
    /// Only checked for travel agency registrations.
    pub travel_agency_name: &'a str,
}

impl RegistrationInput<'_> {
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();

        require(&mut errors, "username", self.username);

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert("email".to_string(), ValidationError::Required);
        } else if !looks_like_email(email) {
            errors.insert(
                "email".to_string(),
                ValidationError::InvalidFormat("expected an email address".to_string()),
            );
        }

        if self.password.is_empty() {
            errors.insert("password".to_string(), ValidationError::Required);
        } else if self.password != self.confirm_password {
            errors.insert(
                "confirm_password".to_string(),
                ValidationError::Other("Passwords do not match".to_string()),
            );
        }

        if self.role == Role::TravelAgency {
            require(&mut errors, "travel_agency_name", self.travel_agency_name);
        }

        errors
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    }
}

pub fn validate_login(username: &str, password: &str) -> HashMap<String, ValidationError> {
    let mut errors = HashMap::new();
    require(&mut errors, "username", username);
    if password.is_empty() {
        errors.insert("password".to_string(), ValidationError::Required);
    }
    errors
}

pub fn validate_destination(form: &DestinationForm) -> HashMap<String, ValidationError> {
    let mut errors = HashMap::new();
    require(&mut errors, "name", &form.name);
    require(&mut errors, "country", &form.country);
    errors
}

pub fn validate_hotel(form: &HotelForm) -> HashMap<String, ValidationError> {
    let mut errors = HashMap::new();
    require(&mut errors, "name", &form.name);
    require(&mut errors, "location", &form.location);
    require(&mut errors, "address", &form.address);
    check_price(&mut errors, "price_per_night", &form.price_per_night);
    errors
}

pub fn validate_restaurant(form: &RestaurantForm) -> HashMap<String, ValidationError> {
    let mut errors = HashMap::new();
    require(&mut errors, "name", &form.name);
    require(&mut errors, "location", &form.location);
    require(&mut errors, "address", &form.address);
    require(&mut errors, "cuisine", &form.cuisine);
    errors
}

pub fn validate_package(form: &PackageForm) -> HashMap<String, ValidationError> {
    let mut errors = HashMap::new();
    require(&mut errors, "package_name", &form.package_name);
    require(&mut errors, "destination", &form.destination);
    check_price(&mut errors, "price", &form.price);
    errors
}

/// Package booking dates. The booking date is the day the booking is made.
pub fn validate_package_booking(booking_date: NaiveDate, travel_date: Option<NaiveDate>) -> HashMap<String, ValidationError> {
    let mut errors = HashMap::new();
    match travel_date {
        None => {
            errors.insert("travel_date".to_string(), ValidationError::Required);
        }
        Some(travel) if travel < booking_date => {
            errors.insert(
                "travel_date".to_string(),
                ValidationError::Other("Travel date cannot be before the booking date".to_string()),
            );
        }
        Some(_) => {}
    }
    errors
}

/// Hotel stay booked directly from a destination.
#[derive(Debug, Clone, Default)]
pub struct StayInput {
    pub hotel_id: Option<i64>,
    pub travel_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub travellers: u32,
}

impl StayInput {
    pub fn validate(&self, today: NaiveDate) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();

        if self.hotel_id.is_none() {
            errors.insert("hotel".to_string(), ValidationError::Other("Please select a hotel".to_string()));
        }

        match self.travel_date {
            None => {
                errors.insert("travel_date".to_string(), ValidationError::Required);
            }
            Some(travel) if travel < today => {
                errors.insert(
                    "travel_date".to_string(),
                    ValidationError::Other("Travel date cannot be in the past".to_string()),
                );
            }
            Some(_) => {}
        }

        match (self.travel_date, self.return_date) {
            (_, None) => {
                errors.insert("return_date".to_string(), ValidationError::Required);
            }
            (Some(travel), Some(ret)) if ret <= travel => {
                errors.insert(
                    "return_date".to_string(),
                    ValidationError::Other("Return date must be after the travel date".to_string()),
                );
            }
            _ => {}
        }

        if self.travellers == 0 {
            errors.insert(
                "travellers".to_string(),
                ValidationError::Other("At least one traveller is required".to_string()),
            );
        }

        errors
    }
}

#[derive(Debug, Clone, Default)]
pub struct ComplaintInput<'a> {
    pub subject: &'a str,
    pub description: &'a str,
    pub entity_name: &'a str,
}

impl ComplaintInput<'_> {
    pub fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = HashMap::new();
        require(&mut errors, "subject", self.subject);
        require(&mut errors, "entity_name", self.entity_name);

        if self.description.trim().is_empty() {
            errors.insert("description".to_string(), ValidationError::Required);
        } else if self.description.chars().count() > COMPLAINT_DESCRIPTION_MAX {
            errors.insert("description".to_string(), ValidationError::TooLong(COMPLAINT_DESCRIPTION_MAX));
        }

        errors
    }
}

/// Render a human-readable string from a map of validation errors.
pub fn format_errors(errors: &HashMap<String, ValidationError>) -> String {
    let mut entries: Vec<_> = errors.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries.into_iter().map(|(k, v)| format!("{}: {}", k, v)).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
