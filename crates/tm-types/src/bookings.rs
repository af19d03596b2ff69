//! Traveller bookings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedPackage {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub travel_agency_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub booking_date: Option<NaiveDate>,
    #[serde(default)]
    pub travel_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub travel_package: Option<BookedPackage>,
}

impl Booking {
    pub fn title(&self) -> &str {
        self.travel_package.as_ref().map(|p| p.name.as_str()).unwrap_or("Booking")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Package booking request. The backend resolves the user by id first, then by username.
pub struct NewBooking {
    pub user_id: Option<i64>,
    pub username: String,
    pub travel_package_id: i64,
    pub booking_date: NaiveDate,
    pub travel_date: NaiveDate,
    pub total_price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Direct hotel stay at a destination, booked without a package.
pub struct NewDestinationBooking {
    pub user_id: Option<i64>,
    pub username: String,
    pub destination_id: i64,
    pub hotel_id: i64,
    pub travel_date: NaiveDate,
    pub total_price: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Acknowledgement returned by the booking endpoints.
pub struct BookingConfirmation {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Nights between travel and return date, never less than one.
pub fn stay_nights(travel: NaiveDate, return_date: NaiveDate) -> i64 {
    (return_date - travel).num_days().max(1)
}

/// Estimated price for a hotel stay, as shown before confirming.
///
/// The backend stores whatever total it is sent; this is only the estimate
/// presented to the traveller.
pub fn stay_estimate(price_per_night: f64, travel: NaiveDate, return_date: NaiveDate, travellers: u32) -> f64 {
    price_per_night * stay_nights(travel, return_date) as f64 * f64::from(travellers.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_booking_parses_backend_payload() {
        let booking: Booking = serde_json::from_str(
            r#"{"id":5,"bookingDate":"2026-03-01","travelDate":"2026-04-10","totalPrice":899.0,
                "travelPackage":{"id":42,"name":"Lisbon Long Weekend","price":899.0}}"#,
        )
        .unwrap();
        assert_eq!(booking.travel_date, Some(date("2026-04-10")));
        assert_eq!(booking.title(), "Lisbon Long Weekend");
    }

    #[test]
    fn test_new_booking_wire_format() {
        let request = NewBooking {
            user_id: None,
            username: "ana".to_string(),
            travel_package_id: 42,
            booking_date: date("2026-03-01"),
            travel_date: date("2026-03-08"),
            total_price: 899.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["travelPackageId"], 42);
        assert_eq!(json["travelDate"], "2026-03-08");
        assert!(json["userId"].is_null());
    }

    #[test]
    fn test_stay_nights_has_a_floor_of_one() {
        assert_eq!(stay_nights(date("2026-05-01"), date("2026-05-04")), 3);
        assert_eq!(stay_nights(date("2026-05-01"), date("2026-05-01")), 1);
        assert_eq!(stay_nights(date("2026-05-04"), date("2026-05-01")), 1);
    }

    #[test]
    fn test_stay_estimate() {
        assert_eq!(stay_estimate(100.0, date("2026-05-01"), date("2026-05-04"), 2), 600.0);
        assert_eq!(stay_estimate(100.0, date("2026-05-01"), date("2026-05-02"), 0), 100.0);
    }
}
