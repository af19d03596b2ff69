use tm_types::{
    auth::Identity, bookings::{Booking, BookingConfirmation, NewBooking, NewDestinationBooking}, packages::PackageSummary
};

use super::client::{ApiClient, encode_segment};
use crate::error::ApiError;

/// Packages open for booking.
pub async fn bookable_packages(api: &ApiClient) -> Result<Vec<PackageSummary>, ApiError> {
    api.get_json("/api/bookings/packages", &[]).await
}

pub async fn book_package(api: &ApiClient, booking: &NewBooking) -> Result<BookingConfirmation, ApiError> {
    let reply = api.post_json_text("/api/bookings", &[], booking).await?;
    Ok(confirmation(&reply))
}

pub async fn book_destination(api: &ApiClient, booking: &NewDestinationBooking) -> Result<BookingConfirmation, ApiError> {
    let reply = api.post_json_text("/api/bookings/destination", &[], booking).await?;
    Ok(confirmation(&reply))
}

/// A successful booking reply is either the stored booking or a plain message.
fn confirmation(reply: &str) -> BookingConfirmation {
    serde_json::from_str(reply).unwrap_or_else(|_| BookingConfirmation {
        message: Some(reply.trim().to_string()).filter(|m| !m.is_empty()),
        ..Default::default()
    })
}

/// Bookings of the signed-in traveller, looked up by id when the session has one.
pub async fn my_bookings(api: &ApiClient, identity: &Identity) -> Result<Vec<Booking>, ApiError> {
    api.get_json(&bookings_path(identity), &[]).await
}

pub fn bookings_path(identity: &Identity) -> String {
    match identity.id {
        Some(id) => format!("/api/bookings/user/{}", id),
        None => format!("/api/bookings/username/{}", encode_segment(&identity.username)),
    }
}

pub async fn cancel_booking(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/api/bookings/{}", id)).await
}

#[cfg(test)]
mod tests {
    use tm_types::auth::Role;

    use super::*;

    #[test]
    fn test_bookings_path_prefers_id() {
        let identity = Identity::new("ana", Role::Traveller);
        assert_eq!(bookings_path(&identity), "/api/bookings/username/ana");
        assert_eq!(bookings_path(&identity.with_id(12)), "/api/bookings/user/12");
    }

    #[test]
    fn test_confirmation_accepts_json_or_text() {
        let parsed = confirmation(r#"{"id":31,"status":"CONFIRMED"}"#);
        assert_eq!(parsed.id, Some(31));

        let parsed = confirmation("Booking created");
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.message.as_deref(), Some("Booking created"));
    }
}
