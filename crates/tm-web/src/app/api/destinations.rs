use reqwest::Method;
use tm_types::catalog::{Destination, DestinationForm, Hotel, Restaurant};

use super::client::ApiClient;
use crate::error::ApiError;

pub async fn list_destinations(api: &ApiClient) -> Result<Vec<Destination>, ApiError> {
    api.get_json("/api/admin/destinations", &[]).await
}

pub async fn get_destination(api: &ApiClient, id: i64) -> Result<Destination, ApiError> {
    api.get_json(&format!("/api/admin/destinations/{}", id), &[]).await
}

pub async fn destination_hotels(api: &ApiClient, id: i64) -> Result<Vec<Hotel>, ApiError> {
    api.get_json(&format!("/api/admin/destinations/{}/hotels", id), &[]).await
}

pub async fn destination_restaurants(api: &ApiClient, id: i64) -> Result<Vec<Restaurant>, ApiError> {
    api.get_json(&format!("/api/admin/destinations/{}/restaurants", id), &[]).await
}

pub async fn create_destination(api: &ApiClient, form: &DestinationForm, username: &str) -> Result<(), ApiError> {
    api.send_form(Method::POST, "/api/admin/destinations", &form.form_fields(username))
        .await
        .map(|_| ())
}

pub async fn update_destination(api: &ApiClient, id: i64, form: &DestinationForm, username: &str) -> Result<(), ApiError> {
    api.send_form(Method::PUT, &format!("/api/admin/destinations/{}", id), &form.form_fields(username))
        .await
        .map(|_| ())
}

pub async fn delete_destination(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/api/admin/destinations/{}", id)).await
}
