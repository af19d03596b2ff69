use reqwest::Method;
use tm_types::catalog::{Hotel, HotelForm};

use super::client::ApiClient;
use crate::error::ApiError;

pub async fn list_hotels(api: &ApiClient) -> Result<Vec<Hotel>, ApiError> {
    api.get_json("/api/admin/hotels", &[]).await
}

pub async fn create_hotel(api: &ApiClient, form: &HotelForm, username: &str) -> Result<(), ApiError> {
    api.send_form(Method::POST, "/api/admin/hotels", &form.form_fields(username))
        .await
        .map(|_| ())
}

pub async fn update_hotel(api: &ApiClient, id: i64, form: &HotelForm, username: &str) -> Result<(), ApiError> {
    api.send_form(Method::PUT, &format!("/api/admin/hotels/{}", id), &form.form_fields(username))
        .await
        .map(|_| ())
}

pub async fn delete_hotel(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/api/admin/hotels/{}", id)).await
}
