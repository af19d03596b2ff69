use reqwest::Method;
use tm_types::catalog::{Restaurant, RestaurantForm};

use super::client::ApiClient;
use crate::error::ApiError;

pub async fn list_restaurants(api: &ApiClient) -> Result<Vec<Restaurant>, ApiError> {
    api.get_json("/api/admin/restaurants", &[]).await
}

pub async fn create_restaurant(api: &ApiClient, form: &RestaurantForm, username: &str) -> Result<(), ApiError> {
    api.send_form(Method::POST, "/api/admin/restaurants", &form.form_fields(username))
        .await
        .map(|_| ())
}

pub async fn update_restaurant(api: &ApiClient, id: i64, form: &RestaurantForm, username: &str) -> Result<(), ApiError> {
    api.send_form(Method::PUT, &format!("/api/admin/restaurants/{}", id), &form.form_fields(username))
        .await
        .map(|_| ())
}

pub async fn delete_restaurant(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/api/admin/restaurants/{}", id)).await
}
