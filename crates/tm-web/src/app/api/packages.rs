use reqwest::Method;
use tm_types::packages::{PackageForm, TravelPackage};

use super::client::{ApiClient, encode_segment};
use crate::error::ApiError;

/// Every package on the platform, regardless of agency.
pub async fn list_packages(api: &ApiClient) -> Result<Vec<TravelPackage>, ApiError> {
    api.get_json("/travel-packages", &[]).await
}

pub async fn get_package(api: &ApiClient, id: i64) -> Result<TravelPackage, ApiError> {
    api.get_json(&format!("/travel-packages/{}", id), &[]).await
}

/// Packages published by one agency.
pub async fn agency_packages(api: &ApiClient, username: &str) -> Result<Vec<TravelPackage>, ApiError> {
    api.get_json(&format!("/travel-packages/user/{}", encode_segment(username)), &[])
        .await
}

pub async fn create_package(api: &ApiClient, form: &PackageForm, username: &str) -> Result<(), ApiError> {
    api.send_form(Method::POST, "/travel-packages/create", &form.form_fields(username))
        .await
        .map(|_| ())
}

pub async fn update_package(api: &ApiClient, id: i64, form: &PackageForm, username: &str) -> Result<(), ApiError> {
    api.send_form(Method::PUT, &format!("/travel-packages/{}", id), &form.form_fields(username))
        .await
        .map(|_| ())
}

pub async fn delete_package(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/travel-packages/{}", id)).await
}
