use reqwest::Method;
use tm_types::complaints::{Complaint, ComplaintStatusUpdate, NewComplaint};

use super::client::{ApiClient, encode_segment};
use crate::error::ApiError;

pub async fn submit_complaint(api: &ApiClient, complaint: &NewComplaint) -> Result<(), ApiError> {
    api.post_json_text("/api/complaints", &[("username", complaint.username.clone())], complaint)
        .await
        .map(|_| ())
}

pub async fn my_complaints(api: &ApiClient, username: &str) -> Result<Vec<Complaint>, ApiError> {
    api.get_json(&format!("/api/complaints/user/{}", encode_segment(username)), &[])
        .await
}

pub async fn all_complaints(api: &ApiClient) -> Result<Vec<Complaint>, ApiError> {
    api.get_json("/api/complaints/all", &[]).await
}

pub async fn update_complaint_status(api: &ApiClient, id: i64, update: &ComplaintStatusUpdate) -> Result<(), ApiError> {
    api.send_query(Method::PUT, &format!("/api/complaints/{}/status", id), &update.query())
        .await
        .map(|_| ())
}
