use reqwest::Method;
use tm_types::{
    auth::{Identity, LoginRequest, LoginResponse, RegisterRequest}, packages::TravelAgency
};

use super::client::{ApiClient, decode};
use crate::error::ApiError;

/// Sign in. The identity comes strictly from the server's reply.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<Identity, ApiError> {
    let query = [("username", request.username.clone()), ("password", request.password.clone())];
    let body = api.send_query(Method::POST, "/users/login", &query).await?;
    let response: LoginResponse = decode(&body)?;
    let identity = response.into_identity()?;
    tracing::debug!(user = %identity, "login accepted");
    Ok(identity)
}

/// Create an account, then sign in with the same credentials.
///
/// The registration endpoint only answers with a message, so the identity is
/// obtained from the follow-up login.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<Identity, ApiError> {
    let message = api.post_json_text("/users/register", &[], request).await?;
    tracing::debug!(username = %request.username, message = %message.trim(), "registration accepted");
    login(api, &request.login_request()).await
}

pub async fn list_agencies(api: &ApiClient) -> Result<Vec<TravelAgency>, ApiError> {
    api.get_json("/users/agencies", &[]).await
}
