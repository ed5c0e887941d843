use shared_types::{
    ApiError, EmployeesResponse, LoginRequest, LoginResponse, RegisterRequest, RoleResponse,
};

use super::endpoints;
use crate::transport::{ApiClient, RequestOptions};

/// Log in. On success the backend sets the session cookies.
#[tracing::instrument(skip(client, credentials), fields(username = %credentials.username))]
pub async fn login(
    client: &ApiClient,
    credentials: &LoginRequest,
) -> Result<Option<LoginResponse>, ApiError> {
    client
        .fetch_optional(endpoints::LOGIN, RequestOptions::post().json(credentials)?)
        .await
}

/// Create an account. The backend's response body is not used.
#[tracing::instrument(skip(client, profile), fields(username = %profile.username))]
pub async fn register(client: &ApiClient, profile: &RegisterRequest) -> Result<(), ApiError> {
    client
        .fetch(endpoints::REGISTER, RequestOptions::post().json(profile)?)
        .await?;
    Ok(())
}

/// End the session; the backend clears its cookies.
#[tracing::instrument(skip(client))]
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client.fetch(endpoints::LOGOUT, RequestOptions::post()).await?;
    Ok(())
}

/// Role of the caller identified by the session cookie.
#[tracing::instrument(skip(client))]
pub async fn get_user_role(client: &ApiClient) -> Result<RoleResponse, ApiError> {
    client
        .fetch_json(endpoints::USER_ROLE, RequestOptions::get())
        .await
}

#[tracing::instrument(skip(client))]
pub async fn get_employees(client: &ApiClient) -> Result<EmployeesResponse, ApiError> {
    client
        .fetch_json(endpoints::EMPLOYEES, RequestOptions::get())
        .await
}
