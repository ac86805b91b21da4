use crate::{
    api::{error::ApiError, handlers::verify_secret},
    store::CredentialStore,
};
use axum::{extract::Extension, response::Json};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    #[schema(value_type = String)]
    pub password: SecretString,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub redirect: String,
}

#[utoipa::path(
    post,
    path= "/api/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful", body = [LoginResponse], content_type = "application/json"),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Credential store failure"),
    ),
    tag= "login"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    store: Extension<Arc<dyn CredentialStore>>,
    payload: Option<Json<LoginRequest>>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Some(Json(request)) = payload else {
        return Err(ApiError::MissingPayload);
    };

    debug!("Login request for: {}", request.email);

    // Unknown user and wrong password produce the same error so registered
    // emails cannot be enumerated through this endpoint.
    let Some(account) = store.find_by_email(&request.email).await? else {
        debug!("User not found");

        return Err(ApiError::InvalidCredentials);
    };

    if !verify_secret(&request.password, &account.password)? {
        debug!("Unauthorized");

        return Err(ApiError::InvalidCredentials);
    }

    debug!("Login successful: {}", account.email);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        redirect: "/dashboard.html".to_string(),
    }))
}
