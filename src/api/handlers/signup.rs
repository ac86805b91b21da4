use crate::{
    api::{error::ApiError, handlers::hash_secret},
    store::{CredentialStore, NewAccount},
};
use axum::{extract::Extension, response::Json};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    #[schema(value_type = String)]
    pub password: SecretString,
    #[schema(value_type = String)]
    pub confirm_password: SecretString,
    pub first_name: String,
    pub last_name: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct SignupResponse {
    pub message: String,
    pub redirect: String,
}

#[utoipa::path(
    post,
    path= "/api/signup",
    request_body = SignupRequest,
    responses (
        (status = 200, description = "Account created", body = [SignupResponse], content_type = "application/json"),
        (status = 400, description = "Passwords do not match, or a user with that email already exists"),
        (status = 500, description = "Credential store failure"),
    ),
    tag= "signup"
)]
// axum handler for signup
#[instrument(skip_all)]
pub async fn signup(
    store: Extension<Arc<dyn CredentialStore>>,
    payload: Option<Json<SignupRequest>>,
) -> Result<Json<SignupResponse>, ApiError> {
    let Some(Json(request)) = payload else {
        return Err(ApiError::MissingPayload);
    };

    debug!("Signup request received: {:?}", request);

    if request.password.expose_secret() != request.confirm_password.expose_secret() {
        return Err(ApiError::PasswordMismatch);
    }

    // Not atomic with the insert below. The postgres store re-checks via its
    // unique index; the memory store relies on this lookup alone.
    if store.find_by_email(&request.email).await?.is_some() {
        error!("User already exists: {}", request.email);

        return Err(ApiError::Duplicate);
    }

    let password = hash_secret(&request.password)?;

    let account = store
        .create(NewAccount {
            email: request.email,
            password,
            name: format!("{} {}", request.first_name, request.last_name),
        })
        .await?;

    debug!("User created: {}", account.email);

    Ok(Json(SignupResponse {
        message: "Account created successfully".to_string(),
        redirect: "/login.html".to_string(),
    }))
}
