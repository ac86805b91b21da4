//! Request-boundary error taxonomy.
//!
//! Every failure a handler can produce converts into a JSON body of the form
//! `{"error": "..."}` with the matching status code. `InvalidCredentials`
//! deliberately covers both "unknown user" and "wrong password" so callers
//! cannot enumerate registered emails.

use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing payload")]
    MissingPayload,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("User already exists")]
    Duplicate,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Server error")]
    Store(#[source] StoreError),

    #[error("Server error")]
    Hash(#[from] bcrypt::BcryptError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // The postgres unique index caught a concurrent signup
            StoreError::Duplicate => Self::Duplicate,
            err => Self::Store(err),
        }
    }
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::MissingPayload | Self::PasswordMismatch | Self::Duplicate => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Store(_) | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            match &self {
                Self::Store(err) => error!("Store error: {err}"),
                Self::Hash(err) => error!("Hash error: {err:?}"),
                _ => error!("Unexpected error: {self}"),
            }
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
