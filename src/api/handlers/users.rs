use crate::{
    api::error::ApiError,
    store::{AccountView, CredentialStore},
};
use axum::{extract::Extension, response::Json};
use std::sync::Arc;
use tracing::{debug, instrument};

#[utoipa::path(
    get,
    path= "/api/users",
    responses (
        (status = 200, description = "All accounts, password hashes omitted", body = [AccountView], content_type = "application/json"),
        (status = 500, description = "Credential store failure"),
    ),
    tag= "users"
)]
// axum handler for listing users
#[instrument(skip_all)]
pub async fn users(
    store: Extension<Arc<dyn CredentialStore>>,
) -> Result<Json<Vec<AccountView>>, ApiError> {
    let users = store.list_all().await?;

    debug!("Found users: {}", users.len());

    Ok(Json(users))
}
