//! # Catalog Routes

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use crate::auth::require_admin;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub name: String,
}

/// `GET /catalog/items` - known spices in the order they were added.
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store.catalog().items().await)
}

/// `POST /catalog/items` - admin-gated append to the catalog.
pub async fn add_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<AddItemRequest>,
) -> Result<StatusCode, ApiError> {
    require_admin(state.admin.as_ref(), &headers)?;
    debug!(item = %req.name, "add_item request");

    state.store.catalog().add_item(&req.name).await?;
    Ok(StatusCode::CREATED)
}
