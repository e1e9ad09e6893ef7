//! # Customer Routes

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use spicebill_core::{Customer, PriceMap};

use crate::auth::require_admin;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub address: String,

    /// Initial item → unit price map. The registration form seeds one
    /// entry per catalog item; missing entirely is fine.
    #[serde(default)]
    pub prices: PriceMap,
}

/// `GET /customers` - names in registration order.
pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store.customers().names().await)
}

/// `GET /customers/:name` - identity, address, and price map.
pub async fn get_customer(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state.store.customers().get(&name).await?;
    Ok(Json(customer))
}

/// `POST /customers` - register a new customer.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<StatusCode, ApiError> {
    debug!(customer = %req.name, "register request");

    state
        .store
        .customers()
        .register(&req.name, &req.address, req.prices)
        .await?;
    Ok(StatusCode::CREATED)
}

/// `PUT /customers/:name/prices` - admin-gated batch price upsert.
///
/// The whole body lands in one persist; callers edit many rates per
/// round trip instead of saving per item.
pub async fn set_prices(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    Json(prices): Json<PriceMap>,
) -> Result<StatusCode, ApiError> {
    require_admin(state.admin.as_ref(), &headers)?;
    debug!(customer = %name, entries = prices.len(), "set_prices request");

    state.store.customers().set_prices(&name, prices).await?;
    Ok(StatusCode::NO_CONTENT)
}
