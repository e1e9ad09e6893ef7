//! # Payment History Routes

use axum::extract::{Path, State};
use axum::Json;

use spicebill_core::Invoice;
use spicebill_store::PaymentSummary;

use crate::state::AppState;

/// `GET /customers/:name/payments` - invoice history in append order.
///
/// Append order, not date order; clients re-sort for display (the
/// history view shows newest date first).
pub async fn history(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<Invoice>> {
    Json(state.store.payments().history(&name).await)
}

/// `GET /customers/:name/payments/summary` - Σ received and Σ due.
pub async fn summary(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<PaymentSummary> {
    Json(state.store.payments().summary(&name).await)
}
