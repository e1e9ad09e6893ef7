//! # Billing Routes
//!
//! The two billing handlers share one computation path; `quote` stops
//! after the math while `record` appends the result to the ledger.
//! Both return the invoice plus flat export rows so the client can
//! render the breakdown and offer the CSV download from one response.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use spicebill_core::billing::{compute_invoice, export_rows};
use spicebill_core::{ExportRow, Invoice, Money, Quantity};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRequest {
    /// Customer whose price map applies.
    pub customer: String,

    /// Item → quantity (kg). Zero-quantity entries are skipped.
    pub quantities: IndexMap<String, Quantity>,

    /// Defaults to the invoice total (pay-in-full) when omitted.
    /// Partial payment and overpayment are both accepted.
    pub amount_received: Option<Money>,

    /// Transaction date; defaults to today.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingResponse {
    pub customer: String,
    pub invoice: Invoice,

    /// Flat {item, qty, rate, subtotal} rows for CSV-style export.
    pub rows: Vec<ExportRow>,
}

/// Runs the shared compute path for both handlers.
async fn compute(state: &AppState, req: BillingRequest) -> Result<BillingResponse, ApiError> {
    let customer = state.store.customers().get(&req.customer).await?;
    let date = req.date.unwrap_or_else(|| chrono::Local::now().date_naive());

    // Defaulting received-to-total needs the total first; the engine is
    // pure, so a throwaway pass is cheaper than a mutable invoice.
    let received = match req.amount_received {
        Some(amount) => amount,
        None => compute_invoice(&customer.prices, &req.quantities, Money::zero(), date)?.total,
    };

    let invoice = compute_invoice(&customer.prices, &req.quantities, received, date)?;
    let rows = export_rows(&invoice);

    Ok(BillingResponse {
        customer: customer.name,
        invoice,
        rows,
    })
}

/// `POST /billing/quote` - compute an invoice without recording it.
///
/// Backs the live breakdown on the billing form while quantities are
/// still being edited.
pub async fn quote(
    State(state): State<AppState>,
    Json(req): Json<BillingRequest>,
) -> Result<Json<BillingResponse>, ApiError> {
    debug!(customer = %req.customer, items = req.quantities.len(), "quote request");
    let response = compute(&state, req).await?;
    Ok(Json(response))
}

/// `POST /billing/invoices` - generate the bill: compute, then append
/// to the customer's payment history.
pub async fn record(
    State(state): State<AppState>,
    Json(req): Json<BillingRequest>,
) -> Result<(StatusCode, Json<BillingResponse>), ApiError> {
    debug!(customer = %req.customer, items = req.quantities.len(), "record request");
    let response = compute(&state, req).await?;

    state
        .store
        .payments()
        .record(&response.customer, response.invoice.clone())
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

// =============================================================================
// Handler Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticToken;
    use crate::error::ErrorCode;
    use spicebill_core::PriceMap;
    use spicebill_store::Store;
    use tempfile::TempDir;

    async fn state_with_customer(dir: &TempDir) -> AppState {
        let store = Store::open(dir.path()).await.unwrap();
        let mut prices = PriceMap::new();
        prices.insert("Turmeric".to_string(), Money::from_rupees(10));
        prices.insert("Cumin".to_string(), Money::from_rupees(4));
        store
            .customers()
            .register("Ravi Stores", "12 Market Rd", prices)
            .await
            .unwrap();
        AppState::new(store, StaticToken::new("t"))
    }

    fn request(received: Option<i64>) -> BillingRequest {
        let mut quantities = IndexMap::new();
        quantities.insert("Turmeric".to_string(), Quantity::from_kg(2));
        quantities.insert("Cumin".to_string(), Quantity::from_kg(3));
        BillingRequest {
            customer: "Ravi Stores".to_string(),
            quantities,
            amount_received: received.map(Money::from_rupees),
            date: NaiveDate::from_ymd_opt(2024, 6, 1),
        }
    }

    #[tokio::test]
    async fn quote_computes_without_recording() {
        let dir = TempDir::new().unwrap();
        let state = state_with_customer(&dir).await;

        let response = compute(&state, request(Some(20))).await.unwrap();
        assert_eq!(response.invoice.total, Money::from_rupees(32));
        assert_eq!(response.invoice.due, Money::from_rupees(12));
        assert_eq!(response.rows.len(), 2);

        assert!(state.store.payments().history("Ravi Stores").await.is_empty());
    }

    #[tokio::test]
    async fn omitted_amount_defaults_to_pay_in_full() {
        let dir = TempDir::new().unwrap();
        let state = state_with_customer(&dir).await;

        let response = compute(&state, request(None)).await.unwrap();
        assert_eq!(response.invoice.received, Money::from_rupees(32));
        assert_eq!(response.invoice.due, Money::zero());
    }

    #[tokio::test]
    async fn unknown_customer_is_not_found() {
        let dir = TempDir::new().unwrap();
        let state = state_with_customer(&dir).await;

        let mut req = request(None);
        req.customer = "Nobody".to_string();
        let err = compute(&state, req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
