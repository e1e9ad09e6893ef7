//! # Route Handlers
//!
//! Discrete request handlers, one core operation each: load what is
//! needed, perform the operation, persist, return a result. No handler
//! holds state between requests and none contains business logic.
//!
//! ## Route Map
//! ```text
//! GET  /catalog/items                       list spices
//! POST /catalog/items                       add spice           (admin)
//! GET  /customers                           list customer names
//! POST /customers                           register customer
//! GET  /customers/:name                     customer + price map
//! PUT  /customers/:name/prices              batch price upsert  (admin)
//! POST /billing/quote                       compute invoice (no record)
//! POST /billing/invoices                    compute + record invoice
//! GET  /customers/:name/payments            invoice history
//! GET  /customers/:name/payments/summary    Σ received / Σ due
//! ```

pub mod billing;
pub mod catalog;
pub mod customers;
pub mod payments;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/catalog/items",
            get(catalog::list_items).post(catalog::add_item),
        )
        .route(
            "/customers",
            get(customers::list_customers).post(customers::register),
        )
        .route("/customers/:name", get(customers::get_customer))
        .route("/customers/:name/prices", put(customers::set_prices))
        .route("/customers/:name/payments", get(payments::history))
        .route(
            "/customers/:name/payments/summary",
            get(payments::summary),
        )
        .route("/billing/quote", post(billing::quote))
        .route("/billing/invoices", post(billing::record))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
