//! # Gateway State
//!
//! Shared state for route handlers.
//!
//! ## Thread Safety
//! The stores serialize their own writes (one mutex per document inside
//! `spicebill-store`), so handlers just share `Arc`s - no locking at
//! this layer.

use std::sync::Arc;

use spicebill_store::Store;

use crate::auth::AdminGate;

/// State injected into every handler.
///
/// ## Why a Struct of Arcs?
/// Handlers declare exactly one `State<AppState>` and reach the store
/// or the admin gate through it; cloning is two pointer bumps.
#[derive(Clone)]
pub struct AppState {
    /// The three document stores, opened once at startup.
    pub store: Arc<Store>,

    /// Injectable admin authorization (static shared secret today).
    pub admin: Arc<dyn AdminGate>,
}

impl AppState {
    pub fn new(store: Store, admin: impl AdminGate) -> Self {
        AppState {
            store: Arc::new(store),
            admin: Arc::new(admin),
        }
    }
}
