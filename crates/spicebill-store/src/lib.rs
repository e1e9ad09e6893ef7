//! # spicebill-store: Document Persistence for Spicebill
//!
//! This crate provides persistence for the Spicebill system: three JSON
//! documents on flat files, one store object per document.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Spicebill Data Flow                               │
//! │                                                                         │
//! │  Gateway handler (record_invoice)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  spicebill-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌──────────────────┐  ┌────────────────┐  │   │
//! │  │   │   Catalog    │  │ CustomerRegistry │  │ PaymentLedger  │  │   │
//! │  │   │  (spices)    │  │ (customer_data)  │  │  (payments)    │  │   │
//! │  │   └──────┬───────┘  └────────┬─────────┘  └───────┬────────┘  │   │
//! │  │          └─────────────┬─────┴────────────────────┘           │   │
//! │  │                        ▼                                       │   │
//! │  │               ┌─────────────────┐                              │   │
//! │  │               │  DocumentStore  │  atomic load/save            │   │
//! │  │               └─────────────────┘                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data dir>/customer_data.json, spices.json, payments.json             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`document`] - Generic whole-document load/save with atomic replacement
//! - [`catalog`] - The global item list
//! - [`customers`] - Customer identity and per-customer price maps
//! - [`payments`] - The append-only invoice ledger
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spicebill_store::Store;
//!
//! // Open all three stores (loads each document once)
//! let store = Store::open("./data").await?;
//!
//! // Use the individual stores
//! let customer = store.customers().get("Ravi Stores").await?;
//! let history = store.payments().history("Ravi Stores").await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod customers;
pub mod document;
pub mod error;
pub mod payments;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use customers::CustomerRegistry;
pub use document::DocumentStore;
pub use error::{StoreError, StoreResult};
pub use payments::{PaymentLedger, PaymentSummary};

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

/// All three stores over one data directory.
///
/// ## Why a Facade?
/// The stores share a `DocumentStore` and are always opened together at
/// process start (the documents are loaded exactly once; afterwards the
/// stores are the source of truth and every mutation writes through).
#[derive(Debug)]
pub struct Store {
    catalog: Catalog,
    customers: CustomerRegistry,
    payments: PaymentLedger,
}

impl Store {
    /// Opens every store over `dir`, loading each document (or its
    /// default) once.
    pub async fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        info!(dir = %dir.display(), "opening document stores");
        let docs = Arc::new(DocumentStore::new(dir));

        Ok(Store {
            catalog: Catalog::open(Arc::clone(&docs)).await?,
            customers: CustomerRegistry::open(Arc::clone(&docs)).await?,
            payments: PaymentLedger::open(docs).await?,
        })
    }

    /// The catalog manager (`spices` document).
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The customer registry (`customer_data` document).
    pub fn customers(&self) -> &CustomerRegistry {
        &self.customers
    }

    /// The payment ledger (`payments` document).
    pub fn payments(&self) -> &PaymentLedger {
        &self.payments
    }
}
