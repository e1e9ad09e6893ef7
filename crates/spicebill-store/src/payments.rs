//! # Payment Ledger
//!
//! Owns the `payments` document: the append-only per-customer history
//! of invoices.
//!
//! ## Append-Only Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Payment Ledger                                    │
//! │                                                                         │
//! │  record(customer, invoice) ──► ledger[customer].push(invoice)          │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                            persist whole book                          │
//! │                                                                         │
//! │  THE SOLE MUTATION PATH. No update, no delete, no void - a recorded    │
//! │  invoice is history. history() returns append order (which is not      │
//! │  necessarily date order: back-dated invoices land at the end).         │
//! │                                                                         │
//! │  summary(customer) = Σ received, Σ due over history - recomputed on    │
//! │  demand, never cached, so it can never disagree with the records.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use spicebill_core::{Invoice, Money, PaymentBook};

use crate::document::DocumentStore;
use crate::error::StoreResult;

/// Document key for the payment book.
pub const PAYMENTS_KEY: &str = "payments";

/// Aggregated payment history for one customer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    /// Σ `received` over the customer's history.
    pub total_received: Money,

    /// Σ `due` over the customer's history. Negative means the customer
    /// is net in credit.
    pub total_due: Money,
}

/// The payment ledger.
///
/// Concurrency and failure atomicity follow the other stores: one mutex
/// for the document, persist-then-commit on `record`.
#[derive(Debug)]
pub struct PaymentLedger {
    store: Arc<DocumentStore>,
    book: Mutex<PaymentBook>,
}

impl PaymentLedger {
    /// Loads the payment book; a fresh installation starts empty.
    pub async fn open(store: Arc<DocumentStore>) -> StoreResult<Self> {
        let book: PaymentBook = store.load(PAYMENTS_KEY, PaymentBook::new).await?;
        info!(customers = book.len(), "payment ledger loaded");
        Ok(PaymentLedger {
            store,
            book: Mutex::new(book),
        })
    }

    /// Appends an invoice to a customer's history and persists.
    ///
    /// Creates the customer's sequence on first record. This is the only
    /// way the ledger changes.
    pub async fn record(&self, customer: &str, invoice: Invoice) -> StoreResult<()> {
        let mut book = self.book.lock().await;

        let mut updated = book.clone();
        updated
            .entry(customer.to_string())
            .or_default()
            .push(invoice.clone());
        self.store.save(PAYMENTS_KEY, &updated).await?;

        info!(
            customer,
            total = %invoice.total,
            received = %invoice.received,
            due = %invoice.due,
            "invoice recorded"
        );
        *book = updated;
        Ok(())
    }

    /// Returns a customer's invoices in append order.
    ///
    /// Empty for a customer with no records - unlike the registry, the
    /// ledger does not distinguish "unknown" from "no history yet".
    pub async fn history(&self, customer: &str) -> Vec<Invoice> {
        self.book
            .lock()
            .await
            .get(customer)
            .cloned()
            .unwrap_or_default()
    }

    /// Aggregates a customer's history. Pure fold over the records.
    pub async fn summary(&self, customer: &str) -> PaymentSummary {
        let book = self.book.lock().await;
        let history = book.get(customer).map(Vec::as_slice).unwrap_or(&[]);
        PaymentSummary {
            total_received: history.iter().map(|inv| inv.received).sum(),
            total_due: history.iter().map(|inv| inv.due).sum(),
        }
    }

    /// Returns the customers that have at least one recorded invoice,
    /// in first-record order. Drives the history-view selector.
    pub async fn customers(&self) -> Vec<String> {
        self.book.lock().await.keys().cloned().collect()
    }
}
