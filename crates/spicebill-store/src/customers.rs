//! # Customer Registry
//!
//! Owns the `customer_data` document: customer identity, address, and
//! each customer's private price map.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Customer Registry                                   │
//! │                                                                         │
//! │  Registration form ──► register(name, address, prices)                 │
//! │                             │  DuplicateCustomer if name taken         │
//! │                             ▼                                           │
//! │  Admin price edit  ──► set_prices(name, batch) ── one persist for      │
//! │                             │                      the whole batch     │
//! │                             ▼                                           │
//! │  Billing form      ──► get(name) ──► Customer { prices } ──► core      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use spicebill_core::validation::{validate_address, validate_customer_name, validate_unit_price};
use spicebill_core::{CoreError, Customer, CustomerBook, CustomerRecord, Money, PriceMap};

use crate::document::DocumentStore;
use crate::error::StoreResult;

/// Document key for the customer book.
pub const CUSTOMERS_KEY: &str = "customer_data";

/// The customer registry.
///
/// Concurrency and failure atomicity follow the catalog: one mutex per
/// document, persist-then-commit mutations.
#[derive(Debug)]
pub struct CustomerRegistry {
    store: Arc<DocumentStore>,
    book: Mutex<CustomerBook>,
}

impl CustomerRegistry {
    /// Loads the customer book; a fresh installation starts empty.
    pub async fn open(store: Arc<DocumentStore>) -> StoreResult<Self> {
        let book: CustomerBook = store.load(CUSTOMERS_KEY, CustomerBook::new).await?;
        info!(count = book.len(), "customer registry loaded");
        Ok(CustomerRegistry {
            store,
            book: Mutex::new(book),
        })
    }

    /// Returns customer names in registration order.
    pub async fn names(&self) -> Vec<String> {
        self.book.lock().await.keys().cloned().collect()
    }

    /// Looks up one customer.
    pub async fn get(&self, name: &str) -> StoreResult<Customer> {
        let book = self.book.lock().await;
        let record = book
            .get(name)
            .ok_or_else(|| CoreError::CustomerNotFound(name.to_string()))?;
        Ok(Customer {
            name: name.to_string(),
            address: record.address.clone(),
            prices: record.spices.clone(),
        })
    }

    /// Registers a new customer with an initial price map and persists.
    ///
    /// ## Errors
    /// - `InvalidInput` for a blank name or address, or a negative
    ///   initial price
    /// - `DuplicateCustomer` when the name is already registered - the
    ///   failed call changes nothing, on disk or in memory
    pub async fn register(
        &self,
        name: &str,
        address: &str,
        initial_prices: PriceMap,
    ) -> StoreResult<()> {
        validate_customer_name(name).map_err(CoreError::from)?;
        validate_address(address).map_err(CoreError::from)?;
        for price in initial_prices.values() {
            validate_unit_price(*price).map_err(CoreError::from)?;
        }

        let mut book = self.book.lock().await;
        if book.contains_key(name) {
            return Err(CoreError::DuplicateCustomer(name.to_string()).into());
        }

        let mut updated = book.clone();
        updated.insert(
            name.to_string(),
            CustomerRecord {
                address: address.to_string(),
                spices: initial_prices,
            },
        );
        self.store.save(CUSTOMERS_KEY, &updated).await?;

        info!(customer = name, "customer registered");
        *book = updated;
        Ok(())
    }

    /// Upserts a single unit price for a customer and persists.
    ///
    /// For editing many prices at once prefer [`set_prices`] - the save
    /// rewrites the whole document, so batching avoids redundant writes.
    ///
    /// [`set_prices`]: CustomerRegistry::set_prices
    pub async fn set_price(&self, name: &str, item: &str, price: Money) -> StoreResult<()> {
        let mut single = PriceMap::new();
        single.insert(item.to_string(), price);
        self.set_prices(name, single).await
    }

    /// Upserts a batch of unit prices for a customer with one persist.
    ///
    /// ## Errors
    /// - `NotFound` for an unknown customer
    /// - `InvalidInput` for any negative price - the whole batch is
    ///   rejected and every stored price stays unchanged
    ///
    /// The batch may price items that are not in the global catalog;
    /// the registry does not cross-check (no cascading rules).
    pub async fn set_prices(&self, name: &str, prices: PriceMap) -> StoreResult<()> {
        for price in prices.values() {
            validate_unit_price(*price).map_err(CoreError::from)?;
        }

        let mut book = self.book.lock().await;
        let mut updated = book.clone();
        let record = updated
            .get_mut(name)
            .ok_or_else(|| CoreError::CustomerNotFound(name.to_string()))?;
        for (item, price) in prices {
            record.spices.insert(item, price);
        }
        self.store.save(CUSTOMERS_KEY, &updated).await?;

        info!(customer = name, "prices updated");
        *book = updated;
        Ok(())
    }
}
