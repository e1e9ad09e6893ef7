//! # Catalog Store
//!
//! Owns the `spices` document: the global list of known item types.
//!
//! ## Semantics
//! Append-only ordered list, not a set. Insertion order matters - the
//! registration and billing forms render items in the order admins
//! added them. No rename or remove in scope; a price map may therefore
//! reference items that predate (or postdate) the current catalog.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use spicebill_core::validation::validate_item_name;
use spicebill_core::{CoreError, SpiceList, DEFAULT_SPICES};

use crate::document::DocumentStore;
use crate::error::StoreResult;

/// Document key for the catalog.
pub const CATALOG_KEY: &str = "spices";

/// The catalog manager.
///
/// ## Concurrency
/// The in-memory list is guarded by a `tokio::sync::Mutex` held across
/// the whole mutate-persist sequence, so concurrent `add_item` calls
/// serialize per this document and cannot interleave their saves.
///
/// ## Failure Atomicity
/// Mutations are persist-then-commit: the updated document is written
/// to disk first and the in-memory copy only replaced once the save
/// succeeded. A storage failure leaves both views on the prior version.
#[derive(Debug)]
pub struct Catalog {
    store: Arc<DocumentStore>,
    items: Mutex<SpiceList>,
}

impl Catalog {
    /// Loads the catalog, falling back to the default spice list on
    /// first run.
    pub async fn open(store: Arc<DocumentStore>) -> StoreResult<Self> {
        let items: SpiceList = store
            .load(CATALOG_KEY, || {
                DEFAULT_SPICES.iter().map(|s| s.to_string()).collect()
            })
            .await?;
        info!(count = items.len(), "catalog loaded");
        Ok(Catalog {
            store,
            items: Mutex::new(items),
        })
    }

    /// Returns the known items in the order they were added.
    pub async fn items(&self) -> SpiceList {
        self.items.lock().await.clone()
    }

    /// Appends a new item and persists the catalog.
    ///
    /// ## Errors
    /// - `InvalidInput` for a blank name
    /// - `DuplicateItem` when the exact (case-sensitive) name is already
    ///   listed
    /// - `StorageFailure` if the save fails; the catalog is unchanged
    pub async fn add_item(&self, name: &str) -> StoreResult<()> {
        validate_item_name(name).map_err(CoreError::from)?;

        let mut items = self.items.lock().await;
        if items.iter().any(|item| item == name) {
            return Err(CoreError::DuplicateItem(name.to_string()).into());
        }

        let mut updated = items.clone();
        updated.push(name.to_string());
        self.store.save(CATALOG_KEY, &updated).await?;

        info!(item = name, "spice added to catalog");
        *items = updated;
        Ok(())
    }
}
