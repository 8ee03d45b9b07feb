//! Grid state: mount-time reconciliation and category filtering.

use thiserror::Error;

use towelshop_catalog::{ALL_CATEGORIES, Catalog, Product, default_catalog, sanitize};
use towelshop_store::{KeyValueStore, StoreError};

/// Fixed storage key for the persisted catalog snapshot.
pub const SNAPSHOT_KEY: &str = "towelProducts";

#[derive(Debug, Error)]
pub enum GridError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The persisted snapshot exists but is not a valid serialized catalog.
    ///
    /// There is no recovery path; callers that want treat-as-absent behavior
    /// can clear the key and mount again.
    #[error("persisted snapshot is corrupt: {0}")]
    CorruptSnapshot(#[from] serde_json::Error),
}

/// The product grid component.
///
/// Holds the reconciled catalog and the selected-category value. The store
/// is only touched during [`ProductGrid::mount`]; selection changes are pure
/// state transitions.
#[derive(Debug)]
pub struct ProductGrid {
    products: Catalog,
    selected: String,
}

impl ProductGrid {
    /// Initialize the grid, reconciling defaults against the persisted
    /// snapshot. Runs exactly once per component instance.
    ///
    /// - No snapshot: adopt the defaults and persist them.
    /// - Clean snapshot: adopt it verbatim (no per-record merge, no schema
    ///   validation beyond the retired-name check).
    /// - Snapshot carrying a retired name: discard it wholesale, overwrite
    ///   the snapshot with the defaults, adopt the defaults.
    pub fn mount<S: KeyValueStore>(store: &S) -> Result<Self, GridError> {
        let products = match store.get(SNAPSHOT_KEY)? {
            None => {
                let defaults = default_catalog();
                store.set(SNAPSHOT_KEY, &serde_json::to_string(&defaults)?)?;
                tracing::info!(products = defaults.len(), "no snapshot found, persisted defaults");
                defaults
            }
            Some(raw) => {
                let candidate: Catalog = serde_json::from_str(&raw)?;
                let reset = candidate.contains_retired();
                let catalog = sanitize(candidate);
                if reset {
                    store.set(SNAPSHOT_KEY, &serde_json::to_string(&catalog)?)?;
                    tracing::warn!("snapshot contained retired products, reset to defaults");
                } else {
                    tracing::info!(products = catalog.len(), "adopted persisted snapshot");
                }
                catalog
            }
        };

        Ok(Self {
            products,
            selected: ALL_CATEGORIES.to_string(),
        })
    }

    pub fn products(&self) -> &Catalog {
        &self.products
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Selectable category labels: `"All"` plus each distinct category in
    /// order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        self.products.categories()
    }

    /// Set the selected category. No validation against the derived list;
    /// an unknown label simply yields an empty visible subset.
    pub fn select(&mut self, label: impl Into<String>) {
        self.selected = label.into();
        tracing::debug!(selected = %self.selected, "category selected");
    }

    /// The records matching the current selection, in catalog order.
    pub fn visible(&self) -> Vec<&Product> {
        self.products.filter(&self.selected)
    }
}
