//! `towelshop-grid` — the filterable product grid component.
//!
//! Reconciles the catalog against an injected key-value store once at mount,
//! then derives the visible subset from the selected category.

pub mod card;
pub mod grid;

pub use card::ProductCard;
pub use grid::{GridError, ProductGrid, SNAPSHOT_KEY};
