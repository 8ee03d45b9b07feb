//! `towelshop-catalog` — catalog domain model.
//!
//! This crate contains **pure domain** types and rules for the product
//! catalog (no IO, no storage, no rendering).

pub mod catalog;
pub mod error;
pub mod product;

pub use catalog::{ALL_CATEGORIES, Catalog, RETIRED_NAMES, default_catalog, sanitize};
pub use error::{CatalogError, CatalogResult};
pub use product::{Price, Product, PromoFlags};
