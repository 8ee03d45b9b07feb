//! `towelshop-store` — client-local key-value persistence.
//!
//! The grid component takes the store as an injected dependency so tests can
//! run against the in-memory implementation.

pub mod file;
pub mod in_memory;
pub mod store;

pub use file::FileStore;
pub use in_memory::InMemoryStore;
pub use store::{KeyValueStore, StoreError};
