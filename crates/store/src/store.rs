//! Key-value store seam.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string key-value storage.
///
/// Mirrors the browser localStorage contract: `get` returns the raw payload
/// for a key if one was ever written, `set` overwrites unconditionally.
/// Payloads are opaque to the store; serialization is the caller's concern.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
