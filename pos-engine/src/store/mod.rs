//! Key-value persistence
//!
//! Every collection (orders, staff, menu, session user) is one JSON value
//! under one key. Writers replace the whole value; the last write wins.
//!
//! | Backend | Use |
//! |---------|-----|
//! | [`MemoryStore`] | tests, throwaway terminals |
//! | [`RedbStore`] | on-disk store for a terminal |

mod memory;
mod disk;

pub use memory::MemoryStore;
pub use disk::RedbStore;

use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error for key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Raw byte-level key-value store
pub trait KvStore: Send + Sync {
    /// Read the raw JSON bytes stored under `key`
    fn get_raw(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Replace the value under `key`
    fn set_raw(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Delete `key`; missing keys are not an error
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// All keys currently present, sorted
    fn keys(&self) -> StoreResult<Vec<String>>;
}

/// Shared handle passed to the order book and session
pub type SharedStore = Arc<dyn KvStore>;

/// Typed JSON access on top of [`KvStore`]
pub trait KvStoreExt: KvStore {
    /// Read and decode the value under `key`
    fn get<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.get_raw(key)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| StoreError::Serialization {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Read `key`, falling back to `T::default()` when absent
    fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> StoreResult<T> {
        Ok(self.get(key)?.unwrap_or_default())
    }

    /// Encode and write `value` under `key`
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.set_raw(key, &bytes)
    }
}

impl<S: KvStore + ?Sized> KvStoreExt for S {}
