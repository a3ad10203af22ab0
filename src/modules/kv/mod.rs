//! Small key-value persistence used for per-user settings.
//!
//! Values are JSON documents. `FileKeyValueStore` keeps everything in one
//! JSON object on disk; `MemoryKeyValueStore` is for tests and for running
//! without a settings file.

mod file_store;
mod memory_store;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;

#[derive(Debug, Error)]
pub enum KvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, KvError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), KvError>;

    /// Returns whether the key existed
    async fn remove(&self, key: &str) -> Result<bool, KvError>;
}
