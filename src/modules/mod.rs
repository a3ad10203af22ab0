//! Modules layer - Infrastructure components shared by the features
//!
//! Contains the in-memory order store and the key-value settings store.

pub mod kv;
pub mod store;
