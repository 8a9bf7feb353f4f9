//! In-memory store backend.
//!
//! Keeps every table in a `HashMap` behind `Arc<RwLock<_>>`. Nothing is
//! persisted. Used by tests and by local runs with `STORE_BACKEND=memory`.
//!
//! # Example
//!
//! ```rust,ignore
//! use kvapi::storage::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! store.put_item("example-items", item).await?;
//! ```

mod store;

pub use store::InMemoryStore;
