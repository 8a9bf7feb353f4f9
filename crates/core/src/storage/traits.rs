use async_trait::async_trait;

use crate::attribute::Item;

use super::Result;

/// Key-value store holding [`Item`]s in named tables.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Short name used in health messages, e.g. `dynamodb`.
    fn backend_name(&self) -> &'static str;

    /// Stores an item, overwriting any item with the same primary key.
    async fn put_item(&self, table: &str, item: Item) -> Result<()>;

    /// Gets the item matching `key`.
    ///
    /// Fails with [`super::StoreError::NotFound`] when no item matches.
    async fn get_item(&self, table: &str, key: Item) -> Result<Item>;

    /// Removes the item matching `key`. Removing an absent key succeeds.
    async fn delete_item(&self, table: &str, key: Item) -> Result<()>;

    /// Returns up to `limit` items in store-defined order.
    async fn scan(&self, table: &str, limit: i32) -> Result<Vec<Item>>;

    /// Fails if the store is unreachable or misconfigured.
    async fn health(&self) -> Result<()>;
}
