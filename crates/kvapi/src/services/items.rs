//! CRUD façade for the example item resource.

use std::sync::Arc;

use kvapi_core::attribute::{AttributeValue, Item};
use kvapi_core::storage::{ItemStore, Result};

/// Attribute holding the item identifier.
pub const ID_FIELD: &str = "id";

/// Delegates item operations to the store, against a table fixed at construction.
#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
    table: String,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub async fn create(&self, item: Item) -> Result<Item> {
        self.store.put_item(&self.table, item.clone()).await?;
        Ok(item)
    }

    pub async fn get(&self, id: &str) -> Result<Item> {
        self.store.get_item(&self.table, key(id)).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete_item(&self.table, key(id)).await
    }

    pub async fn list(&self, limit: i32) -> Result<Vec<Item>> {
        self.store.scan(&self.table, limit).await
    }
}

fn key(id: &str) -> Item {
    Item::from([(ID_FIELD.to_string(), AttributeValue::S(id.to_string()))])
}

#[cfg(test)]
mod tests {
    use kvapi_core::attribute::items_equivalent;
    use kvapi_core::storage::StoreError;

    use super::*;
    use crate::storage::InMemoryStore;

    fn service() -> ItemService {
        ItemService::new(Arc::new(InMemoryStore::new()), "example-items")
    }

    fn record(id: &str, name: &str) -> Item {
        Item::from([
            ("id".to_string(), AttributeValue::S(id.to_string())),
            ("name".to_string(), AttributeValue::S(name.to_string())),
        ])
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service();
        let item = record("1", "x");

        let created = service.create(item.clone()).await.unwrap();
        assert_eq!(created, item);

        let fetched = service.get("1").await.unwrap();
        assert!(items_equivalent(&fetched, &item));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let result = service().get("missing").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_then_list() {
        let service = service();
        service.create(record("1", "a")).await.unwrap();
        service.create(record("2", "b")).await.unwrap();

        service.delete("1").await.unwrap();

        let items = service.list(10).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].get("id"), Some(&AttributeValue::S("2".to_string())));
    }

    #[tokio::test]
    async fn test_table_name() {
        assert_eq!(service().table_name(), "example-items");
    }
}
