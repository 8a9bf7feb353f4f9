//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use kvapi_core::attribute::Item;
use kvapi_core::storage::{ItemStore, Result, StoreError};

/// In-memory storage backend.
///
/// Tables are created on first write. Items are identified by their key
/// attributes (`id` unless configured otherwise); numeric key values match by
/// decimal equivalence, the way DynamoDB compares them.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<String, Vec<Item>>>>,
    key_attributes: Arc<[String]>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates an empty store keyed by `id`.
    pub fn new() -> Self {
        Self::with_key_attributes(["id"])
    }

    /// Creates an empty store whose primary key is made of `names`.
    pub fn with_key_attributes<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
            key_attributes: names.into_iter().map(Into::<String>::into).collect(),
        }
    }

    /// Extracts the primary key of `item`, failing if any key attribute is missing.
    fn key_of(&self, item: &Item) -> Result<Item> {
        self.key_attributes
            .iter()
            .map(|name| {
                item.get(name)
                    .map(|value| (name.clone(), value.clone()))
                    .ok_or_else(|| {
                        StoreError::Validation(format!("Missing key attribute '{name}'"))
                    })
            })
            .collect()
    }

    /// Validates that `key` names exactly the key attributes.
    fn check_key(&self, key: &Item) -> Result<()> {
        if key.len() != self.key_attributes.len() {
            return Err(StoreError::Validation(format!(
                "Key must contain exactly {:?}",
                self.key_attributes
            )));
        }
        self.key_of(key).map(|_| ())
    }
}

fn matches_key(item: &Item, key: &Item) -> bool {
    key.iter()
        .all(|(name, value)| item.get(name).is_some_and(|v| v.equivalent(value)))
}

#[async_trait]
impl ItemStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn put_item(&self, table: &str, item: Item) -> Result<()> {
        let key = self.key_of(&item)?;
        let mut tables = self.tables.write().await;
        let items = tables.entry(table.to_string()).or_default();

        match items.iter_mut().find(|existing| matches_key(existing, &key)) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        Ok(())
    }

    async fn get_item(&self, table: &str, key: Item) -> Result<Item> {
        self.check_key(&key)?;
        let tables = self.tables.read().await;

        tables
            .get(table)
            .and_then(|items| items.iter().find(|item| matches_key(item, &key)))
            .cloned()
            .ok_or_else(|| StoreError::not_found(table, &key))
    }

    async fn delete_item(&self, table: &str, key: Item) -> Result<()> {
        self.check_key(&key)?;
        let mut tables = self.tables.write().await;

        if let Some(items) = tables.get_mut(table) {
            items.retain(|item| !matches_key(item, &key));
        }
        Ok(())
    }

    async fn scan(&self, table: &str, limit: i32) -> Result<Vec<Item>> {
        let limit = usize::try_from(limit)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| StoreError::Validation(format!("Invalid scan limit: {limit}")))?;
        let tables = self.tables.read().await;

        Ok(tables
            .get(table)
            .map(|items| items.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn health(&self) -> Result<()> {
        Ok(())
    }
}
