//! DynamoDB store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use kvapi_core::attribute::Item;
use kvapi_core::storage::{ItemStore, Result, StoreError};

use super::conversions::{item_from_dynamo, item_to_dynamo};
use super::error::{
    map_delete_item_error, map_get_item_error, map_list_tables_error, map_put_item_error,
    map_scan_error,
};

/// DynamoDB client configuration.
#[derive(Debug, Clone)]
pub struct DynamoDbOptions {
    /// AWS region.
    pub region: String,
    /// Custom endpoint URL (LocalStack or DynamoDB Local).
    pub endpoint_url: Option<String>,
}

/// DynamoDB-backed item store.
///
/// Wraps an SDK [`Client`], which is a cheap handle over a shared connection
/// pool and safe to use from concurrent requests.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    /// Creates a store from an existing SDK client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a store using the default credential chain, the configured
    /// region and an optional endpoint override.
    pub async fn connect(options: &DynamoDbOptions) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(options.region.clone()));

        if let Some(endpoint) = &options.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        tracing::debug!(
            region = %options.region,
            endpoint = options.endpoint_url.as_deref().unwrap_or("default"),
            "DynamoDB client configured"
        );

        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl ItemStore for DynamoDbStore {
    fn backend_name(&self) -> &'static str {
        "dynamodb"
    }

    async fn put_item(&self, table: &str, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item_to_dynamo(item)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, table))?;

        Ok(())
    }

    async fn get_item(&self, table: &str, key: Item) -> Result<Item> {
        let result = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(item_to_dynamo(key.clone())))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, table))?;

        match result.item {
            Some(item) => Ok(item_from_dynamo(item)?),
            None => Err(StoreError::not_found(table, &key)),
        }
    }

    async fn delete_item(&self, table: &str, key: Item) -> Result<()> {
        self.client
            .delete_item()
            .table_name(table)
            .set_key(Some(item_to_dynamo(key)))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, table))?;

        Ok(())
    }

    async fn scan(&self, table: &str, limit: i32) -> Result<Vec<Item>> {
        let result = self
            .client
            .scan()
            .table_name(table)
            .limit(limit)
            .send()
            .await
            .map_err(|e| map_scan_error(e, table))?;

        let items = result.items.unwrap_or_default();
        items
            .into_iter()
            .map(|item| item_from_dynamo(item).map_err(StoreError::from))
            .collect()
    }

    async fn health(&self) -> Result<()> {
        self.client
            .list_tables()
            .limit(1)
            .send()
            .await
            .map_err(map_list_tables_error)?;

        Ok(())
    }
}
