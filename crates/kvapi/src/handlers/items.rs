use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use kvapi_core::attribute::{item_from_json, item_to_json};
use kvapi_core::storage::StoreError;

use crate::{handlers::AppError, services::ItemService};

const DEFAULT_LIST_LIMIT: i32 = 25;
const MAX_LIST_LIMIT: i32 = 1000;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i32>,
}

impl ListParams {
    fn effective_limit(&self) -> i32 {
        self.limit
            .unwrap_or(DEFAULT_LIST_LIMIT)
            .clamp(1, MAX_LIST_LIMIT)
    }
}

/// List items (GET /items?limit=N).
pub async fn list_items(
    State(service): State<ItemService>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Value>>, AppError> {
    let items = service.list(params.effective_limit()).await?;
    Ok(Json(items.iter().map(item_to_json).collect()))
}

/// Create or replace an item (POST /items).
pub async fn create_item(
    State(service): State<ItemService>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let item = item_from_json(&body).map_err(StoreError::from)?;
    let created = service.create(item).await?;

    tracing::info!(table = service.table_name(), id = ?body.get("id"), "Stored item");

    Ok((StatusCode::CREATED, Json(item_to_json(&created))))
}

/// Get a single item by ID (GET /items/{id}).
pub async fn get_item(
    State(service): State<ItemService>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let item = service.get(&id).await?;
    Ok(Json(item_to_json(&item)))
}

/// Delete an item by ID (DELETE /items/{id}). Deleting an absent item succeeds.
pub async fn delete_item(
    State(service): State<ItemService>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete(&id).await?;

    tracing::info!(table = service.table_name(), %id, "Deleted item");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_limit_defaults_and_clamps() {
        assert_eq!(ListParams { limit: None }.effective_limit(), 25);
        assert_eq!(ListParams { limit: Some(0) }.effective_limit(), 1);
        assert_eq!(ListParams { limit: Some(-5) }.effective_limit(), 1);
        assert_eq!(ListParams { limit: Some(10) }.effective_limit(), 10);
        assert_eq!(ListParams { limit: Some(5000) }.effective_limit(), 1000);
    }
}
