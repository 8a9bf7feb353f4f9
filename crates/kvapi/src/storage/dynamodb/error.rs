//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `kvapi_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::list_tables::ListTablesError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use kvapi_core::storage::StoreError;

/// Map transport-level failures shared by every operation.
///
/// Returns `None` when the request reached DynamoDB and the service answered.
fn map_transport_error<E, R>(err: &SdkError<E, R>, operation: &str) -> Option<StoreError>
where
    E: Debug,
    R: Debug,
{
    match err {
        SdkError::DispatchFailure(failure) => Some(StoreError::ConnectionFailed(format!(
            "{operation}: {failure:?}"
        ))),
        SdkError::TimeoutError(_) => Some(StoreError::Timeout(operation.to_string())),
        SdkError::ConstructionFailure(failure) => Some(StoreError::RequestFailed(format!(
            "{operation} could not be built: {failure:?}"
        ))),
        _ => None,
    }
}

/// DynamoDB rejects malformed requests (a missing key attribute, a key of
/// the wrong type) with `ValidationException`, which has no modeled variant.
fn validation_error<E: ProvideErrorMetadata>(err: &E) -> Option<StoreError> {
    (err.code() == Some("ValidationException")).then(|| {
        StoreError::Validation(err.message().unwrap_or("validation failed").to_string())
    })
}

fn table_not_found(table: &str) -> StoreError {
    StoreError::RequestFailed(format!("Table not found: {table}"))
}

fn throughput_exceeded() -> StoreError {
    StoreError::RequestFailed("Throughput exceeded, please retry".to_string())
}

fn request_limit_exceeded() -> StoreError {
    StoreError::RequestFailed("Request limit exceeded, please retry".to_string())
}

fn internal_server_error() -> StoreError {
    StoreError::RequestFailed("DynamoDB internal server error".to_string())
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table: &str,
) -> StoreError {
    if let Some(mapped) = map_transport_error(&err, "PutItem") {
        return mapped;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => table_not_found(table),
        PutItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        PutItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::RequestFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StoreError::RequestFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => internal_server_error(),
        err => validation_error(&err)
            .unwrap_or_else(|| StoreError::RequestFailed(format!("PutItem failed: {:?}", err))),
    }
}

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    table: &str,
) -> StoreError {
    if let Some(mapped) = map_transport_error(&err, "GetItem") {
        return mapped;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => table_not_found(table),
        GetItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        GetItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        GetItemError::InternalServerError(_) => internal_server_error(),
        err => validation_error(&err)
            .unwrap_or_else(|| StoreError::RequestFailed(format!("GetItem failed: {:?}", err))),
    }
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    table: &str,
) -> StoreError {
    if let Some(mapped) = map_transport_error(&err, "DeleteItem") {
        return mapped;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => table_not_found(table),
        DeleteItemError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        DeleteItemError::RequestLimitExceeded(_) => request_limit_exceeded(),
        DeleteItemError::TransactionConflictException(_) => {
            StoreError::RequestFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => internal_server_error(),
        err => validation_error(&err)
            .unwrap_or_else(|| StoreError::RequestFailed(format!("DeleteItem failed: {:?}", err))),
    }
}

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
    table: &str,
) -> StoreError {
    if let Some(mapped) = map_transport_error(&err, "Scan") {
        return mapped;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => table_not_found(table),
        ScanError::ProvisionedThroughputExceededException(_) => throughput_exceeded(),
        ScanError::RequestLimitExceeded(_) => request_limit_exceeded(),
        ScanError::InternalServerError(_) => internal_server_error(),
        err => validation_error(&err)
            .unwrap_or_else(|| StoreError::RequestFailed(format!("Scan failed: {:?}", err))),
    }
}

/// Map a ListTables SDK error (used by the health check) to StoreError.
pub fn map_list_tables_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ListTablesError, R>,
) -> StoreError {
    if let Some(mapped) = map_transport_error(&err, "ListTables") {
        return mapped;
    }
    match err.into_service_error() {
        ListTablesError::InternalServerError(_) => internal_server_error(),
        err => StoreError::ConnectionFailed(format!("ListTables failed: {:?}", err)),
    }
}
