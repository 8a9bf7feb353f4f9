use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kvapi_core::storage::{store_error_to_status_code, StoreError};

/// Handler error type that wraps `anyhow::Error`.
///
/// Store errors keep their mapped status code; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(store_error) = self.0.downcast_ref::<StoreError>() {
            let code = store_error_to_status_code(store_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, status = status_code.as_u16(), "request failed");
        } else {
            tracing::debug!(error = %self.0, status = status_code.as_u16(), "request rejected");
        }

        (
            status_code,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
