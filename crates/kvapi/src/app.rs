use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::health,
        items::{create_item, delete_item, get_item, list_items},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Item routes are mounted only when the state carries an item service.
pub fn create_app(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/health", get(health))
        .with_state(state.health);

    if let Some(items) = state.items {
        let item_routes = Router::new()
            .route("/items", get(list_items).post(create_item))
            .route("/items/{id}", get(get_item).delete(delete_item))
            .with_state(items);
        app = app.merge(item_routes);
    }

    app.layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.request_timeout,
        ))
}
