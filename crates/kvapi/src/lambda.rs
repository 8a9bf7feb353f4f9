//! AWS Lambda entrypoint.
//!
//! Serves the same router as the HTTP server, adapted to API Gateway / function
//! URL events by `lambda_http`.

use kvapi::{app::create_app, config::Config, state::AppState, telemetry};
use lambda_http::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    telemetry::init(config.is_dev())?;

    let state = AppState::from_config(&config).await;
    let app = create_app(state);

    tracing::info!("starting lambda handler");
    lambda_http::run(app).await
}
