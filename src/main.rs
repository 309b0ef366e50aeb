use host_details_api::config::{AppConfig, DEFAULT_LOG_FILTER};
use host_details_api::error::AppError;
use host_details_api::server::Server;
use tracing_subscriber::EnvFilter;

/// Host Details Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Liveness probe: `GET /api/v1/healthz`
/// - Host details: `GET /api/v1/details` (or `/api/v1/info` with `INFO_VARIANT=info`)
/// - Swagger UI: `/swagger-ui/`, OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `0.0.0.0:5000` unless `BIND_HOST` / `PORT` say otherwise
/// - Environment variables loaded from `.env` file (if present)
/// - Log filter taken from `RUST_LOG`, defaulting to `info`
#[actix_web::main]
async fn main() -> Result<(), AppError> {
    dotenv::dotenv().ok();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "bad configuration"))?;

    Server::new(config).run().await
}
