use crate::config::AppConfig;
use crate::error::AppError;
use crate::openapi::{self, OPENAPI_JSON_PATH};
use crate::routes::RouteTable;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use utoipa_swagger_ui::SwaggerUi;

/// # HTTP Server
///
/// Built once at startup from [`AppConfig`] and then run. Owns the route
/// table and the OpenAPI document; every actix worker gets its own clone.
#[derive(Debug, Clone)]
pub struct Server {
    config: AppConfig,
    routes: RouteTable,
    openapi: utoipa::openapi::OpenApi,
}

impl Server {
    pub fn new(config: AppConfig) -> Self {
        let routes = RouteTable::new(config.variant);
        let openapi = openapi::document(config.variant);

        Self {
            config,
            routes,
            openapi,
        }
    }

    /// Registers the API routes and the Swagger UI on an actix app.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        self.routes.configure(cfg);
        cfg.service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url(OPENAPI_JSON_PATH, self.openapi.clone()),
        );
    }

    /// Binds the configured address and serves until the process exits.
    ///
    /// # Errors
    /// Returns [`AppError::Bind`] when the address cannot be bound or the
    /// server stops with an I/O error.
    pub async fn run(self) -> Result<(), AppError> {
        let (host, port) = self.config.bind_address();

        for route in self.routes.routes() {
            tracing::debug!(method = %route.method, path = route.path, "route registered");
        }

        let server = HttpServer::new({
            let server = self.clone();
            move || {
                let server = server.clone();
                App::new()
                    .wrap(Logger::default())
                    .configure(move |cfg| server.configure(cfg))
            }
        })
        .bind((host.as_str(), port))
        .map_err(AppError::Bind)?;

        tracing::info!(
            host = %host,
            port,
            variant = self.config.variant.name(),
            "listening"
        );

        server.run().await.map_err(AppError::Bind)
    }
}
