use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::io;

/// # Application Errors
///
/// Request-time failures (host name lookup) surface as **500 Internal Server
/// Error** through the [`ResponseError`] impl. Startup failures (bad
/// configuration, bind errors) are returned from `main` and end the process.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("host name lookup failed: {0}")]
    Hostname(#[source] io::Error),

    #[error("host name is not valid UTF-8: {0}")]
    HostnameEncoding(String),

    #[error("invalid value for {key}: {value:?}")]
    Config { key: &'static str, value: String },

    #[error("server error: {0}")]
    Bind(#[source] io::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "request failed");

        HttpResponse::build(self.status_code()).json(json!({
            "error": "INTERNAL_ERROR",
            "message": self.to_string()
        }))
    }
}
