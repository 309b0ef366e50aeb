use crate::config::InfoVariant;
use utoipa::OpenApi;

/// Route the OpenAPI document is served from.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa::path` annotations on the
/// handlers. The host details path is declared as `/api/v1/details`;
/// [`document`] moves it to the configured variant's path.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/healthz`
/// - Host Details: `GET /api/v1/details` or `GET /api/v1/info`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::healthz,
        crate::handlers::details::details,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::details::DetailsResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Service liveness probe"),
        (name = "Host Details", description = "Time and host identity of the serving process")
    ),
    info(
        description = "Health check and host details of a stateless status service",
        title = "Host Details API",
        version = "0.2.0",
    )
)]
pub struct ApiDoc;

/// Builds the OpenAPI document for the configured variant.
pub fn document(variant: InfoVariant) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let declared = InfoVariant::Details.path();

    if variant.path() != declared {
        if let Some(item) = doc.paths.paths.remove(declared) {
            doc.paths.paths.insert(variant.path().to_string(), item);
        }
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_document_paths() {
        let doc = document(InfoVariant::Details);

        assert!(doc.paths.paths.contains_key("/api/v1/healthz"));
        assert!(doc.paths.paths.contains_key("/api/v1/details"));
        assert!(!doc.paths.paths.contains_key("/api/v1/info"));
    }

    #[test]
    fn test_info_document_paths() {
        let doc = document(InfoVariant::Info);

        assert!(doc.paths.paths.contains_key("/api/v1/healthz"));
        assert!(doc.paths.paths.contains_key("/api/v1/info"));
        assert!(!doc.paths.paths.contains_key("/api/v1/details"));
    }

    #[test]
    fn test_document_declares_schemas() {
        let json = serde_json::to_value(document(InfoVariant::Details)).unwrap();
        let schemas = &json["components"]["schemas"];

        assert!(schemas.get("HealthResponse").is_some());
        assert!(schemas.get("DetailsResponse").is_some());
    }
}
