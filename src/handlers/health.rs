use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder};

/// # Service Health Check Endpoint
///
/// Liveness probe for orchestrators. Always answers while the process can
/// serve HTTP.
///
/// ## Response
///
/// - **200 OK**: `{"status":"up"}`
#[utoipa::path(
    get,
    path = "/api/v1/healthz",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health Check"
)]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::up())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web};

    #[actix_web::test]
    async fn test_healthz() {
        // Arrange
        let app = test::init_service(
            App::new().service(web::resource("/healthz").route(web::get().to(healthz))),
        )
        .await;
        let req = test::TestRequest::get().uri("/healthz").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let body = test::read_body(resp).await;
        assert_eq!(body, r#"{"status":"up"}"#);
    }
}
