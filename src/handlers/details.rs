use crate::config::InfoVariant;
use crate::error::AppError;
use crate::models::DetailsResponse;
use actix_web::{HttpResponse, web};

/// # Host Details Endpoint
///
/// Reports the local time and host name of the process that served the
/// request, along with the configured variant's message.
///
/// Served at `/api/v1/details` or `/api/v1/info` depending on the configured
/// [`InfoVariant`]; the OpenAPI document is rewritten to match at startup.
///
/// ## Responses
/// - **200 OK**: [`DetailsResponse`]
/// - **500 Internal Server Error**: host name lookup failed
#[utoipa::path(
    get,
    path = "/api/v1/details",
    responses(
        (status = 200, description = "Current time and host identity", body = DetailsResponse),
        (status = 500, description = "Host name could not be read")
    ),
    tag = "Host Details"
)]
pub async fn details(variant: web::Data<InfoVariant>) -> Result<HttpResponse, AppError> {
    let response = DetailsResponse::capture(*variant.get_ref())?;
    Ok(HttpResponse::Ok().json(response))
}
