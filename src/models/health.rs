use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Liveness payload returned by `GET /api/v1/healthz`.
///
/// ## Example JSON
/// ```json
/// { "status": "up" }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "up")]
    pub status: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "up".to_string(),
        }
    }
}
