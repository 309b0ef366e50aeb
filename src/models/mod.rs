/// # Health Status Response
///
/// Body of the liveness probe: `{"status":"up"}`.
pub mod health;

/// # Host Details Response
///
/// Current local time, host name and the variant's static literals. Built
/// fresh on every request, never cached.
pub mod details;

pub use details::DetailsResponse;
pub use health::HealthResponse;
