/// # Service Health Check Endpoint
///
/// Liveness probe returning `{"status":"up"}` with **200 OK**.
pub mod health;

/// # Host Details Endpoint
///
/// Returns the local time, host name and the variant's message. Fails with
/// **500** only when the host name cannot be read.
pub mod details;
