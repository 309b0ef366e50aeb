use crate::config::InfoVariant;
use crate::error::AppError;
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `strftime` pattern of the `time` field, e.g. `03:07:09PM on October 19, 2026`.
pub const TIME_FORMAT: &str = "%I:%M:%S%p on %B %d, %Y";

/// # Host Details Response
///
/// Runtime identity of the serving process. Built fresh for every request.
///
/// ## Fields
/// - `time`: local wall-clock time, formatted with [`TIME_FORMAT`]
/// - `hostname`: network host name of the machine
/// - `message`: fixed literal of the configured [`InfoVariant`]
/// - `deployed`: only present for [`InfoVariant::Info`]
///
/// ## Example JSON
/// ```json
/// {
///   "time": "03:07:09PM on October 19, 2026",
///   "hostname": "web-7d9c6b5f4-x2x8q",
///   "message": "You are doing well!! :)",
///   "deployed": "on k8s"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct DetailsResponse {
    #[schema(example = "03:07:09PM on October 19, 2026")]
    pub time: String,
    pub hostname: String,
    #[schema(example = "You are doing well! :)")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "on k8s")]
    pub deployed: Option<String>,
}

impl DetailsResponse {
    /// Captures the current local time and host name.
    ///
    /// # Errors
    /// Fails when the host name cannot be read or is not valid UTF-8.
    pub fn capture(variant: InfoVariant) -> Result<Self, AppError> {
        let hostname = current_hostname()?;
        Ok(Self::at(variant, &Local::now(), hostname))
    }

    pub fn at<Tz>(variant: InfoVariant, now: &DateTime<Tz>, hostname: String) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            time: format_time(now),
            hostname,
            message: variant.message().to_string(),
            deployed: variant.deployed().map(str::to_string),
        }
    }
}

pub fn format_time<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format(TIME_FORMAT).to_string()
}

pub fn current_hostname() -> Result<String, AppError> {
    hostname::get()
        .map_err(AppError::Hostname)?
        .into_string()
        .map_err(|raw| AppError::HostnameEncoding(raw.to_string_lossy().into_owned()))
}
