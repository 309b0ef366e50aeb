use crate::error::AppError;
use std::env;
use std::str::FromStr;

/// Interface the server binds to when `BIND_HOST` is unset.
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Port the server listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// # Info Endpoint Variant
///
/// The service is deployed in one of two flavours that differ only in the path
/// of the info endpoint and the literals it returns.
///
/// | Variant   | Path              | `message`                 | `deployed` |
/// |-----------|-------------------|---------------------------|------------|
/// | `details` | `/api/v1/details` | `You are doing well! :)`  | absent     |
/// | `info`    | `/api/v1/info`    | `You are doing well!! :)` | `on k8s`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoVariant {
    #[default]
    Details,
    Info,
}

impl InfoVariant {
    pub fn path(self) -> &'static str {
        match self {
            InfoVariant::Details => "/api/v1/details",
            InfoVariant::Info => "/api/v1/info",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            InfoVariant::Details => "You are doing well! :)",
            InfoVariant::Info => "You are doing well!! :)",
        }
    }

    pub fn deployed(self) -> Option<&'static str> {
        match self {
            InfoVariant::Details => None,
            InfoVariant::Info => Some("on k8s"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InfoVariant::Details => "details",
            InfoVariant::Info => "info",
        }
    }
}

impl FromStr for InfoVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "details" => Ok(InfoVariant::Details),
            "info" => Ok(InfoVariant::Info),
            other => Err(other.to_string()),
        }
    }
}

/// # Application Configuration
///
/// Read from the process environment. `main` loads an optional `.env` file
/// with `dotenv` before calling [`AppConfig::from_env`].
///
/// ## Variables
/// - `BIND_HOST`: interface to bind (default `0.0.0.0`)
/// - `PORT`: TCP port (default `5000`)
/// - `INFO_VARIANT`: `details` or `info` (default `details`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub variant: InfoVariant,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            variant: InfoVariant::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, so callers other
    /// than the process environment (tests, mostly) can supply values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("BIND_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| AppError::Config {
                key: "PORT",
                value: port.clone(),
            })?;
        }

        if let Some(variant) = lookup("INFO_VARIANT") {
            config.variant = variant.parse().map_err(|_| AppError::Config {
                key: "INFO_VARIANT",
                value: variant.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.variant, InfoVariant::Details);
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 5000));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BIND_HOST", "127.0.0.1"),
            ("PORT", " 8080 "),
            ("INFO_VARIANT", "INFO"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.variant, InfoVariant::Info);
    }

    #[test]
    fn test_blank_host_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup_from(&[("BIND_HOST", "  ")])).unwrap();
        assert_eq!(config.host, DEFAULT_BIND_HOST);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();

        match err {
            AppError::Config { key, value } => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_port_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("PORT", "70000")]));
        assert!(matches!(result, Err(AppError::Config { key: "PORT", .. })));
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("INFO_VARIANT", "status")]));
        assert!(matches!(
            result,
            Err(AppError::Config {
                key: "INFO_VARIANT",
                ..
            })
        ));
    }

    #[test]
    fn test_variant_literals() {
        assert_eq!(InfoVariant::Details.path(), "/api/v1/details");
        assert_eq!(InfoVariant::Details.message(), "You are doing well! :)");
        assert_eq!(InfoVariant::Details.deployed(), None);

        assert_eq!(InfoVariant::Info.path(), "/api/v1/info");
        assert_eq!(InfoVariant::Info.message(), "You are doing well!! :)");
        assert_eq!(InfoVariant::Info.deployed(), Some("on k8s"));
    }

    #[test]
    fn test_variant_name_parses_back() {
        for variant in [InfoVariant::Details, InfoVariant::Info] {
            assert_eq!(variant.name().parse::<InfoVariant>(), Ok(variant));
        }
    }
}
