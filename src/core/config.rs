//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and asset layout are not part of this struct; they come from
//! `[package.metadata.leptos]` via `leptos::config::get_configuration`.

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive
    /// Example: info,aisaas_landing=debug
    pub log_filter: String,

    /// Whether responses are brotli/gzip compressed
    /// Disabled with APP_COMPRESSION=0 or APP_COMPRESSION=false
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("RUST_LOG")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let compression = lookup("APP_COMPRESSION")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Self {
            log_filter,
            compression,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
        }
    }
}

/// Anything other than an explicit "off" value enables the flag
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
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

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
        assert!(config.compression);
    }

    #[test]
    fn test_config_reads_log_filter() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "debug,tower_http=trace")]));
        assert_eq!(config.log_filter, "debug,tower_http=trace");
    }

    #[test]
    fn test_config_blank_log_filter_uses_default() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "   ")]));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_config_compression_disabled() {
        for off in ["0", "false", "FALSE", " no ", "off"] {
            let config = Config::from_lookup(lookup_from(&[("APP_COMPRESSION", off)]));
            assert!(!config.compression, "{off:?} should disable compression");
        }
    }

    #[test]
    fn test_config_compression_enabled() {
        for on in ["1", "true", "yes", ""] {
            let config = Config::from_lookup(lookup_from(&[("APP_COMPRESSION", on)]));
            assert!(config.compression, "{on:?} should keep compression on");
        }
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        assert!(!config.log_filter.is_empty());
    }
}
