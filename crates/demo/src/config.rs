//! Walkthrough configuration loaded from environment variables.

/// Walkthrough configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `DEMO_LOCALE`: display locale (default: `"en-US"`)
/// - `DEMO_CURRENCY`: currency code for the amounts (default: `"USD"`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `DEMO_LOG_JSON`: emit JSON log lines when `1` or `true` (default: off)
#[derive(Debug, Clone)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            locale: lookup("DEMO_LOCALE").unwrap_or(defaults.locale),
            currency: lookup("DEMO_CURRENCY").unwrap_or(defaults.currency),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_json: lookup("DEMO_LOG_JSON")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
                .unwrap_or(defaults.log_json),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: domain::DEFAULT_LOCALE.to_string(),
            currency: "USD".to_string(),
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let config = Config::from_lookup(|key| match key {
            "DEMO_LOCALE" => Some("de-DE".to_string()),
            "DEMO_CURRENCY" => Some("EUR".to_string()),
            "DEMO_LOG_JSON" => Some("TRUE".to_string()),
            _ => None,
        });
        assert_eq!(config.locale, "de-DE");
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.log_level, "info");
        assert!(config.log_json);
    }
}
