//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

impl Config {
    /// Create configuration from environment variables
    ///
    /// Level comes from `CONTACT_LOG`, falling back to `RUST_LOG`. Format
    /// comes from `CONTACT_LOG_FORMAT`; unrecognised values keep the default.
    /// `CONTACT_LOG_TIME`, `CONTACT_LOG_SOURCE` and `CONTACT_LOG_COLORS`
    /// toggle display options (`0`/`false` disables).
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = var("CONTACT_LOG").or_else(|| var("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = var("CONTACT_LOG_FORMAT").and_then(|f| f.parse::<Format>().ok()) {
            config.format = format;
        }

        config.display.apply_vars(&var);
        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                ..DisplayConfig::default()
            },
        }
    }
}
