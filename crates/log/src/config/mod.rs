//! Configuration types
//!
//! - `Config`, `Format`: what to log and how to render it
//! - `DisplayConfig`: per-event decorations
//! - `presets`: `from_env`, `development`, `production`

mod presets;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directives (e.g. `"info"`, `"contact_form=debug,reqwest=warn"`)
    pub level: String,

    /// Output format
    pub format: Format,

    /// Display configuration
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            display: DisplayConfig::default(),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable, multi-line
    Pretty,
    /// Single-line
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

impl Format {
    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(LogError::Config(format!(
                "unknown log format '{other}' (expected pretty, compact or json)"
            ))),
        }
    }
}

/// What each event line carries besides the message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use ANSI colors
    pub colors: bool,
    /// Show timestamps
    pub time: bool,
    /// Show target module
    pub target: bool,
    /// Show source location (`file:line`)
    pub source: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            time: true,
            target: true,
            source: cfg!(debug_assertions),
        }
    }
}

impl DisplayConfig {
    fn apply_vars(&mut self, var: &impl Fn(&str) -> Option<String>) {
        let flag = |name: &str| var(name).map(|v| v != "0" && !v.eq_ignore_ascii_case("false"));

        if let Some(on) = flag("CONTACT_LOG_TIME") {
            self.time = on;
        }
        if let Some(on) = flag("CONTACT_LOG_SOURCE") {
            self.source = on;
        }
        if let Some(on) = flag("CONTACT_LOG_COLORS") {
            self.colors = on;
        }
    }
}
