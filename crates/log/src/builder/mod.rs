//! Logger builder implementation

#[macro_use]
mod format;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Returned by a successful [`LoggerBuilder::build`]
///
/// Keep it alive for as long as logging is needed.
#[derive(Debug)]
#[must_use = "dropping the guard right away discards the applied configuration"]
pub struct LoggerGuard {
    config: Config,
}

impl LoggerGuard {
    /// Configuration the subscriber was installed with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Overrides the filter directives.
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Overrides the output format.
    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    /// Parses the filter without installing anything.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// - [`LogError::Filter`] if the level directives do not parse
    /// - [`LogError::AlreadyInitialized`] if a global subscriber exists
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let display = &self.config.display;

        let installed = match self.config.format {
            Format::Pretty => {
                try_install!(filter, create_fmt_layer!(pretty, display), display.time)
            }
            Format::Compact => {
                try_install!(filter, create_fmt_layer!(compact, display), display.time)
            }
            Format::Json => try_install!(filter, create_json_layer!(display), display.time),
        };
        installed.map_err(|_| LogError::AlreadyInitialized)?;

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );
        Ok(LoggerGuard {
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_directive_is_a_filter_error() {
        let err = LoggerBuilder::from_config(Config::default())
            .level("contact_form=loud")
            .build()
            .unwrap_err();
        match err {
            LogError::Filter { filter, .. } => assert_eq!(filter, "contact_form=loud"),
            other => panic!("expected Filter, got {other:?}"),
        }
    }

    #[test]
    fn module_directives_parse() {
        let builder = LoggerBuilder::from_config(Config::default())
            .level("info,contact_form=debug,reqwest=warn");
        assert!(builder.filter().is_ok());
    }
}
