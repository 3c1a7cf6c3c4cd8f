//! Layered configuration
//!
//! Precedence, lowest first:
//! 1. built-in defaults (log settings seeded from `CONTACT_LOG*` / `RUST_LOG`)
//! 2. `contact.toml` in the working directory, or the `--config` file
//! 3. `CONTACT_*` environment variables, nested with `__`
//!    (`CONTACT_EMAILJS__SERVICE_ID`, `CONTACT_LOG__FORMAT`)
//! 4. command-line flags

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use contact_form::EmailJsConfig;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

const DEFAULT_CONFIG_FILE: &str = "contact.toml";

/// Keys owned by `contact_log::Config::from_env`.
const LOG_ENV_KEYS: &[&str] = &["log", "log_format", "log_time", "log_source", "log_colors"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: contact_log::Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emailjs: Option<EmailJsConfig>,
    pub dry_run: bool,
}

impl AppConfig {
    /// Resolves every layer for this invocation.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = config_file(cli.config.as_deref())?;
        let mut figment = Self::figment(file.as_deref());

        if let Some(level) = &cli.log_level {
            figment = figment.merge(Serialized::default("log.level", level));
        }
        if let Some(format) = cli.log_format {
            figment = figment.merge(Serialized::default("log.format", format));
        }
        if cli.command.dry_run() {
            figment = figment.merge(Serialized::default("dry_run", true));
        }

        figment.extract().context("invalid configuration")
    }

    /// Defaults, file and environment layers.
    pub fn figment(file: Option<&Path>) -> Figment {
        let defaults = Self {
            log: contact_log::Config::from_env(),
            ..Self::default()
        };
        let mut figment = Figment::from(Serialized::defaults(defaults));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(
            Env::prefixed("CONTACT_")
                .ignore(LOG_ENV_KEYS)
                .ignore(&["config"])
                .split("__"),
        )
    }

    /// Settings for the real sender, or an error pointing at what to set.
    pub fn emailjs(&self) -> Result<&EmailJsConfig> {
        match &self.emailjs {
            Some(config) => Ok(config),
            None => bail!(
                "EmailJS is not configured: set [emailjs] in {DEFAULT_CONFIG_FILE} or \
                 CONTACT_EMAILJS__SERVICE_ID, CONTACT_EMAILJS__TEMPLATE_ID and \
                 CONTACT_EMAILJS__PUBLIC_KEY, or pass --dry-run"
            ),
        }
    }
}

fn config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if !path.is_file() => {
            bail!("config file {} does not exist", path.display())
        }
        Some(path) => Ok(Some(path.to_path_buf())),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            Ok(default.is_file().then_some(default))
        }
    }
}
