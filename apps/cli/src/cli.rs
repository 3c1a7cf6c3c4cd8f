//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use contact_form::FieldKey;
use contact_log::Format;

#[derive(Debug, Parser)]
#[command(name = "contact", version)]
#[command(about = "Fill in and send a validated contact form")]
pub struct Cli {
    /// Config file (defaults to ./contact.toml when present)
    #[arg(long, global = true, env = "CONTACT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directives, e.g. `debug` or `contact_form=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_parser = parse_format)]
    pub log_format: Option<Format>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one field's rules against a value
    Check {
        /// Field name (first_name, last_name, phone, email)
        field: FieldKey,
        /// Value to evaluate
        value: String,
    },
    /// Submit the form once with every value given as a flag
    Submit(SubmitArgs),
    /// Fill the form interactively (`:q` quits)
    Fill {
        /// Log the message instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// First name
    #[arg(long, default_value = "")]
    pub first_name: String,
    /// Last name
    #[arg(long, default_value = "")]
    pub last_name: String,
    /// Phone number
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,
    /// Log the message instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl SubmitArgs {
    /// Values paired with their field, in display order.
    pub fn values(&self) -> [(FieldKey, &str); 4] {
        [
            (FieldKey::FirstName, &self.first_name),
            (FieldKey::LastName, &self.last_name),
            (FieldKey::Email, &self.email),
            (FieldKey::Phone, &self.phone),
        ]
    }
}

impl Command {
    /// Whether this invocation asked for a dry run.
    pub fn dry_run(&self) -> bool {
        match self {
            Self::Check { .. } => false,
            Self::Submit(args) => args.dry_run,
            Self::Fill { dry_run } => *dry_run,
        }
    }
}

fn parse_format(s: &str) -> Result<Format, String> {
    s.parse().map_err(|e: contact_log::LogError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_parses_field_aliases() {
        let cli = Cli::try_parse_from(["contact", "check", "first-name", "Al"]).unwrap();
        match cli.command {
            Command::Check { field, value } => {
                assert_eq!(field, FieldKey::FirstName);
                assert_eq!(value, "Al");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "contact",
            "fill",
            "--dry-run",
            "--log-format",
            "JSON",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_format, Some(Format::Json));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.command.dry_run());
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(Cli::try_parse_from(["contact", "check", "age", "3"]).is_err());
    }
}
