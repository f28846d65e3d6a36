use crate::config::toml_config::TomlConfig;
use crate::config::ClientSettings;
use crate::core::CredentialsPolicy;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "allowance-client")]
#[command(about = "Call the allowance JSON API and format amounts and dates")]
pub struct CliConfig {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Backend base URL, overrides the config file")]
    pub base_url: Option<String>,

    #[arg(long, global = true, value_enum)]
    pub credentials: Option<CredentialsArg>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// GET a path and print the JSON response
    Get { path: String },
    /// POST a JSON body to a path
    Post { path: String, body: String },
    /// PUT a JSON body to a path
    Put { path: String, body: String },
    /// Format an amount as US dollars
    Currency {
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },
    /// Format a date as e.g. "Jan 5, 2024"
    Date { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CredentialsArg {
    SameOrigin,
    Include,
    Omit,
}

impl From<CredentialsArg> for CredentialsPolicy {
    fn from(arg: CredentialsArg) -> Self {
        match arg {
            CredentialsArg::SameOrigin => CredentialsPolicy::SameOrigin,
            CredentialsArg::Include => CredentialsPolicy::Include,
            CredentialsArg::Omit => CredentialsPolicy::Omit,
        }
    }
}

impl CliConfig {
    /// Defaults, then the config file, then command line flags.
    pub fn settings(&self) -> Result<ClientSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.client,
            None => ClientSettings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(credentials) = self.credentials {
            settings.credentials = credentials.into();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = Some(timeout);
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_get_command() {
        let cli = CliConfig::parse_from(["allowance-client", "get", "/api/dashboard", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Get { ref path } if path == "/api/dashboard"));
    }

    #[test]
    fn test_parse_negative_amount() {
        let cli = CliConfig::parse_from(["allowance-client", "currency", "-12.5"]);
        assert!(matches!(cli.command, Command::Currency { amount } if amount == -12.5));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[client]\nbase_url = \"http://from-file:5000\"\ncredentials = \"omit\"\ntimeout_seconds = 10"
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "allowance-client",
            "--config",
            file.path().to_str().unwrap(),
            "--base-url",
            "http://from-flag:5000",
            "get",
            "/api/me",
        ]);
        let settings = cli.settings().unwrap();

        assert_eq!(settings.base_url, "http://from-flag:5000");
        assert_eq!(settings.credentials, CredentialsPolicy::Omit);
        assert_eq!(settings.timeout_seconds, Some(10));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::parse_from([
            "allowance-client",
            "--config",
            "/definitely/not/here.toml",
            "date",
            "2024-01-05",
        ]);
        assert!(cli.settings().is_err());
    }
}
