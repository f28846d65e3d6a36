use crate::config::ClientSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration file.
///
/// ```toml
/// [client]
/// base_url = "https://allowance.example.com"
/// credentials = "same-origin"
/// timeout_seconds = 30
///
/// [client.headers]
/// X-Requested-With = "allowance-client"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientSettings,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.client.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CredentialsPolicy;
    use crate::utils::error::ApiError;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_str(
            r#"
[client]
base_url = "https://allowance.example.com"
login_path = "/signin"
auth_check_path = "/api/session"
credentials = "include"
timeout_seconds = 15

[client.headers]
X-Requested-With = "allowance-client"
"#,
        )
        .unwrap();

        assert_eq!(config.client.base_url, "https://allowance.example.com");
        assert_eq!(config.client.login_path, "/signin");
        assert_eq!(config.client.auth_check_path, "/api/session");
        assert_eq!(config.client.credentials, CredentialsPolicy::Include);
        assert_eq!(config.client.timeout_seconds, Some(15));
        assert_eq!(
            config.client.headers.get("X-Requested-With").map(String::as_str),
            Some("allowance-client")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = TomlConfig::from_str("[client]\nbase_url = \"http://10.0.0.2:8080\"\n").unwrap();
        assert_eq!(config.client.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.client.login_path, "/login");
        assert_eq!(config.client.credentials, CredentialsPolicy::SameOrigin);

        let empty = TomlConfig::from_str("").unwrap();
        assert_eq!(empty.client, ClientSettings::default());
    }

    #[test]
    fn test_unknown_credentials_policy_is_rejected() {
        let err = TomlConfig::from_str("[client]\ncredentials = \"sometimes\"\n").unwrap_err();
        assert!(matches!(err, ApiError::TomlError(_)));
    }
}
