#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::api::{DEFAULT_AUTH_CHECK_PATH, DEFAULT_LOGIN_PATH};
use crate::core::{ConfigProvider, CredentialsPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_header_name, validate_positive_number, validate_route_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Resolved client settings, whatever source they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub base_url: String,
    pub login_path: String,
    pub auth_check_path: String,
    pub credentials: CredentialsPolicy,
    pub timeout_seconds: Option<u64>,
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            auth_check_path: DEFAULT_AUTH_CHECK_PATH.to_string(),
            credentials: CredentialsPolicy::default(),
            timeout_seconds: None,
            headers: BTreeMap::new(),
        }
    }
}

impl ConfigProvider for ClientSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn login_path(&self) -> &str {
        &self.login_path
    }

    fn auth_check_path(&self) -> &str {
        &self.auth_check_path
    }

    fn credentials(&self) -> CredentialsPolicy {
        self.credentials
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_route_path("login_path", &self.login_path)?;
        validate_route_path("auth_check_path", &self.auth_check_path)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        for name in self.headers.keys() {
            validate_header_name("headers", name)?;
        }
        Ok(())
    }
}
