use crate::domain::model::{CredentialsPolicy, HttpRequest, HttpResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Page navigation capability. Installing one marks the environment as
/// browser-like for the login redirect.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate(&self, target: &str) {
        self(target)
    }
}

pub trait JsonCodec: Send + Sync {
    fn encode(&self, value: &serde_json::Value) -> Result<String>;
    fn decode(&self, text: &str) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn login_path(&self) -> &str;
    fn auth_check_path(&self) -> &str;
    fn credentials(&self) -> CredentialsPolicy;
    fn timeout_seconds(&self) -> Option<u64>;
    fn default_headers(&self) -> &BTreeMap<String, String>;
}
