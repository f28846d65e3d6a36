use crate::domain::model::{CredentialsPolicy, HttpRequest, HttpResponse, Method};
use crate::domain::ports::{ConfigProvider, HttpTransport};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Production transport over reqwest.
///
/// Holds two clients: one wired to a cookie jar for requests that carry
/// credentials, one without for everything else. Which one a request uses
/// follows the [`CredentialsPolicy`].
pub struct ReqwestTransport {
    base_url: Url,
    credentials: CredentialsPolicy,
    session_client: Client,
    anonymous_client: Client,
}

impl ReqwestTransport {
    pub fn new(base_url: &str, credentials: CredentialsPolicy) -> Result<Self> {
        Self::with_timeout(base_url, credentials, None)
    }

    pub fn with_timeout(
        base_url: &str,
        credentials: CredentialsPolicy,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;

        let jar = Arc::new(Jar::default());
        let mut session = Client::builder().cookie_provider(jar);
        let mut anonymous = Client::builder();
        if let Some(timeout) = timeout {
            session = session.timeout(timeout);
            anonymous = anonymous.timeout(timeout);
        }

        Ok(Self {
            base_url,
            credentials,
            session_client: session.build()?,
            anonymous_client: anonymous.build()?,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::with_timeout(
            config.base_url(),
            config.credentials(),
            config.timeout_seconds().map(Duration::from_secs),
        )
    }

    /// Resolves a request path against the base URL. Absolute URLs pass through.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    pub fn attaches_credentials(&self, url: &Url) -> bool {
        match self.credentials {
            CredentialsPolicy::SameOrigin => url.origin() == self.base_url.origin(),
            CredentialsPolicy::Include => true,
            CredentialsPolicy::Omit => false,
        }
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = self.resolve(&request.path)?;
        let client = if self.attaches_credentials(&url) {
            &self.session_client
        } else {
            &self.anonymous_client
        };

        tracing::debug!("Sending {} {}", request.method, url);
        let mut builder = client.request(to_reqwest_method(request.method), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
