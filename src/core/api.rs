use crate::adapters::{ReqwestTransport, SerdeJsonCodec};
use crate::core::{ConfigProvider, HttpRequest, HttpResponse, HttpTransport, JsonCodec, Navigator};
use crate::domain::model::{Method, RequestOptions};
use crate::utils::error::{ApiError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_AUTH_CHECK_PATH: &str = "/api/me";

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// JSON API client with the session conventions of the web frontend:
/// JSON headers by default, backend `error` messages surfaced as errors,
/// and a redirect to the login page when the session is gone.
pub struct ApiClient<T: HttpTransport, C: JsonCodec = SerdeJsonCodec> {
    transport: T,
    codec: C,
    navigator: Option<Box<dyn Navigator>>,
    login_path: String,
    auth_check_path: String,
    default_headers: BTreeMap<String, String>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        let mut default_headers = BTreeMap::new();
        default_headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

        Self {
            transport,
            codec: SerdeJsonCodec,
            navigator: None,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            auth_check_path: DEFAULT_AUTH_CHECK_PATH.to_string(),
            default_headers,
        }
    }
}

impl ApiClient<ReqwestTransport> {
    pub fn from_config<P: ConfigProvider + ?Sized>(config: &P) -> Result<Self> {
        let transport = ReqwestTransport::from_config(config)?;
        let mut client = Self::new(transport)
            .with_login_path(config.login_path())
            .with_auth_check_path(config.auth_check_path());
        for (name, value) in config.default_headers() {
            client = client.with_default_header(name, value);
        }
        Ok(client)
    }
}

impl<T: HttpTransport, C: JsonCodec> ApiClient<T, C> {
    pub fn with_codec<D: JsonCodec>(self, codec: D) -> ApiClient<T, D> {
        ApiClient {
            transport: self.transport,
            codec,
            navigator: self.navigator,
            login_path: self.login_path,
            auth_check_path: self.auth_check_path,
            default_headers: self.default_headers,
        }
    }

    /// Installs the navigation port. Without one, a 401 never redirects.
    pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Some(Box::new(navigator));
        self
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn with_auth_check_path(mut self, path: impl Into<String>) -> Self {
        self.auth_check_path = path.into();
        self
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        merge_header(&mut self.default_headers, name.into(), value.into());
        self
    }

    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let mut headers = self.default_headers.clone();
        for (name, value) in options.headers {
            merge_header(&mut headers, name, value);
        }

        let request = HttpRequest {
            method: options.method,
            path: path.to_string(),
            headers,
            body: options.body,
        };

        let method = request.method;
        let response = self.transport.send(request).await?;
        tracing::debug!("{} {} -> {}", method, path, response.status);

        if response.status == 401 {
            self.redirect_to_login(path);
            return Err(ApiError::NotAuthenticated);
        }

        if !response.is_ok() {
            return Err(self.error_from_response(&response));
        }

        self.codec.decode(&response.body)
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(path, RequestOptions::new()).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let options = RequestOptions::new()
            .method(Method::Post)
            .body(self.encode_body(body)?);
        self.request(path, options).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let options = RequestOptions::new()
            .method(Method::Put)
            .body(self.encode_body(body)?);
        self.request(path, options).await
    }

    fn encode_body<B: Serialize + ?Sized>(&self, body: &B) -> Result<String> {
        let value = serde_json::to_value(body)?;
        self.codec.encode(&value)
    }

    fn redirect_to_login(&self, path: &str) {
        let Some(navigator) = &self.navigator else {
            return;
        };
        if path.contains(self.auth_check_path.as_str()) {
            return;
        }

        tracing::warn!("Session rejected for {}, redirecting to {}", path, self.login_path);
        navigator.navigate(&self.login_path);
    }

    fn error_from_response(&self, response: &HttpResponse) -> ApiError {
        let details = match self.codec.decode(&response.body) {
            Ok(Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        };

        let message = details
            .get("error")
            .and_then(error_message)
            .unwrap_or_else(|| format!("HTTP {}", response.status));

        ApiError::request(response.status, message)
    }
}

/// Text of a backend `error` field. Empty, null and false values count as absent.
fn error_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null | Value::Bool(false) | Value::String(_) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Inserts a header, replacing any existing entry with the same name in any casing.
fn merge_header(headers: &mut BTreeMap<String, String>, name: String, value: String) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
    headers.insert(name, value);
}
