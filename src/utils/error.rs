use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Non-ok response. Displays exactly the server-supplied message, or
    /// `HTTP <status>` when the body carried none.
    #[error("{message}")]
    Request { status: u16, message: String },

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ApiError {
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        ApiError::Request {
            status,
            message: message.into(),
        }
    }

    /// HTTP status behind the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotAuthenticated => Some(401),
            ApiError::Request { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated)
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidConfigValueError { .. }
                | ApiError::TomlError(_)
                | ApiError::UrlError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::NotAuthenticated => "Your session has expired, please sign in again".to_string(),
            ApiError::Request { .. } => self.to_string(),
            ApiError::Parse(_) => format!("The server sent an unreadable response: {}", self),
            ApiError::Transport(e) if e.is_timeout() => "The server did not answer in time".to_string(),
            ApiError::Transport(e) if e.is_connect() => "Could not connect to the server".to_string(),
            ApiError::Transport(_) => format!("Network error: {}", self),
            _ if self.is_config_error() => format!("Invalid configuration: {}", self),
            _ => self.to_string(),
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::NotAuthenticated => 4,
            ApiError::Request { .. } => 1,
            ApiError::Parse(_) | ApiError::Transport(_) => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_displays_message_only() {
        let err = ApiError::request(400, "Insufficient balance");
        assert_eq!(err.to_string(), "Insufficient balance");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_not_authenticated_message() {
        let err = ApiError::NotAuthenticated;
        assert_eq!(err.to_string(), "Not authenticated");
        assert!(err.is_auth_error());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let inner = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let expected = inner.to_string();
        let err = ApiError::from(inner);
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_config_errors_are_classified() {
        let err = ApiError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert!(err.is_config_error());
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }
}
