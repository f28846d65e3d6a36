pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{toml_config::TomlConfig, ClientSettings};

pub use crate::adapters::{MemoryNavigator, ReqwestTransport, SerdeJsonCodec};
pub use crate::core::api::ApiClient;
pub use crate::core::format::{format_currency, format_date, CalendarDate};
pub use crate::core::{CredentialsPolicy, Method, RequestOptions};
pub use crate::utils::error::{ApiError, Result};
