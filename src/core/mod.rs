pub mod api;
pub mod format;

pub use crate::domain::model::{CredentialsPolicy, HttpRequest, HttpResponse, Method, RequestOptions};
pub use crate::domain::ports::{ConfigProvider, HttpTransport, JsonCodec, Navigator};
pub use crate::utils::error::Result;
