use allowance_client::utils::validation::Validate;
use allowance_client::{ApiClient, MemoryNavigator, TomlConfig};
use httpmock::prelude::*;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_client_from_toml_config() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/dashboard")
            .header("x-requested-with", "allowance-client")
            .header("content-type", "application/json");
        then.status(200).json_body(json!({"kids": []}));
    });

    let file = write_config(&format!(
        r#"
[client]
base_url = "{}"
timeout_seconds = 5

[client.headers]
X-Requested-With = "allowance-client"
"#,
        server.base_url()
    ));

    let config = TomlConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();
    let client = ApiClient::from_config(&config.client).unwrap();

    let result = client.get("/api/dashboard").await.unwrap();

    api_mock.assert();
    assert_eq!(result, json!({"kids": []}));
}

#[tokio::test]
async fn test_configured_login_and_auth_check_paths() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.path_contains("/api/");
        then.status(401);
    });

    let file = write_config(&format!(
        r#"
[client]
base_url = "{}"
login_path = "/signin"
auth_check_path = "/api/session"
"#,
        server.base_url()
    ));

    let config = TomlConfig::from_file(file.path()).unwrap();
    let navigator = MemoryNavigator::new();
    let client = ApiClient::from_config(&config.client)
        .unwrap()
        .with_navigator(navigator.clone());

    assert!(client.get("/api/session").await.unwrap_err().is_auth_error());
    assert_eq!(navigator.location(), None);

    assert!(client.get("/api/me").await.unwrap_err().is_auth_error());
    assert_eq!(navigator.location().as_deref(), Some("/signin"));
}

#[test]
fn test_invalid_config_file_fails_validation() {
    let file = write_config("[client]\nbase_url = \"ftp://files.example.com\"\n");
    let config = TomlConfig::from_file(file.path()).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.is_config_error());
}
