use allowance_client::config::cli::Command;
use allowance_client::utils::{logger, validation::Validate};
use allowance_client::{format_currency, format_date, ApiClient, ApiError, CliConfig, ReqwestTransport};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let (path, result) = match &config.command {
        Command::Currency { amount } => {
            println!("{}", format_currency(*amount));
            return Ok(());
        }
        Command::Date { input } => {
            println!("{}", format_date(input.as_str()));
            return Ok(());
        }
        Command::Get { path } => {
            let result = run(&config, |client| async move { client.get(path).await }).await;
            (path, result)
        }
        Command::Post { path, body } => {
            let body: serde_json::Value = serde_json::from_str(body)?;
            (path, run(&config, |client| async move { client.post(path, &body).await }).await)
        }
        Command::Put { path, body } => {
            let body: serde_json::Value = serde_json::from_str(body)?;
            (path, run(&config, |client| async move { client.put(path, &body).await }).await)
        }
    };

    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ {} failed: {}", path, e);
            eprintln!("❌ {}", e.user_friendly_message());
            if let ApiError::NotAuthenticated = e {
                if let Ok(settings) = config.settings() {
                    eprintln!(
                        "💡 Sign in at {}{}",
                        settings.base_url.trim_end_matches('/'),
                        settings.login_path
                    );
                }
            }
            std::process::exit(e.exit_code());
        }
    }
}

async fn run<F, Fut>(config: &CliConfig, call: F) -> allowance_client::Result<serde_json::Value>
where
    F: FnOnce(ApiClient<ReqwestTransport>) -> Fut,
    Fut: std::future::Future<Output = allowance_client::Result<serde_json::Value>>,
{
    let settings = config.settings()?;
    settings.validate()?;
    let client = ApiClient::from_config(&settings)?;
    call(client).await
}
