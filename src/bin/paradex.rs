//! Paradex CLI
//!
//! 환경 변수(`ETHEREUM_PRIVATE_KEY`, `PARADEX_NETWORK`, `ORDER_PARAMS`)를 읽어
//! 계정 파생 후 인증/온보딩/주문 요청을 수행합니다.
//! 성공 시 stdout에 JSON, 실패 시 stderr에 `{error, type, traceback}`를 쓰고 1로 종료합니다.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paradex_signer::settings::parse_order_params;
use paradex_signer::{
    derive, normalize, ClientConfig, HttpClient, Network, ParadexClient, ParadexError, RawOrder,
    Settings, Transport,
};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Paradex account and order CLI
#[derive(Parser)]
#[command(name = "paradex")]
#[command(about = "Derive a Paradex account from an Ethereum key and sign venue requests")]
#[command(version)]
struct Cli {
    /// Network override (testnet | prod)
    #[arg(long, global = true)]
    network: Option<Network>,

    /// Request timeout in milliseconds
    #[arg(long, global = true, default_value_t = paradex_signer::client::DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Obtain a JWT for the derived account
    Auth,
    /// Register the derived account with the venue
    Onboard,
    /// Normalize, sign and submit an order
    PlaceOrder {
        /// Order parameters JSON (defaults to ORDER_PARAMS)
        #[arg(long)]
        params: Option<String>,
    },
    /// List open orders
    OpenOrders {
        #[arg(long)]
        market: Option<String>,
    },
    /// Cancel an open order
    CancelOrder {
        /// Venue order id
        order_id: String,
    },
}

fn init_logging() {
    let filter = std::env::var("LOGGING_LEVEL")
        .ok()
        .and_then(|level| EnvFilter::try_new(level.to_lowercase()).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<serde_json::Value> {
    let mut settings = Settings::from_env().context("failed to load settings")?;
    if let Some(network) = cli.network {
        settings.network = network;
    }

    // 잘못된 주문 파라미터는 네트워크 요청 전에 거른다
    let order = match &cli.command {
        Commands::PlaceOrder { params } => Some(validated_order(params.as_deref(), &settings)?),
        _ => None,
    };

    let config = ClientConfig::new().with_timeout(cli.timeout_ms);
    let client: ParadexClient<HttpClient> = ParadexClient::from_network(settings.network, &config)?;
    tracing::debug!(base_url = client.transport().base_url(), "using paradex api");

    let identity = settings.identity()?;
    let chain = client
        .fetch_chain_config()
        .await
        .context("failed to fetch system config")?;
    let account = derive(&identity, &chain)?;
    tracing::info!(
        network = %settings.network,
        account = %account.address_hex(),
        "derived paradex account"
    );

    let output = match cli.command {
        Commands::Auth => {
            let token = client.authenticate(&account, &chain).await?;
            serde_json::to_value(&token)?
        },
        Commands::Onboard => {
            let response = client.onboard(&identity, &account, &chain).await?;
            json!({
                "status": "onboarded",
                "ethereum_account": identity.address(),
                "account_address": account.address_hex(),
                "response": response,
            })
        },
        Commands::PlaceOrder { .. } => {
            let raw = order.context("order parameters were not validated")?;
            let token = client.authenticate(&account, &chain).await?;
            client.place_order(&token, &account, &chain, &raw).await?
        },
        Commands::OpenOrders { market } => {
            let token = client.authenticate(&account, &chain).await?;
            let orders = client.fetch_open_orders(&token, market.as_deref()).await?;
            json!({ "results": orders })
        },
        Commands::CancelOrder { order_id } => {
            let token = client.authenticate(&account, &chain).await?;
            let response = client.cancel_order(&token, &order_id).await?;
            json!({ "order_id": order_id, "cancelled": true, "response": response })
        },
    };

    Ok(output)
}

/// `--params` 또는 `ORDER_PARAMS`를 읽고 정규화해 본다
fn validated_order(params: Option<&str>, settings: &Settings) -> Result<RawOrder> {
    let raw = match params {
        Some(params) => parse_order_params(params)?,
        None => settings.raw_order()?,
    };
    normalize(&raw)?;
    Ok(raw)
}

fn error_payload(err: &anyhow::Error) -> serde_json::Value {
    let kind = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ParadexError>())
        .map(ParadexError::kind)
        .unwrap_or("Error");

    json!({
        "error": err.to_string(),
        "type": kind,
        "traceback": format!("{err:?}"),
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&output).unwrap_or_else(|_| output.to_string())
            );
            ExitCode::SUCCESS
        },
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("{}", error_payload(&err));
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn settings(order_params: Option<&str>) -> Settings {
        Settings::from_lookup(|key| match key {
            "ETHEREUM_PRIVATE_KEY" => Some(KEY.to_string()),
            "ORDER_PARAMS" => order_params.map(str::to_string),
            _ => None,
        })
        .unwrap()
    }

    fn kind(err: &anyhow::Error) -> &'static str {
        err.downcast_ref::<ParadexError>().map(ParadexError::kind).unwrap_or("Error")
    }

    #[test]
    fn test_validated_order_from_params() {
        let raw = validated_order(
            Some(r#"{"market":"BTC-USD-PERP","side":"BUY","type":"LIMIT","size":"0.1","price":"65000"}"#),
            &settings(None),
        )
        .unwrap();
        assert_eq!(raw.market.as_deref(), Some("BTC-USD-PERP"));
    }

    #[test]
    fn test_validated_order_falls_back_to_env() {
        let env = r#"{"market":"ETH-USD-PERP","side":"SELL","type":"MARKET","size":"1"}"#;
        assert!(validated_order(None, &settings(Some(env))).is_ok());
    }

    #[test]
    fn test_bad_order_rejected_without_network() {
        let bad_side = r#"{"market":"BTC-USD-PERP","side":"HOLD","type":"LIMIT","size":"0.1","price":"1"}"#;
        let err = validated_order(Some(bad_side), &settings(None)).unwrap_err();
        assert_eq!(kind(&err), "InvalidOrderInput");

        let tiny = r#"{"market":"BTC-USD-PERP","side":"BUY","type":"MARKET","size":"0.0001"}"#;
        let err = validated_order(Some(tiny), &settings(None)).unwrap_err();
        assert_eq!(kind(&err), "InvalidOrderInput");

        let err = validated_order(None, &settings(None)).unwrap_err();
        assert_eq!(kind(&err), "ConfigurationError");
    }
}
