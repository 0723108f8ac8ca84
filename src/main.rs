use crypto_predictor::{app, config::Config, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crypto_predictor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Starting crypto predictor on {} (source: {}, limit: {}, timeout: {}s)",
        config.bind_addr(),
        config.binance_base_url,
        config.candle_limit,
        config.fetch_timeout_secs
    );

    let addr = config.bind_addr();
    let app = app(AppState::with_binance(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Crypto predictor listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
