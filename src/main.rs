mod app;
mod config;
mod dashboard;
mod error;
mod food;
mod goals;
mod lenient;
mod metrics;
mod profile;
mod scoring;
mod state;
mod store;
mod water;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "aura=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // the local offset can only be read reliably before any runtime threads exist
    let config = config::AppConfig::from_env()?;
    tracing::info!(offset = %config.utc_offset, "day boundaries");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(config))
}

async fn run(config: config::AppConfig) -> anyhow::Result<()> {
    let (host, port) = (config.host.clone(), config.port);
    let app_state = state::AppState::init(config).await?;
    app::serve(app::build_app(app_state), &host, port).await
}
