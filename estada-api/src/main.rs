use estada_api::{app, AppState, AuthConfig};
use estada_store::{app_config::Config, seed, DbClient};
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str =
    "estada_api=debug,estada_core=info,estada_store=info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting Estada front desk on port {}", config.server.port);

    let db = DbClient::new(&config.database.url, config.database.max_connections).await?;
    db.migrate().await?;
    seed::seed(&db.pool, &config.seed).await?;

    let state = AppState::new(
        &db,
        &AuthConfig {
            session_secret: config.auth.session_secret.clone(),
            session_ttl_seconds: config.auth.session_ttl_seconds,
        },
    );
    state
        .sessions
        .spawn_sweeper(Duration::from_secs(config.auth.session_sweep_seconds.max(1)));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
