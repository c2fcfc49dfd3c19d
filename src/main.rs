use anyhow::Result;
use tracing_subscriber::EnvFilter;

use equipment_trade_server::{AppState, config::Config, db, routes};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "equipment_trade_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let pool = db::init_db_pool(&config.database_url, config.max_pool_size).await?;
    let app = routes::app(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    tracing::info!("Starting server on {}", config.server_addr());
    axum::serve(listener, app).await?;

    Ok(())
}
