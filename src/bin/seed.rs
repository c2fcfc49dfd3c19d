use anyhow::Result;
use chrono::Local;
use tracing_subscriber::EnvFilter;

use equipment_trade_server::{AppState, config::Config, db, seed::seed_sample_data};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "equipment_trade_server=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let pool = db::init_db_pool(&config.database_url, config.max_pool_size).await?;

    seed_sample_data(&AppState::new(pool), Local::now().date_naive()).await?;

    Ok(())
}
