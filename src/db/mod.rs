use std::{str::FromStr, time::Duration};

use anyhow::Result;
use sqlx::{
    Pool, Sqlite,
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

pub mod client_store;
pub mod equipment_sale_store;
pub mod equipment_store;
pub mod manufacturer_store;
pub mod offer_store;
pub mod staff_store;
pub mod supplier_store;
pub mod tables;

pub use client_store::ClientStore;
pub use equipment_sale_store::EquipmentSaleStore;
pub use equipment_store::EquipmentStore;
pub use manufacturer_store::ManufacturerStore;
pub use offer_store::OfferStore;
pub use staff_store::StaffStore;
pub use supplier_store::SupplierStore;

pub type DbPool = Pool<Sqlite>;

/// Initialize the database connection pool
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    // Create the database if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", database_url);
        Sqlite::create_database(database_url).await?;
    }

    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await?;

    setup_database(&pool).await?;
    tracing::info!("Database ready at {}", database_url);

    Ok(pool)
}

/// In-memory database with the full schema.
///
/// An in-memory SQLite database lives as long as its connection, so the pool
/// holds exactly one connection and never recycles it.
pub async fn init_memory_pool() -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    setup_database(&pool).await?;

    Ok(pool)
}

/// Set up the database schema
async fn setup_database(pool: &DbPool) -> Result<()> {
    for statement in tables::schema() {
        sqlx::query(&statement).execute(pool).await?;
    }

    Ok(())
}
