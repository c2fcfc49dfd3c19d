use validator::Validate;

use crate::{
    db::{DbPool, tables::ClientTable},
    error::{AppError, Result},
    models::client::{Client, NewClient},
};

/// Client store for database operations
#[derive(Clone)]
pub struct ClientStore {
    pool: DbPool,
}

impl ClientStore {
    /// Create a new ClientStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a list of all clients in insertion order
    pub async fn get_all_clients(&self) -> Result<Vec<Client>> {
        let query = format!(
            "SELECT * FROM {} ORDER BY {}",
            ClientTable::TABLE_NAME,
            ClientTable::COLUMN_ID
        );

        let clients = sqlx::query_as::<_, Client>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::debug!("Loaded {} clients", clients.len());
        Ok(clients)
    }

    /// Get a client by ID
    pub async fn get_client_by_id(&self, id: i64) -> Result<Client> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ?",
            ClientTable::TABLE_NAME,
            ClientTable::COLUMN_ID
        );

        let client = sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound {
                entity: "Client",
                id,
            })?;

        Ok(client)
    }

    /// Insert a new client and return the stored row
    pub async fn create_client(&self, client: &NewClient) -> Result<Client> {
        client.validate()?;

        let query = format!(
            "INSERT INTO {} ({}, {}, {}, {}, {}, {}, {}) VALUES (?, ?, ?, ?, ?, ?, ?)",
            ClientTable::TABLE_NAME,
            ClientTable::COLUMN_SURNAME,
            ClientTable::COLUMN_NAME,
            ClientTable::COLUMN_PATRONYMIC,
            ClientTable::COLUMN_PASSPORT,
            ClientTable::COLUMN_ADDRESS,
            ClientTable::COLUMN_EMAIL,
            ClientTable::COLUMN_PHONE
        );

        let result = sqlx::query(&query)
            .bind(&client.surname)
            .bind(&client.name)
            .bind(&client.patronymic)
            .bind(&client.passport)
            .bind(&client.address)
            .bind(&client.email)
            .bind(&client.phone)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.get_client_by_id(result.last_insert_rowid()).await
    }

    /// Replace every field of an existing client
    pub async fn update_client(&self, id: i64, client: &NewClient) -> Result<Client> {
        client.validate()?;

        let query = format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            ClientTable::TABLE_NAME,
            ClientTable::COLUMN_SURNAME,
            ClientTable::COLUMN_NAME,
            ClientTable::COLUMN_PATRONYMIC,
            ClientTable::COLUMN_PASSPORT,
            ClientTable::COLUMN_ADDRESS,
            ClientTable::COLUMN_EMAIL,
            ClientTable::COLUMN_PHONE,
            ClientTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(&client.surname)
            .bind(&client.name)
            .bind(&client.patronymic)
            .bind(&client.passport)
            .bind(&client.address)
            .bind(&client.email)
            .bind(&client.phone)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "Client",
                id,
            });
        }

        self.get_client_by_id(id).await
    }

    /// Delete a client by ID. The client's offers go with it.
    pub async fn delete_client(&self, id: i64) -> Result<()> {
        let query = format!(
            "DELETE FROM {} WHERE {} = ?",
            ClientTable::TABLE_NAME,
            ClientTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "Client",
                id,
            });
        }

        tracing::info!("Deleted client {}", id);
        Ok(())
    }
}
