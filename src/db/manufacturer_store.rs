use validator::Validate;

use crate::{
    db::{DbPool, tables::ManufacturerTable},
    error::{AppError, Result},
    models::manufacturer::{Manufacturer, NewManufacturer},
};

/// Manufacturer store for database operations
#[derive(Clone)]
pub struct ManufacturerStore {
    pool: DbPool,
}

impl ManufacturerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_manufacturers(&self) -> Result<Vec<Manufacturer>> {
        let query = format!(
            "SELECT * FROM {} ORDER BY {}",
            ManufacturerTable::TABLE_NAME,
            ManufacturerTable::COLUMN_ID
        );

        let rows = sqlx::query_as::<_, Manufacturer>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::debug!("Loaded {} manufacturers", rows.len());
        Ok(rows)
    }

    pub async fn get_manufacturer_by_id(&self, id: i64) -> Result<Manufacturer> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ?",
            ManufacturerTable::TABLE_NAME,
            ManufacturerTable::COLUMN_ID
        );

        sqlx::query_as::<_, Manufacturer>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound {
                entity: "Manufacturer",
                id,
            })
    }

    pub async fn create_manufacturer(
        &self,
        manufacturer: &NewManufacturer,
    ) -> Result<Manufacturer> {
        manufacturer.validate()?;

        let query = format!(
            "INSERT INTO {} ({}, {}, {}, {}) VALUES (?, ?, ?, ?)",
            ManufacturerTable::TABLE_NAME,
            ManufacturerTable::COLUMN_TITLE,
            ManufacturerTable::COLUMN_PHONE_NUMBER,
            ManufacturerTable::COLUMN_MAIL,
            ManufacturerTable::COLUMN_PRICE,
        );

        let result = sqlx::query(&query)
            .bind(&manufacturer.title)
            .bind(manufacturer.phone_number)
            .bind(&manufacturer.mail)
            .bind(manufacturer.price)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.get_manufacturer_by_id(result.last_insert_rowid()).await
    }

    pub async fn update_manufacturer(
        &self,
        id: i64,
        manufacturer: &NewManufacturer,
    ) -> Result<Manufacturer> {
        manufacturer.validate()?;

        let query = format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            ManufacturerTable::TABLE_NAME,
            ManufacturerTable::COLUMN_TITLE,
            ManufacturerTable::COLUMN_PHONE_NUMBER,
            ManufacturerTable::COLUMN_MAIL,
            ManufacturerTable::COLUMN_PRICE,
            ManufacturerTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(&manufacturer.title)
            .bind(manufacturer.phone_number)
            .bind(&manufacturer.mail)
            .bind(manufacturer.price)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "Manufacturer",
                id,
            });
        }

        self.get_manufacturer_by_id(id).await
    }

    pub async fn delete_manufacturer(&self, id: i64) -> Result<()> {
        let query = format!(
            "DELETE FROM {} WHERE {} = ?",
            ManufacturerTable::TABLE_NAME,
            ManufacturerTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "Manufacturer",
                id,
            });
        }

        Ok(())
    }
}
