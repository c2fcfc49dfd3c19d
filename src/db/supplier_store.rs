use validator::Validate;

use crate::{
    db::{DbPool, tables::SupplierTable},
    error::{AppError, Result},
    models::supplier::{Supplier, NewSupplier},
};

/// Supplier store for database operations
#[derive(Clone)]
pub struct SupplierStore {
    pool: DbPool,
}

impl SupplierStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_suppliers(&self) -> Result<Vec<Supplier>> {
        let query = format!(
            "SELECT * FROM {} ORDER BY {}",
            SupplierTable::TABLE_NAME,
            SupplierTable::COLUMN_ID
        );

        let rows = sqlx::query_as::<_, Supplier>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::debug!("Loaded {} suppliers", rows.len());
        Ok(rows)
    }

    pub async fn get_supplier_by_id(&self, id: i64) -> Result<Supplier> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ?",
            SupplierTable::TABLE_NAME,
            SupplierTable::COLUMN_ID
        );

        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound {
                entity: "Supplier",
                id,
            })
    }

    pub async fn create_supplier(&self, supplier: &NewSupplier) -> Result<Supplier> {
        supplier.validate()?;

        let query = format!(
            "INSERT INTO {} ({}, {}, {}, {}) VALUES (?, ?, ?, ?)",
            SupplierTable::TABLE_NAME,
            SupplierTable::COLUMN_TITLE,
            SupplierTable::COLUMN_PHONE_NUMBER,
            SupplierTable::COLUMN_ADDRESS,
            SupplierTable::COLUMN_PRICE,
        );

        let result = sqlx::query(&query)
            .bind(&supplier.title)
            .bind(supplier.phone_number)
            .bind(&supplier.address)
            .bind(supplier.price)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.get_supplier_by_id(result.last_insert_rowid()).await
    }

    pub async fn update_supplier(&self, id: i64, supplier: &NewSupplier) -> Result<Supplier> {
        supplier.validate()?;

        let query = format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            SupplierTable::TABLE_NAME,
            SupplierTable::COLUMN_TITLE,
            SupplierTable::COLUMN_PHONE_NUMBER,
            SupplierTable::COLUMN_ADDRESS,
            SupplierTable::COLUMN_PRICE,
            SupplierTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(&supplier.title)
            .bind(supplier.phone_number)
            .bind(&supplier.address)
            .bind(supplier.price)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "Supplier",
                id,
            });
        }

        self.get_supplier_by_id(id).await
    }

    pub async fn delete_supplier(&self, id: i64) -> Result<()> {
        let query = format!(
            "DELETE FROM {} WHERE {} = ?",
            SupplierTable::TABLE_NAME,
            SupplierTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "Supplier",
                id,
            });
        }

        Ok(())
    }
}
