use validator::Validate;

use crate::{
    db::{DbPool, tables::EquipmentSaleTable},
    error::{AppError, Result},
    models::equipment_sale::{EquipmentSale, NewEquipmentSale},
};

/// Equipment sale store for database operations
#[derive(Clone)]
pub struct EquipmentSaleStore {
    pool: DbPool,
}

impl EquipmentSaleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_sales(&self) -> Result<Vec<EquipmentSale>> {
        let query = format!(
            "SELECT * FROM {} ORDER BY {}",
            EquipmentSaleTable::TABLE_NAME,
            EquipmentSaleTable::COLUMN_ID
        );

        let rows = sqlx::query_as::<_, EquipmentSale>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::debug!("Loaded {} equipment sales", rows.len());
        Ok(rows)
    }

    pub async fn get_sale_by_id(&self, id: i64) -> Result<EquipmentSale> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ?",
            EquipmentSaleTable::TABLE_NAME,
            EquipmentSaleTable::COLUMN_ID
        );

        sqlx::query_as::<_, EquipmentSale>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound {
                entity: "EquipmentSale",
                id,
            })
    }

    pub async fn create_sale(&self, sale: &NewEquipmentSale) -> Result<EquipmentSale> {
        sale.validate()?;

        let query = format!(
            "INSERT INTO {} ({}, {}, {}, {}, {}) VALUES (?, ?, ?, ?, ?)",
            EquipmentSaleTable::TABLE_NAME,
            EquipmentSaleTable::COLUMN_CLIENTS,
            EquipmentSaleTable::COLUMN_STAFF,
            EquipmentSaleTable::COLUMN_DATE,
            EquipmentSaleTable::COLUMN_QUANTITY,
            EquipmentSaleTable::COLUMN_PRICE,
        );

        let result = sqlx::query(&query)
            .bind(&sale.clients)
            .bind(&sale.staff)
            .bind(sale.date)
            .bind(sale.quantity)
            .bind(sale.price)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.get_sale_by_id(result.last_insert_rowid()).await
    }

    pub async fn update_sale(&self, id: i64, sale: &NewEquipmentSale) -> Result<EquipmentSale> {
        sale.validate()?;

        let query = format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            EquipmentSaleTable::TABLE_NAME,
            EquipmentSaleTable::COLUMN_CLIENTS,
            EquipmentSaleTable::COLUMN_STAFF,
            EquipmentSaleTable::COLUMN_DATE,
            EquipmentSaleTable::COLUMN_QUANTITY,
            EquipmentSaleTable::COLUMN_PRICE,
            EquipmentSaleTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(&sale.clients)
            .bind(&sale.staff)
            .bind(sale.date)
            .bind(sale.quantity)
            .bind(sale.price)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "EquipmentSale",
                id,
            });
        }

        self.get_sale_by_id(id).await
    }

    pub async fn delete_sale(&self, id: i64) -> Result<()> {
        let query = format!(
            "DELETE FROM {} WHERE {} = ?",
            EquipmentSaleTable::TABLE_NAME,
            EquipmentSaleTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "EquipmentSale",
                id,
            });
        }

        Ok(())
    }
}
