use validator::Validate;

use crate::{
    db::{DbPool, tables::EquipmentTable},
    error::{AppError, Result},
    models::equipment::{Equipment, NewEquipment},
};

/// Equipment store for database operations
#[derive(Clone)]
pub struct EquipmentStore {
    pool: DbPool,
}

impl EquipmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_equipment(&self) -> Result<Vec<Equipment>> {
        let query = format!(
            "SELECT * FROM {} ORDER BY {}",
            EquipmentTable::TABLE_NAME,
            EquipmentTable::COLUMN_ID
        );

        let rows = sqlx::query_as::<_, Equipment>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::debug!("Loaded {} equipment rows", rows.len());
        Ok(rows)
    }

    pub async fn get_equipment_by_id(&self, id: i64) -> Result<Equipment> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ?",
            EquipmentTable::TABLE_NAME,
            EquipmentTable::COLUMN_ID
        );

        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound {
                entity: "Equipment",
                id,
            })
    }

    pub async fn create_equipment(&self, equipment: &NewEquipment) -> Result<Equipment> {
        equipment.validate()?;

        let query = format!(
            "INSERT INTO {} ({}, {}, {}, {}) VALUES (?, ?, ?, ?)",
            EquipmentTable::TABLE_NAME,
            EquipmentTable::COLUMN_MANUFACTURER,
            EquipmentTable::COLUMN_COLOR,
            EquipmentTable::COLUMN_QUANTITY,
            EquipmentTable::COLUMN_PRICE,
        );

        let result = sqlx::query(&query)
            .bind(&equipment.manufacturer)
            .bind(&equipment.color)
            .bind(equipment.quantity)
            .bind(equipment.price)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.get_equipment_by_id(result.last_insert_rowid()).await
    }

    /// Full-row update; this is how stock quantity changes are recorded.
    pub async fn update_equipment(&self, id: i64, equipment: &NewEquipment) -> Result<Equipment> {
        equipment.validate()?;

        let query = format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            EquipmentTable::TABLE_NAME,
            EquipmentTable::COLUMN_MANUFACTURER,
            EquipmentTable::COLUMN_COLOR,
            EquipmentTable::COLUMN_QUANTITY,
            EquipmentTable::COLUMN_PRICE,
            EquipmentTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(&equipment.manufacturer)
            .bind(&equipment.color)
            .bind(equipment.quantity)
            .bind(equipment.price)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "Equipment",
                id,
            });
        }

        self.get_equipment_by_id(id).await
    }

    pub async fn delete_equipment(&self, id: i64) -> Result<()> {
        let query = format!(
            "DELETE FROM {} WHERE {} = ?",
            EquipmentTable::TABLE_NAME,
            EquipmentTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "Equipment",
                id,
            });
        }

        Ok(())
    }
}
