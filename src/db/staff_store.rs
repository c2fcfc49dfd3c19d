use validator::Validate;

use crate::{
    db::{DbPool, tables::StaffTable},
    error::{AppError, Result},
    models::staff::{Staff, NewStaff},
};

/// Staff store for database operations
#[derive(Clone)]
pub struct StaffStore {
    pool: DbPool,
}

impl StaffStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_staff(&self) -> Result<Vec<Staff>> {
        let query = format!(
            "SELECT * FROM {} ORDER BY {}",
            StaffTable::TABLE_NAME,
            StaffTable::COLUMN_ID
        );

        let rows = sqlx::query_as::<_, Staff>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::debug!("Loaded {} staff members", rows.len());
        Ok(rows)
    }

    pub async fn get_staff_by_id(&self, id: i64) -> Result<Staff> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ?",
            StaffTable::TABLE_NAME,
            StaffTable::COLUMN_ID
        );

        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound {
                entity: "Staff",
                id,
            })
    }

    pub async fn create_staff(&self, staff: &NewStaff) -> Result<Staff> {
        staff.validate()?;

        let query = format!(
            "INSERT INTO {} ({}, {}, {}, {}) VALUES (?, ?, ?, ?)",
            StaffTable::TABLE_NAME,
            StaffTable::COLUMN_LASTNAME,
            StaffTable::COLUMN_PATRONYMIC,
            StaffTable::COLUMN_ADDRESS,
            StaffTable::COLUMN_POST,
        );

        let result = sqlx::query(&query)
            .bind(&staff.lastname)
            .bind(&staff.patronymic)
            .bind(&staff.address)
            .bind(&staff.post)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.get_staff_by_id(result.last_insert_rowid()).await
    }

    pub async fn update_staff(&self, id: i64, staff: &NewStaff) -> Result<Staff> {
        staff.validate()?;

        let query = format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            StaffTable::TABLE_NAME,
            StaffTable::COLUMN_LASTNAME,
            StaffTable::COLUMN_PATRONYMIC,
            StaffTable::COLUMN_ADDRESS,
            StaffTable::COLUMN_POST,
            StaffTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(&staff.lastname)
            .bind(&staff.patronymic)
            .bind(&staff.address)
            .bind(&staff.post)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "Staff",
                id,
            });
        }

        self.get_staff_by_id(id).await
    }

    pub async fn delete_staff(&self, id: i64) -> Result<()> {
        let query = format!(
            "DELETE FROM {} WHERE {} = ?",
            StaffTable::TABLE_NAME,
            StaffTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound {
                entity: "Staff",
                id,
            });
        }

        Ok(())
    }
}
