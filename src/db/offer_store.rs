use validator::Validate;

use crate::{
    db::{DbPool, tables::OfferTable},
    error::{AppError, Result},
    models::offer::{NewOffer, Offer},
};

/// Offer (contract) store for database operations
#[derive(Clone)]
pub struct OfferStore {
    pool: DbPool,
}

impl OfferStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a list of all contracts in insertion order
    pub async fn get_all_offers(&self) -> Result<Vec<Offer>> {
        let query = format!(
            "SELECT * FROM {} ORDER BY {}",
            OfferTable::TABLE_NAME,
            OfferTable::COLUMN_ID
        );

        let offers = sqlx::query_as::<_, Offer>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        tracing::debug!("Loaded {} offers", offers.len());
        Ok(offers)
    }

    pub async fn get_offer_by_id(&self, id: i64) -> Result<Offer> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ?",
            OfferTable::TABLE_NAME,
            OfferTable::COLUMN_ID
        );

        let offer = sqlx::query_as::<_, Offer>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound { entity: "Offer", id })?;

        Ok(offer)
    }

    /// Get the contracts signed by one client
    pub async fn get_offers_by_client(&self, client_id: i64) -> Result<Vec<Offer>> {
        let query = format!(
            "SELECT * FROM {} WHERE {} = ? ORDER BY {}",
            OfferTable::TABLE_NAME,
            OfferTable::COLUMN_CLIENT_ID,
            OfferTable::COLUMN_ID
        );

        let offers = sqlx::query_as::<_, Offer>(&query)
            .bind(client_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(offers)
    }

    /// Count the contracts signed by one client
    pub async fn count_offers_by_client(&self, client_id: i64) -> Result<i64> {
        let query = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = ?",
            OfferTable::TABLE_NAME,
            OfferTable::COLUMN_CLIENT_ID
        );

        let count: (i64,) = sqlx::query_as(&query)
            .bind(client_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(count.0)
    }

    /// Insert a new contract. The referenced client must exist.
    pub async fn create_offer(&self, offer: &NewOffer) -> Result<Offer> {
        offer.validate()?;

        let query = format!(
            "INSERT INTO {} ({}, {}, {}, {}, {}, {}) VALUES (?, ?, ?, ?, ?, ?)",
            OfferTable::TABLE_NAME,
            OfferTable::COLUMN_CONTRACT_NUMBER,
            OfferTable::COLUMN_CLIENT_ID,
            OfferTable::COLUMN_SIGNING_DATE,
            OfferTable::COLUMN_SIGNING_PLACE,
            OfferTable::COLUMN_EXPIRATION_DATE,
            OfferTable::COLUMN_TOTAL_AMOUNT
        );

        let result = sqlx::query(&query)
            .bind(offer.contract_number)
            .bind(offer.client_id)
            .bind(offer.signing_date)
            .bind(&offer.signing_place)
            .bind(offer.expiration_date)
            .bind(offer.total_amount.map(|amount| amount.to_string()))
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.get_offer_by_id(result.last_insert_rowid()).await
    }

    pub async fn update_offer(&self, id: i64, offer: &NewOffer) -> Result<Offer> {
        offer.validate()?;

        let query = format!(
            "UPDATE {} SET {} = ?, {} = ?, {} = ?, {} = ?, {} = ?, {} = ? WHERE {} = ?",
            OfferTable::TABLE_NAME,
            OfferTable::COLUMN_CONTRACT_NUMBER,
            OfferTable::COLUMN_CLIENT_ID,
            OfferTable::COLUMN_SIGNING_DATE,
            OfferTable::COLUMN_SIGNING_PLACE,
            OfferTable::COLUMN_EXPIRATION_DATE,
            OfferTable::COLUMN_TOTAL_AMOUNT,
            OfferTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(offer.contract_number)
            .bind(offer.client_id)
            .bind(offer.signing_date)
            .bind(&offer.signing_place)
            .bind(offer.expiration_date)
            .bind(offer.total_amount.map(|amount| amount.to_string()))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound { entity: "Offer", id });
        }

        self.get_offer_by_id(id).await
    }

    pub async fn delete_offer(&self, id: i64) -> Result<()> {
        let query = format!(
            "DELETE FROM {} WHERE {} = ?",
            OfferTable::TABLE_NAME,
            OfferTable::COLUMN_ID
        );

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound { entity: "Offer", id });
        }

        Ok(())
    }
}
