use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, sqlite::SqliteRow};
use validator::{Validate, ValidationError};

use crate::{db::tables::OfferTable, views::ListPage};

/// Total number of digits a contract amount may carry.
pub const TOTAL_AMOUNT_MAX_DIGITS: u32 = 12;

/// Digits after the decimal point a contract amount may carry.
pub const TOTAL_AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Database contract model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub contract_id: i64,
    pub contract_number: i64,
    pub client_id: i64,
    pub signing_date: NaiveDate,
    pub signing_place: String,
    pub expiration_date: NaiveDate,
    pub total_amount: Option<Decimal>,
}

// total_amount is kept as text in SQLite, so the row is decoded by hand.
impl<'r> FromRow<'r, SqliteRow> for Offer {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let total_amount = row
            .try_get::<Option<String>, _>(OfferTable::COLUMN_TOTAL_AMOUNT)?
            .map(|raw| {
                raw.parse::<Decimal>().map_err(|e| sqlx::Error::ColumnDecode {
                    index: OfferTable::COLUMN_TOTAL_AMOUNT.to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()?;

        Ok(Self {
            contract_id: row.try_get(OfferTable::COLUMN_ID)?,
            contract_number: row.try_get(OfferTable::COLUMN_CONTRACT_NUMBER)?,
            client_id: row.try_get(OfferTable::COLUMN_CLIENT_ID)?,
            signing_date: row.try_get(OfferTable::COLUMN_SIGNING_DATE)?,
            signing_place: row.try_get(OfferTable::COLUMN_SIGNING_PLACE)?,
            expiration_date: row.try_get(OfferTable::COLUMN_EXPIRATION_DATE)?,
            total_amount,
        })
    }
}

/// Field values for inserting or fully replacing a contract
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewOffer {
    pub contract_number: i64,
    pub client_id: i64,
    pub signing_date: NaiveDate,
    #[validate(length(max = 100))]
    pub signing_place: String,
    pub expiration_date: NaiveDate,
    #[validate(custom(function = "validate_total_amount"))]
    pub total_amount: Option<Decimal>,
}

/// Rejects amounts that do not fit a decimal(12, 2) column.
fn validate_total_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.scale() > TOTAL_AMOUNT_DECIMAL_PLACES {
        return Err(ValidationError::new("decimal_places"));
    }

    let integral_limit =
        Decimal::from(10_i64.pow(TOTAL_AMOUNT_MAX_DIGITS - TOTAL_AMOUNT_DECIMAL_PLACES));
    if amount.trunc().abs() >= integral_limit {
        return Err(ValidationError::new("max_digits"));
    }

    Ok(())
}

impl ListPage for Offer {
    const TITLE: &'static str = "Договоры";
    const COLUMNS: &'static [&'static str] = &[
        "Номер договора",
        "Клиент",
        "Дата подписания",
        "Место подписания",
        "Дата окончания",
        "Сумма",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.contract_number.to_string(),
            self.client_id.to_string(),
            self.signing_date.format("%d.%m.%Y").to_string(),
            self.signing_place.clone(),
            self.expiration_date.format("%d.%m.%Y").to_string(),
            self.total_amount
                .map(|amount| amount.to_string())
                .unwrap_or_default(),
        ]
    }
}
