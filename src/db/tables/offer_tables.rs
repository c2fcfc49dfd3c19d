use super::ClientTable;

/// Provides constants and utilities for working with
/// the "offers" (contracts) database table.
pub struct OfferTable;

impl OfferTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "offers";

    /// The column name for the primary key identifier of a contract.
    pub const COLUMN_ID: &'static str = "contract_id";

    pub const COLUMN_CONTRACT_NUMBER: &'static str = "contract_number";

    /// Foreign key to the clients table. Rows are removed together with their client.
    pub const COLUMN_CLIENT_ID: &'static str = "client_id";

    /// Stored as `YYYY-MM-DD` text.
    pub const COLUMN_SIGNING_DATE: &'static str = "signing_date";

    pub const COLUMN_SIGNING_PLACE: &'static str = "signing_place";

    /// Stored as `YYYY-MM-DD` text.
    pub const COLUMN_EXPIRATION_DATE: &'static str = "expiration_date";

    /// Nullable decimal stored as text to keep its exact scale.
    pub const COLUMN_TOTAL_AMOUNT: &'static str = "total_amount";

    /// SQL statement for creating the offers table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                {} INTEGER NOT NULL,
                {} INTEGER NOT NULL REFERENCES {}({}) ON DELETE CASCADE,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_CONTRACT_NUMBER,
            Self::COLUMN_CLIENT_ID,
            ClientTable::TABLE_NAME,
            ClientTable::COLUMN_ID,
            Self::COLUMN_SIGNING_DATE,
            Self::COLUMN_SIGNING_PLACE,
            Self::COLUMN_EXPIRATION_DATE,
            Self::COLUMN_TOTAL_AMOUNT
        )
    }

    /// Index backing lookups of the offers of one client.
    pub fn create_client_index() -> String {
        format!(
            "CREATE INDEX IF NOT EXISTS idx_{}_{} ON {} ({})",
            Self::TABLE_NAME,
            Self::COLUMN_CLIENT_ID,
            Self::TABLE_NAME,
            Self::COLUMN_CLIENT_ID
        )
    }
}
