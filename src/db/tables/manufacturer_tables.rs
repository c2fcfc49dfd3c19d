/// Provides constants and utilities for working with
/// the "manufacturers" database table.
pub struct ManufacturerTable;

impl ManufacturerTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "manufacturers";

    pub const COLUMN_ID: &'static str = "id";
    pub const COLUMN_TITLE: &'static str = "title";
    pub const COLUMN_PHONE_NUMBER: &'static str = "phone_number";
    pub const COLUMN_MAIL: &'static str = "mail";
    pub const COLUMN_PRICE: &'static str = "price";

    /// SQL statement for creating the manufacturers table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                {} TEXT NOT NULL,
                {} INTEGER NOT NULL,
                {} TEXT NOT NULL,
                {} INTEGER NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_TITLE,
            Self::COLUMN_PHONE_NUMBER,
            Self::COLUMN_MAIL,
            Self::COLUMN_PRICE
        )
    }
}
