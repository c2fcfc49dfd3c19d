/// Provides constants and utilities for working with
/// the "suppliers" database table.
pub struct SupplierTable;

impl SupplierTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "suppliers";

    pub const COLUMN_ID: &'static str = "id";
    pub const COLUMN_TITLE: &'static str = "title";
    pub const COLUMN_PHONE_NUMBER: &'static str = "phone_number";
    pub const COLUMN_ADDRESS: &'static str = "address";
    pub const COLUMN_PRICE: &'static str = "price";

    /// SQL statement for creating the suppliers table with the defined schema.
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
            Self::COLUMN_ADDRESS,
            Self::COLUMN_PRICE
        )
    }
}
