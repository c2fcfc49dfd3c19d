/// Provides constants and utilities for working with
/// the "equipment_sales" database table.
pub struct EquipmentSaleTable;

impl EquipmentSaleTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "equipment_sales";

    pub const COLUMN_ID: &'static str = "id";

    /// Free-text buyer description.
    pub const COLUMN_CLIENTS: &'static str = "clients";

    /// Free-text seller description.
    pub const COLUMN_STAFF: &'static str = "staff";

    /// Stored as `YYYY-MM-DD` text.
    pub const COLUMN_DATE: &'static str = "date";

    pub const COLUMN_QUANTITY: &'static str = "quantity";
    pub const COLUMN_PRICE: &'static str = "price";

    /// SQL statement for creating the equipment sales table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} INTEGER NOT NULL,
                {} INTEGER NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_CLIENTS,
            Self::COLUMN_STAFF,
            Self::COLUMN_DATE,
            Self::COLUMN_QUANTITY,
            Self::COLUMN_PRICE
        )
    }
}
