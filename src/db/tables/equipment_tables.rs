/// Provides constants and utilities for working with
/// the "equipment" database table.
pub struct EquipmentTable;

impl EquipmentTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "equipment";

    pub const COLUMN_ID: &'static str = "id";

    /// Free-text manufacturer name, not a reference to the manufacturers table.
    pub const COLUMN_MANUFACTURER: &'static str = "manufacturer";

    pub const COLUMN_COLOR: &'static str = "color";
    pub const COLUMN_QUANTITY: &'static str = "quantity";
    pub const COLUMN_PRICE: &'static str = "price";

    /// SQL statement for creating the equipment table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} INTEGER NOT NULL,
                {} INTEGER NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_MANUFACTURER,
            Self::COLUMN_COLOR,
            Self::COLUMN_QUANTITY,
            Self::COLUMN_PRICE
        )
    }
}
