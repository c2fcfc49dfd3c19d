/// Provides constants and utilities for working with
/// the "staff" database table.
pub struct StaffTable;

impl StaffTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "staff";

    pub const COLUMN_ID: &'static str = "id";
    pub const COLUMN_LASTNAME: &'static str = "lastname";
    pub const COLUMN_PATRONYMIC: &'static str = "patronymic";
    pub const COLUMN_ADDRESS: &'static str = "address";
    pub const COLUMN_POST: &'static str = "post";

    /// SQL statement for creating the staff table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_LASTNAME,
            Self::COLUMN_PATRONYMIC,
            Self::COLUMN_ADDRESS,
            Self::COLUMN_POST
        )
    }
}
