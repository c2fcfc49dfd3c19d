/// Provides constants and utilities for working with
/// the "clients" database table.
pub struct ClientTable;

impl ClientTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "clients";

    /// The column name for the primary key identifier of a client.
    pub const COLUMN_ID: &'static str = "client_id";

    pub const COLUMN_SURNAME: &'static str = "surname";
    pub const COLUMN_NAME: &'static str = "name";

    /// Nullable.
    pub const COLUMN_PATRONYMIC: &'static str = "patronymic";

    pub const COLUMN_PASSPORT: &'static str = "passport";

    /// Nullable.
    pub const COLUMN_ADDRESS: &'static str = "address";

    /// Nullable.
    pub const COLUMN_EMAIL: &'static str = "email";

    pub const COLUMN_PHONE: &'static str = "phone";

    /// SQL statement for creating the clients table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT,
                {} TEXT NOT NULL,
                {} TEXT,
                {} TEXT,
                {} TEXT NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_SURNAME,
            Self::COLUMN_NAME,
            Self::COLUMN_PATRONYMIC,
            Self::COLUMN_PASSPORT,
            Self::COLUMN_ADDRESS,
            Self::COLUMN_EMAIL,
            Self::COLUMN_PHONE
        )
    }
}
