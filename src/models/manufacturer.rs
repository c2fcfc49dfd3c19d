use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::views::ListPage;

/// Database manufacturer model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Manufacturer {
    pub id: i64,
    pub title: String,
    pub phone_number: i64,
    pub mail: String,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewManufacturer {
    #[validate(length(max = 100))]
    pub title: String,
    pub phone_number: i64,
    #[validate(length(max = 100))]
    pub mail: String,
    pub price: i64,
}

impl ListPage for Manufacturer {
    const TITLE: &'static str = "Производители";
    const COLUMNS: &'static [&'static str] = &["ID", "Название", "Телефон", "Почта", "Цена"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.phone_number.to_string(),
            self.mail.clone(),
            self.price.to_string(),
        ]
    }
}
