use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::views::ListPage;

/// Database supplier model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Supplier {
    pub id: i64,
    pub title: String,
    pub phone_number: i64,
    pub address: String,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSupplier {
    #[validate(length(max = 100))]
    pub title: String,
    pub phone_number: i64,
    #[validate(length(max = 100))]
    pub address: String,
    pub price: i64,
}

impl ListPage for Supplier {
    const TITLE: &'static str = "Поставщики";
    const COLUMNS: &'static [&'static str] = &["ID", "Название", "Телефон", "Адрес", "Цена"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.phone_number.to_string(),
            self.address.clone(),
            self.price.to_string(),
        ]
    }
}
