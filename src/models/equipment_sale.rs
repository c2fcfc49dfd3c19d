use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::views::ListPage;

/// Database equipment sale model. Buyer and seller are free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EquipmentSale {
    pub id: i64,
    pub clients: String,
    pub staff: String,
    pub date: NaiveDate,
    pub quantity: i64,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewEquipmentSale {
    #[validate(length(max = 100))]
    pub clients: String,
    #[validate(length(max = 100))]
    pub staff: String,
    pub date: NaiveDate,
    pub quantity: i64,
    pub price: i64,
}

impl ListPage for EquipmentSale {
    const TITLE: &'static str = "Продажи оборудования";
    const COLUMNS: &'static [&'static str] =
        &["ID", "Клиент", "Сотрудник", "Дата", "Количество", "Цена"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.clients.clone(),
            self.staff.clone(),
            self.date.format("%d.%m.%Y").to_string(),
            self.quantity.to_string(),
            self.price.to_string(),
        ]
    }
}
