use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::views::ListPage;

/// Database equipment model. `manufacturer` is free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Equipment {
    pub id: i64,
    pub manufacturer: String,
    pub color: String,
    pub quantity: i64,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewEquipment {
    #[validate(length(max = 100))]
    pub manufacturer: String,
    #[validate(length(max = 100))]
    pub color: String,
    pub quantity: i64,
    pub price: i64,
}

impl From<Equipment> for NewEquipment {
    fn from(equipment: Equipment) -> Self {
        Self {
            manufacturer: equipment.manufacturer,
            color: equipment.color,
            quantity: equipment.quantity,
            price: equipment.price,
        }
    }
}

impl ListPage for Equipment {
    const TITLE: &'static str = "Оборудование";
    const COLUMNS: &'static [&'static str] =
        &["ID", "Производитель", "Цвет", "Количество", "Цена"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.manufacturer.clone(),
            self.color.clone(),
            self.quantity.to_string(),
            self.price.to_string(),
        ]
    }
}
