use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::views::ListPage;

/// Database staff member model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Staff {
    pub id: i64,
    pub lastname: String,
    pub patronymic: String,
    pub address: String,
    pub post: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewStaff {
    #[validate(length(max = 100))]
    pub lastname: String,
    #[validate(length(max = 100))]
    pub patronymic: String,
    #[validate(length(max = 100))]
    pub address: String,
    #[validate(length(max = 100))]
    pub post: String,
}

impl ListPage for Staff {
    const TITLE: &'static str = "Сотрудники";
    const COLUMNS: &'static [&'static str] = &["ID", "Фамилия", "Отчество", "Адрес", "Должность"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.lastname.clone(),
            self.patronymic.clone(),
            self.address.clone(),
            self.post.clone(),
        ]
    }
}
