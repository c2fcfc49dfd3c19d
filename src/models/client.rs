use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::views::ListPage;

/// Database client model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub client_id: i64,
    pub surname: String,
    pub name: String,
    pub patronymic: Option<String>,
    pub passport: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: String,
}

/// A client is referred to by its identifier.
impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.client_id)
    }
}

/// Field values for inserting or fully replacing a client
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewClient {
    #[validate(length(max = 30))]
    pub surname: String,
    #[validate(length(max = 30))]
    pub name: String,
    #[validate(length(max = 30))]
    pub patronymic: Option<String>,
    #[validate(length(max = 20))]
    pub passport: String,
    #[validate(length(max = 100))]
    pub address: Option<String>,
    #[validate(email, length(max = 254))]
    pub email: Option<String>,
    #[validate(length(max = 30))]
    pub phone: String,
}

impl NewClient {
    /// Client with only the mandatory fields set.
    pub fn new(surname: &str, name: &str, passport: &str, phone: &str) -> Self {
        Self {
            surname: surname.to_string(),
            name: name.to_string(),
            passport: passport.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }
}

impl ListPage for Client {
    const TITLE: &'static str = "Клиенты";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Фамилия",
        "Имя",
        "Отчество",
        "Паспорт",
        "Адрес",
        "Email",
        "Телефон",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.to_string(),
            self.surname.clone(),
            self.name.clone(),
            self.patronymic.clone().unwrap_or_default(),
            self.passport.clone(),
            self.address.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.phone.clone(),
        ]
    }
}
