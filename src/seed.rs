//! Sample data for a fresh database.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::{
    error::{AppError, Result},
    handlers::AppState,
    models::{
        NewClient, NewEquipment, NewEquipmentSale, NewManufacturer, NewOffer, NewStaff,
        NewSupplier,
    },
};

/// Fill an empty database with one small data set.
///
/// Returns `false` without touching anything when clients already exist.
pub async fn seed_sample_data(state: &AppState, today: NaiveDate) -> Result<bool> {
    if !state.clients.get_all_clients().await?.is_empty() {
        tracing::info!("Database already has clients, skipping sample data");
        return Ok(false);
    }

    let ivanov = state
        .clients
        .create_client(&NewClient {
            patronymic: Some("Иванович".to_string()),
            address: Some("г. Москва, ул. Ленина, 1".to_string()),
            email: Some("ivanov@example.com".to_string()),
            ..NewClient::new("Иванов", "Иван", "1234 567890", "+7-999-123-45-67")
        })
        .await?;
    state
        .clients
        .create_client(&NewClient::new("Петров", "Петр", "9876 543210", "+7-888-999-00-11"))
        .await?;

    for (number, place, days, amount) in [
        (1, "Москва", 365, Some(Decimal::new(5_000_000, 2))),
        (2, "СПб", 180, None),
    ] {
        let expiration_date = today
            .checked_add_days(Days::new(days))
            .ok_or_else(|| AppError::Internal("expiration date out of range".to_string()))?;
        state
            .offers
            .create_offer(&NewOffer {
                contract_number: number,
                client_id: ivanov.client_id,
                signing_date: today,
                signing_place: place.to_string(),
                expiration_date,
                total_amount: amount,
            })
            .await?;
    }

    state
        .suppliers
        .create_supplier(&NewSupplier {
            title: "ООО \"Техника\"".to_string(),
            phone_number: 79991234567,
            address: "г. Москва, ул. Поставщиков, 10".to_string(),
            price: 100000,
        })
        .await?;

    state
        .manufacturers
        .create_manufacturer(&NewManufacturer {
            title: "Samsung Electronics".to_string(),
            phone_number: 74951234567,
            mail: "info@samsung.com".to_string(),
            price: 250000,
        })
        .await?;

    state
        .equipment
        .create_equipment(&NewEquipment {
            manufacturer: "Apple".to_string(),
            color: "Черный".to_string(),
            quantity: 50,
            price: 75000,
        })
        .await?;

    state
        .equipment_sales
        .create_sale(&NewEquipmentSale {
            clients: "Иванов И.И.".to_string(),
            staff: "Работников Р.Р.".to_string(),
            date: today,
            quantity: 5,
            price: 15000,
        })
        .await?;

    state
        .staff
        .create_staff(&NewStaff {
            lastname: "Работников".to_string(),
            patronymic: "Работникович".to_string(),
            address: "г. Екатеринбург, пр. Ленина, 50".to_string(),
            post: "Менеджер".to_string(),
        })
        .await?;

    tracing::info!("Inserted sample data");
    Ok(true)
}
