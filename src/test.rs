use chrono::{Days, Local, NaiveDate};
use rust_decimal_macros::dec;

use crate::db::{self, ClientStore, OfferStore};
use crate::error::AppError;
use crate::handlers::AppState;
use crate::models::{
    Client, NewClient, NewEquipment, NewEquipmentSale, NewManufacturer, NewOffer, NewStaff,
    NewSupplier,
};

// Helper function to setup a test database
async fn setup_test_state() -> AppState {
    let pool = db::init_memory_pool()
        .await
        .expect("Failed to create in-memory database");
    AppState::new(pool)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn days_from_today(days: u64) -> NaiveDate {
    today().checked_add_days(Days::new(days)).unwrap()
}

// Helper function to create a test client with only the mandatory fields
async fn create_test_client(clients: &ClientStore) -> Client {
    clients
        .create_client(&NewClient::new(
            "Тестов",
            "Тест",
            "0000 000000",
            "+7-000-000-00-00",
        ))
        .await
        .expect("Failed to save client")
}

fn test_offer(client_id: i64, contract_number: i64, place: &str, days: u64) -> NewOffer {
    NewOffer {
        contract_number,
        client_id,
        signing_date: today(),
        signing_place: place.to_string(),
        expiration_date: days_from_today(days),
        total_amount: None,
    }
}

async fn create_test_offer(offers: &OfferStore, offer: &NewOffer) -> i64 {
    offers
        .create_offer(offer)
        .await
        .expect("Failed to save offer")
        .contract_id
}

#[cfg(test)]
mod client_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let state = setup_test_state().await;

        let client = state
            .clients
            .create_client(&NewClient {
                patronymic: Some("Иванович".to_string()),
                address: Some("г. Москва, ул. Ленина, 1".to_string()),
                email: Some("ivanov@example.com".to_string()),
                ..NewClient::new("Иванов", "Иван", "1234 567890", "+7-999-123-45-67")
            })
            .await
            .unwrap();

        assert_eq!(client.surname, "Иванов");
        assert_eq!(client.name, "Иван");
        assert_eq!(client.email.as_deref(), Some("ivanov@example.com"));
        assert!(client.client_id > 0);

        let stored = state.clients.get_client_by_id(client.client_id).await.unwrap();
        assert_eq!(stored, client);
    }

    #[tokio::test]
    async fn test_client_display_is_id() {
        let state = setup_test_state().await;
        let client = create_test_client(&state.clients).await;

        assert_eq!(client.to_string(), client.client_id.to_string());
    }

    #[tokio::test]
    async fn test_client_without_optional_fields() {
        let state = setup_test_state().await;

        let client = state
            .clients
            .create_client(&NewClient::new(
                "Петров",
                "Петр",
                "9876 543210",
                "+7-888-999-00-11",
            ))
            .await
            .unwrap();

        assert!(client.patronymic.is_none());
        assert!(client.address.is_none());
        assert!(client.email.is_none());
    }

    #[tokio::test]
    async fn test_client_rejects_invalid_fields() {
        let state = setup_test_state().await;

        let bad_email = NewClient {
            email: Some("not-an-email".to_string()),
            ..NewClient::new("Сидоров", "Сидор", "1111 222222", "+7-777-777-77-77")
        };
        assert!(matches!(
            state.clients.create_client(&bad_email).await,
            Err(AppError::Validation(_))
        ));

        // 31 characters, one over the limit
        let long_surname = "Ж".repeat(31);
        let too_long = NewClient::new(&long_surname, "Сидор", "1111 222222", "+7");
        assert!(matches!(
            state.clients.create_client(&too_long).await,
            Err(AppError::Validation(_))
        ));

        assert!(state.clients.get_all_clients().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_client() {
        let state = setup_test_state().await;
        let client = create_test_client(&state.clients).await;

        let updated = state
            .clients
            .update_client(
                client.client_id,
                &NewClient {
                    address: Some("г. Тверь".to_string()),
                    ..NewClient::new("Тестов", "Тест", "0000 000000", "+7-000-000-00-00")
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.address.as_deref(), Some("г. Тверь"));

        state.clients.delete_client(client.client_id).await.unwrap();
        assert!(matches!(
            state.clients.get_client_by_id(client.client_id).await,
            Err(AppError::NotFound { entity: "Client", .. })
        ));
        assert!(matches!(
            state.clients.delete_client(client.client_id).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_clients_listed_in_insertion_order() {
        let state = setup_test_state().await;
        for surname in ["Первый", "Второй", "Третий"] {
            state
                .clients
                .create_client(&NewClient::new(surname, "Имя", "0000", "+7"))
                .await
                .unwrap();
        }

        let surnames: Vec<String> = state
            .clients
            .get_all_clients()
            .await
            .unwrap()
            .into_iter()
            .map(|client| client.surname)
            .collect();
        assert_eq!(surnames, ["Первый", "Второй", "Третий"]);
    }
}

#[cfg(test)]
mod offer_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_offer_creation() {
        let state = setup_test_state().await;
        let client = create_test_client(&state.clients).await;

        let offer = state
            .offers
            .create_offer(&NewOffer {
                total_amount: Some(dec!(50000.00)),
                ..test_offer(client.client_id, 12345, "г. Москва", 365)
            })
            .await
            .unwrap();

        assert_eq!(offer.contract_number, 12345);
        assert_eq!(offer.client_id, client.client_id);
        assert_eq!(offer.total_amount, Some(dec!(50000.00)));
        assert_eq!(offer.expiration_date, days_from_today(365));
    }

    #[tokio::test]
    async fn test_offer_without_total_amount() {
        let state = setup_test_state().await;
        let client = create_test_client(&state.clients).await;

        let id = create_test_offer(
            &state.offers,
            &test_offer(client.client_id, 777, "г. Казань", 90),
        )
        .await;

        let offer = state.offers.get_offer_by_id(id).await.unwrap();
        assert!(offer.total_amount.is_none());
    }

    #[tokio::test]
    async fn test_offer_cascade_delete() {
        let state = setup_test_state().await;
        let client = create_test_client(&state.clients).await;
        let other = create_test_client(&state.clients).await;

        let id = create_test_offer(
            &state.offers,
            &test_offer(client.client_id, 999, "г. СПб", 180),
        )
        .await;
        let kept = create_test_offer(
            &state.offers,
            &test_offer(other.client_id, 1000, "г. СПб", 180),
        )
        .await;

        state.clients.delete_client(client.client_id).await.unwrap();

        assert!(matches!(
            state.offers.get_offer_by_id(id).await,
            Err(AppError::NotFound { entity: "Offer", .. })
        ));
        assert!(state.offers.get_offer_by_id(kept).await.is_ok());
    }

    #[tokio::test]
    async fn test_offer_requires_existing_client() {
        let state = setup_test_state().await;

        let result = state
            .offers
            .create_offer(&test_offer(42, 1, "Москва", 30))
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert!(state.offers.get_all_offers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_offer_rejects_over_precise_amount() {
        let state = setup_test_state().await;
        let client = create_test_client(&state.clients).await;

        let result = state
            .offers
            .create_offer(&NewOffer {
                total_amount: Some(dec!(10.555)),
                ..test_offer(client.client_id, 1, "Москва", 30)
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_client_with_multiple_offers() {
        let state = setup_test_state().await;
        let client = create_test_client(&state.clients).await;

        create_test_offer(&state.offers, &test_offer(client.client_id, 1, "Москва", 365)).await;
        create_test_offer(&state.offers, &test_offer(client.client_id, 2, "СПб", 180)).await;

        assert_eq!(
            state
                .offers
                .count_offers_by_client(client.client_id)
                .await
                .unwrap(),
            2
        );

        let numbers: Vec<i64> = state
            .offers
            .get_offers_by_client(client.client_id)
            .await
            .unwrap()
            .iter()
            .map(|offer| offer.contract_number)
            .collect();
        assert_eq!(numbers, [1, 2]);
    }

    #[tokio::test]
    async fn test_update_offer_amount() {
        let state = setup_test_state().await;
        let client = create_test_client(&state.clients).await;
        let id = create_test_offer(
            &state.offers,
            &test_offer(client.client_id, 5, "Москва", 30),
        )
        .await;

        let updated = state
            .offers
            .update_offer(
                id,
                &NewOffer {
                    total_amount: Some(dec!(1234.5)),
                    ..test_offer(client.client_id, 5, "Москва", 60)
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.total_amount, Some(dec!(1234.50)));
        assert_eq!(updated.expiration_date, days_from_today(60));
    }
}

#[cfg(test)]
mod flat_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_supplier_creation() {
        let state = setup_test_state().await;

        let supplier = state
            .suppliers
            .create_supplier(&NewSupplier {
                title: "ООО \"Техника\"".to_string(),
                phone_number: 79991234567,
                address: "г. Москва, ул. Поставщиков, 10".to_string(),
                price: 100000,
            })
            .await
            .unwrap();

        assert_eq!(supplier.title, "ООО \"Техника\"");
        assert_eq!(supplier.price, 100000);
        assert_eq!(supplier.phone_number, 79991234567);
        assert!(supplier.id > 0);
    }

    #[tokio::test]
    async fn test_manufacturer_creation() {
        let state = setup_test_state().await;

        let manufacturer = state
            .manufacturers
            .create_manufacturer(&NewManufacturer {
                title: "Samsung Electronics".to_string(),
                phone_number: 74951234567,
                mail: "info@samsung.com".to_string(),
                price: 250000,
            })
            .await
            .unwrap();

        assert_eq!(manufacturer.title, "Samsung Electronics");
        assert_eq!(manufacturer.mail, "info@samsung.com");
    }

    #[tokio::test]
    async fn test_equipment_creation() {
        let state = setup_test_state().await;

        let equipment = state
            .equipment
            .create_equipment(&NewEquipment {
                manufacturer: "Apple".to_string(),
                color: "Черный".to_string(),
                quantity: 50,
                price: 75000,
            })
            .await
            .unwrap();

        assert_eq!(equipment.manufacturer, "Apple");
        assert_eq!(equipment.quantity, 50);
        assert_eq!(equipment.color, "Черный");
    }

    #[tokio::test]
    async fn test_equipment_quantity_update() {
        let state = setup_test_state().await;

        let equipment = state
            .equipment
            .create_equipment(&NewEquipment {
                manufacturer: "Xiaomi".to_string(),
                color: "Белый".to_string(),
                quantity: 100,
                price: 25000,
            })
            .await
            .unwrap();

        let id = equipment.id;
        let mut changed = NewEquipment::from(equipment);
        changed.quantity = 80;
        state.equipment.update_equipment(id, &changed).await.unwrap();

        let updated = state.equipment.get_equipment_by_id(id).await.unwrap();
        assert_eq!(updated.quantity, 80);
        assert_eq!(updated.manufacturer, "Xiaomi");
    }

    #[tokio::test]
    async fn test_sale_creation() {
        let state = setup_test_state().await;

        let sale = state
            .equipment_sales
            .create_sale(&NewEquipmentSale {
                clients: "Иванов И.И.".to_string(),
                staff: "Петров П.П.".to_string(),
                date: today(),
                quantity: 5,
                price: 15000,
            })
            .await
            .unwrap();

        assert_eq!(sale.clients, "Иванов И.И.");
        assert_eq!(sale.quantity, 5);
        assert_eq!(sale.date, today());
    }

    #[tokio::test]
    async fn test_staff_creation_and_delete() {
        let state = setup_test_state().await;

        let staff = state
            .staff
            .create_staff(&NewStaff {
                lastname: "Работников".to_string(),
                patronymic: "Работникович".to_string(),
                address: "г. Екатеринбург, пр. Ленина, 50".to_string(),
                post: "Менеджер".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(staff.lastname, "Работников");
        assert_eq!(staff.post, "Менеджер");

        state.staff.delete_staff(staff.id).await.unwrap();
        assert!(state.staff.get_all_staff().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_then_delete_every_flat_table() {
        let state = setup_test_state().await;

        let mut manufacturer = NewManufacturer {
            title: "Samsung".to_string(),
            phone_number: 74951234567,
            mail: "info@samsung.com".to_string(),
            price: 250000,
        };
        let id = state.manufacturers.create_manufacturer(&manufacturer).await.unwrap().id;
        manufacturer.price = 260000;
        let updated = state.manufacturers.update_manufacturer(id, &manufacturer).await.unwrap();
        assert_eq!(updated.price, 260000);
        state.manufacturers.delete_manufacturer(id).await.unwrap();
        assert!(state.manufacturers.get_all_manufacturers().await.unwrap().is_empty());

        let mut sale = NewEquipmentSale {
            clients: "Иванов И.И.".to_string(),
            staff: "Петров П.П.".to_string(),
            date: today(),
            quantity: 5,
            price: 15000,
        };
        let id = state.equipment_sales.create_sale(&sale).await.unwrap().id;
        sale.date = days_from_today(1);
        let updated = state.equipment_sales.update_sale(id, &sale).await.unwrap();
        assert_eq!(updated.date, days_from_today(1));
        state.equipment_sales.delete_sale(id).await.unwrap();
        assert!(state.equipment_sales.get_all_sales().await.unwrap().is_empty());

        let mut staff = NewStaff {
            lastname: "Работников".to_string(),
            patronymic: "Работникович".to_string(),
            address: "г. Пермь".to_string(),
            post: "Менеджер".to_string(),
        };
        let id = state.staff.create_staff(&staff).await.unwrap().id;
        staff.post = "Директор".to_string();
        let updated = state.staff.update_staff(id, &staff).await.unwrap();
        assert_eq!(updated.post, "Директор");
        assert_eq!(updated.lastname, "Работников");

        let supplier = NewSupplier {
            title: "ООО \"Техника\"".to_string(),
            phone_number: 79991234567,
            address: "г. Москва".to_string(),
            price: 100000,
        };
        let id = state.suppliers.create_supplier(&supplier).await.unwrap().id;
        state.suppliers.delete_supplier(id).await.unwrap();
        assert!(matches!(
            state.suppliers.delete_supplier(id).await,
            Err(AppError::NotFound { entity: "Supplier", .. })
        ));

        let id = state
            .equipment
            .create_equipment(&NewEquipment {
                manufacturer: "Apple".to_string(),
                color: "Черный".to_string(),
                quantity: 1,
                price: 1,
            })
            .await
            .unwrap()
            .id;
        state.equipment.delete_equipment(id).await.unwrap();
        assert!(state.equipment.get_all_equipment().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let state = setup_test_state().await;

        let result = state
            .suppliers
            .update_supplier(
                7,
                &NewSupplier {
                    title: "Нет".to_string(),
                    phone_number: 1,
                    address: "Нет".to_string(),
                    price: 1,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::NotFound { entity: "Supplier", id: 7 })
        ));
    }
}

#[cfg(test)]
mod seed_tests {
    use super::*;
    use crate::seed::seed_sample_data;

    #[tokio::test]
    async fn test_seed_fills_empty_database_once() {
        let state = setup_test_state().await;

        assert!(seed_sample_data(&state, today()).await.unwrap());
        assert!(!seed_sample_data(&state, today()).await.unwrap());

        let clients = state.clients.get_all_clients().await.unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(
            state
                .offers
                .count_offers_by_client(clients[0].client_id)
                .await
                .unwrap(),
            2
        );
        assert_eq!(state.suppliers.get_all_suppliers().await.unwrap().len(), 1);
        assert_eq!(state.staff.get_all_staff().await.unwrap().len(), 1);
    }
}
