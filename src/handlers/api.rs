//! JSON mirrors of the list pages.

use axum::{Json, extract::State};

use crate::{
    error::Result,
    handlers::AppState,
    models::{Client, Equipment, EquipmentSale, Manufacturer, Offer, Staff, Supplier},
};

pub async fn clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>> {
    Ok(Json(state.clients.get_all_clients().await?))
}

pub async fn offers(State(state): State<AppState>) -> Result<Json<Vec<Offer>>> {
    Ok(Json(state.offers.get_all_offers().await?))
}

pub async fn suppliers(State(state): State<AppState>) -> Result<Json<Vec<Supplier>>> {
    Ok(Json(state.suppliers.get_all_suppliers().await?))
}

pub async fn manufacturers(State(state): State<AppState>) -> Result<Json<Vec<Manufacturer>>> {
    Ok(Json(state.manufacturers.get_all_manufacturers().await?))
}

pub async fn equipment(State(state): State<AppState>) -> Result<Json<Vec<Equipment>>> {
    Ok(Json(state.equipment.get_all_equipment().await?))
}

pub async fn equipment_sales(State(state): State<AppState>) -> Result<Json<Vec<EquipmentSale>>> {
    Ok(Json(state.equipment_sales.get_all_sales().await?))
}

pub async fn staff(State(state): State<AppState>) -> Result<Json<Vec<Staff>>> {
    Ok(Json(state.staff.get_all_staff().await?))
}
