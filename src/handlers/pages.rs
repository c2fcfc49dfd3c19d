use axum::{extract::State, response::Html};

use crate::{
    error::Result,
    handlers::AppState,
    routes::PAGES_PREFIX,
    views::{index_page, list_page},
};

/// Index page linking every list
pub async fn index() -> Html<String> {
    Html(index_page(PAGES_PREFIX))
}

pub async fn clients(State(state): State<AppState>) -> Result<Html<String>> {
    let clients = state.clients.get_all_clients().await?;
    Ok(Html(list_page(&clients)))
}

pub async fn offers(State(state): State<AppState>) -> Result<Html<String>> {
    let contracts = state.offers.get_all_offers().await?;
    Ok(Html(list_page(&contracts)))
}

pub async fn suppliers(State(state): State<AppState>) -> Result<Html<String>> {
    let suppliers = state.suppliers.get_all_suppliers().await?;
    Ok(Html(list_page(&suppliers)))
}

pub async fn manufacturers(State(state): State<AppState>) -> Result<Html<String>> {
    let manufacturers = state.manufacturers.get_all_manufacturers().await?;
    Ok(Html(list_page(&manufacturers)))
}

pub async fn equipment(State(state): State<AppState>) -> Result<Html<String>> {
    let equipment = state.equipment.get_all_equipment().await?;
    Ok(Html(list_page(&equipment)))
}

pub async fn equipment_sales(State(state): State<AppState>) -> Result<Html<String>> {
    let sales = state.equipment_sales.get_all_sales().await?;
    Ok(Html(list_page(&sales)))
}

pub async fn staff(State(state): State<AppState>) -> Result<Html<String>> {
    let staff = state.staff.get_all_staff().await?;
    Ok(Html(list_page(&staff)))
}
