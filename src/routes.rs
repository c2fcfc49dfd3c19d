use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{AppState, api, health, pages};

/// Path under which the HTML list pages are served.
pub const PAGES_PREFIX: &str = "/lab";

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health))
        .route("/lab/", get(pages::index))
        .route("/lab/clients/", get(pages::clients))
        .route("/lab/offers/", get(pages::offers))
        .route("/lab/suppliers/", get(pages::suppliers))
        .route("/lab/manufacturer/", get(pages::manufacturers))
        .route("/lab/quipment/", get(pages::equipment))
        .route("/lab/equipmentsales/", get(pages::equipment_sales))
        .route("/lab/staff/", get(pages::staff))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(api::clients))
        .route("/offers", get(api::offers))
        .route("/suppliers", get(api::suppliers))
        .route("/manufacturer", get(api::manufacturers))
        .route("/quipment", get(api::equipment))
        .route("/equipmentsales", get(api::equipment_sales))
        .route("/staff", get(api::staff))
}
