#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use tower::ServiceExt;

use equipment_trade_server::{AppState, db, routes};

/// Fresh in-memory database and the state wrapping it.
pub async fn test_state() -> AppState {
    let pool = db::init_memory_pool()
        .await
        .expect("Failed to create in-memory database");
    AppState::new(pool)
}

/// The full application router over the given state.
pub fn build_test_app(state: AppState) -> Router {
    routes::app(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
