pub mod api;
pub mod health;
pub mod pages;
pub mod state;

pub use state::AppState;
