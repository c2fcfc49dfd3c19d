pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod views;

#[cfg(test)]
mod test;

pub use handlers::AppState;
