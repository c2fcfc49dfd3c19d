/// Liveness check
pub async fn health() -> &'static str {
    "Equipment trade server is running."
}
