use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    schemes: usize,
}

pub async fn health_check() -> Json<Health> {
    Json(Health {
        status: "ok",
        schemes: radref_schemes::registry().len(),
    })
}
