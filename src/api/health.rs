use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::MongoDB;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<MongoDB>) -> impl Responder {
    let database = match db.health_check().await {
        Ok(_) => "up".to_string(),
        Err(e) => {
            log::warn!("⚠️ Health check: database unreachable: {}", e);
            "down".to_string()
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "plate-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        timestamp: chrono::Utc::now().timestamp(),
    })
}
