use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::{api::metrics, models::TestRecord, utils::codec};

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct GreetingPayload {
    #[serde(rename = "Name")]
    pub name: String,
}

/// GET /getJSON - Fixed single-field JSON object
#[utoipa::path(
    get,
    path = "/getJSON",
    tag = "Records",
    responses(
        (status = 200, description = "Fixed greeting payload", body = GreetingPayload),
        (status = 500, description = "Response encoding failed")
    )
)]
pub async fn get_json() -> impl Responder {
    metrics::increment_request_count();
    log::info!("📩 GET /getJSON");

    let payload = GreetingPayload {
        name: "Aaron".to_string(),
    };

    match codec::encode(&payload) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/json")
            .body(bytes),
        Err(e) => {
            metrics::increment_error_count();
            log::error!("❌ Error encoding greeting payload: {}", e);
            HttpResponse::InternalServerError().body("Error encoding json data")
        }
    }
}

/// POST /postJSON - Decode a TestRecord and log its fields
///
/// The decode result is observable only via logs; the response carries no
/// body either way.
#[utoipa::path(
    post,
    path = "/postJSON",
    tag = "Records",
    request_body = TestRecord,
    responses(
        (status = 200, description = "Record decoded, fields logged"),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn post_json(body: web::Bytes) -> impl Responder {
    metrics::increment_request_count();
    log::info!("📩 POST /postJSON");

    match codec::decode::<TestRecord>(&body) {
        Ok(record) => {
            log::info!("{}", record_summary(&record));
            HttpResponse::Ok().finish()
        }
        Err(e) => {
            log::warn!("⚠️ Error decoding request body: {}", e);
            HttpResponse::BadRequest().finish()
        }
    }
}

/// Logged line for a decoded record; an absent `time` reads as zero.
fn record_summary(record: &TestRecord) -> String {
    format!("{} {} {}", record.name, record.number, record.time.unwrap_or(0))
}
