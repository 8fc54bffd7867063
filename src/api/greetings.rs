use actix_web::{HttpResponse, Responder};

use crate::api::metrics;

const ROOT_GREETING: &str = "This is the root of the server";
const HELLO_GREETING: &str = "plate-service, hello!";

/// GET / - Root greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "Greetings",
    responses(
        (status = 200, description = "Fixed root greeting", body = String)
    )
)]
pub async fn get_root() -> impl Responder {
    metrics::increment_request_count();
    log::info!("📩 GET /");

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(ROOT_GREETING)
}

/// GET /hello - Hello greeting
#[utoipa::path(
    get,
    path = "/hello",
    tag = "Greetings",
    responses(
        (status = 200, description = "Fixed hello greeting", body = String)
    )
)]
pub async fn get_hello() -> impl Responder {
    metrics::increment_request_count();
    log::info!("📩 GET /hello");

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(HELLO_GREETING)
}
