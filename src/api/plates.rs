use actix_web::{web, HttpResponse, Responder};

use crate::{
    api::metrics,
    database::MongoDB,
    models::UserPlate,
    services::plate_service,
    utils::codec,
};

/// GET /getOneFromDB - Find the user matching the request's `name`
///
/// 400 on a malformed body, 404 when nothing matches, 500 on a store or
/// encode failure.
#[utoipa::path(
    get,
    path = "/getOneFromDB",
    tag = "Plates",
    request_body = UserPlate,
    responses(
        (status = 200, description = "Matching user", body = UserPlate),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "No user matches the given name"),
        (status = 500, description = "Store query or response encoding failed")
    )
)]
pub async fn get_one_from_db(db: web::Data<MongoDB>, body: web::Bytes) -> impl Responder {
    metrics::increment_request_count();
    log::info!("📩 GET /getOneFromDB");

    let plate = match codec::decode::<UserPlate>(&body) {
        Ok(plate) => plate,
        Err(e) => {
            log::warn!("⚠️ Error decoding request body: {}", e);
            return HttpResponse::BadRequest().finish();
        }
    };

    match plate_service::find_one_user(&db, &plate.name).await {
        Ok(Some(found)) => match codec::encode(&found) {
            Ok(bytes) => HttpResponse::Ok()
                .content_type("application/json")
                .body(bytes),
            Err(e) => {
                metrics::increment_error_count();
                log::error!("❌ Error encoding response: {}", e);
                HttpResponse::InternalServerError().finish()
            }
        },
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => {
            metrics::increment_error_count();
            log::error!("❌ Error querying db: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /getManyFromDB - Find every comment matching the request's `name`
///
/// Returns the full array; each match is also logged by the service.
#[utoipa::path(
    get,
    path = "/getManyFromDB",
    tag = "Plates",
    request_body = UserPlate,
    responses(
        (status = 200, description = "Matching comments, possibly empty", body = [UserPlate]),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Store query or response encoding failed")
    )
)]
pub async fn get_many_from_db(db: web::Data<MongoDB>, body: web::Bytes) -> impl Responder {
    metrics::increment_request_count();
    log::info!("📩 GET /getManyFromDB");

    let plate = match codec::decode::<UserPlate>(&body) {
        Ok(plate) => plate,
        Err(e) => {
            log::warn!("⚠️ Error decoding request body: {}", e);
            return HttpResponse::BadRequest().finish();
        }
    };

    match plate_service::find_many_users(&db, &plate.name).await {
        Ok(results) => match codec::encode(&results) {
            Ok(bytes) => HttpResponse::Ok()
                .content_type("application/json")
                .body(bytes),
            Err(e) => {
                metrics::increment_error_count();
                log::error!("❌ Error encoding response: {}", e);
                HttpResponse::InternalServerError().finish()
            }
        },
        Err(e) => {
            metrics::increment_error_count();
            log::error!("❌ Error querying db: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use mongodb::bson::doc;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        MongoDB::new(&uri).await.expect("MongoDB must be running")
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_get_one_rejects_malformed_body() {
        let db = test_db().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .route("/getOneFromDB", web::get().to(get_one_from_db)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/getOneFromDB")
            .set_payload("{broken")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_get_many_rejects_malformed_body() {
        let db = test_db().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .route("/getManyFromDB", web::get().to(get_many_from_db)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/getManyFromDB")
            .set_payload("{broken")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_get_one_returns_seeded_user() {
        let db = test_db().await;
        let seeded = UserPlate {
            name: "plate-handler-test-user".to_string(),
            email: Some("handler@example.com".to_string()),
            password: None,
            text: None,
        };
        let collection = db.collection::<UserPlate>("users");
        collection.insert_one(&seeded).await.unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .route("/getOneFromDB", web::get().to(get_one_from_db)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/getOneFromDB")
            .set_payload(format!(r#"{{"name":"{}"}}"#, seeded.name))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let found: UserPlate = serde_json::from_slice(&body).unwrap();
        assert_eq!(found, seeded);
        // password/text were never set, the keys must be absent
        let raw = String::from_utf8(body.to_vec()).unwrap();
        assert!(!raw.contains("password"));
        assert!(!raw.contains("text"));

        collection
            .delete_many(doc! { "name": &seeded.name })
            .await
            .unwrap();
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_get_one_unknown_name_is_not_found() {
        let db = test_db().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .route("/getOneFromDB", web::get().to(get_one_from_db)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/getOneFromDB")
            .set_payload(r#"{"name":"no-such-user-anywhere"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_get_many_unknown_name_is_empty_array() {
        let db = test_db().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .route("/getManyFromDB", web::get().to(get_many_from_db)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/getManyFromDB")
            .set_payload(r#"{"name":"no-such-commenter"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, web::Bytes::from_static(b"[]"));
    }
}
