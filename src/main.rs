mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3333".to_string());
    let mongodb_uri = env::var("MONGODB_URI").expect("MONGODB_URI must be set");

    log::info!("🚀 Starting Plate Service...");

    // Initialize MongoDB connection; startup failures are fatal
    let db = database::MongoDB::new(&mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Greetings
            .route("/hello", web::get().to(api::greetings::get_hello))
            // Record codec endpoints
            .route("/getJSON", web::get().to(api::records::get_json))
            .route("/postJSON", web::post().to(api::records::post_json))
            // Document store lookups
            .route("/getOneFromDB", web::get().to(api::plates::get_one_from_db))
            .route("/getManyFromDB", web::get().to(api::plates::get_many_from_db))
            // Root greeting
            .route("/", web::get().to(api::greetings::get_root))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
