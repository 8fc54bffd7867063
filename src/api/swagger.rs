use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Plate Service API",
        version = "1.0.0",
        description = "Minimal HTTP gateway over a MongoDB document store.\n\n**Routes:**\n- Fixed greetings and a JSON echo for connectivity checks\n- Name-filtered lookups against the `users` and `comments` collections\n- Health monitoring and metrics"
    ),
    paths(
        // Greetings
        crate::api::greetings::get_root,
        crate::api::greetings::get_hello,

        // Records
        crate::api::records::get_json,
        crate::api::records::post_json,

        // Plate lookups
        crate::api::plates::get_one_from_db,
        crate::api::plates::get_many_from_db,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::UserPlate,
            crate::models::TestRecord,
            crate::api::records::GreetingPayload,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Greetings", description = "Fixed text responses for connectivity checks."),
        (name = "Records", description = "JSON encode/decode endpoints exercising the record codec."),
        (name = "Plates", description = "Name-filtered document store lookups."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;
