use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};

use crate::utils::error::AppError;

const DEFAULT_DATABASE: &str = "sample_mflix";

/// Clonable handle to the MongoDB deployment, created once at startup and
/// injected into handlers via `web::Data`.
#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, AppError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::Config(format!("Invalid MongoDB URI: {}", e)))?;

        // Never wait unbounded on an unreachable deployment
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::Connection(format!("Failed to build MongoDB client: {}", e)))?;

        let db_name = database_name_from_uri(uri);
        let db = client.database(db_name);

        // Verify the deployment is reachable before serving traffic
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::Connection(format!("MongoDB ping failed: {}", e)))?;

        log::info!("✅ Connected to MongoDB database: {}", db_name);

        Ok(Self { db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Check if the connection is healthy
    pub async fn health_check(&self) -> Result<bool, AppError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::Connection(format!("MongoDB ping failed: {}", e)))?;
        Ok(true)
    }
}

/// Extract the database name from the connection string, falling back to the
/// default when the URI carries no path segment.
fn database_name_from_uri(uri: &str) -> &str {
    uri.split('/')
        .last()
        .and_then(|s| s.split('?').next())
        .filter(|s| !s.is_empty() && !s.contains(':'))
        .unwrap_or(DEFAULT_DATABASE)
}
