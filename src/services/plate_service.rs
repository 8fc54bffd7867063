// ==================== PLATE LOOKUPS ====================
// Equality filter on `name` is the only supported predicate.

use std::time::Duration;

use futures::stream::StreamExt;
use mongodb::bson::doc;
use tokio::time::timeout;

use crate::{api::metrics, database::MongoDB, models::UserPlate, utils::error::AppError};

const USERS_COLLECTION: &str = "users";
const COMMENTS_COLLECTION: &str = "comments";

// Per-request driver calls never block past this bound
const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Find the single user whose `name` matches, or `None` when nothing does.
pub async fn find_one_user(db: &MongoDB, name: &str) -> Result<Option<UserPlate>, AppError> {
    log::info!("🔍 Looking up user '{}' in '{}'", name, USERS_COLLECTION);
    metrics::increment_db_query_count();

    let collection = db.collection::<UserPlate>(USERS_COLLECTION);
    let filter = doc! { "name": name };

    let result = timeout(QUERY_TIMEOUT, collection.find_one(filter))
        .await
        .map_err(|_| AppError::Query(format!("find_one timed out after {:?}", QUERY_TIMEOUT)))?
        .map_err(|e| AppError::Query(format!("Database error: {}", e)))?;

    match &result {
        Some(user) => log::info!("✅ User found: {}", user.name),
        None => log::warn!("⚠️ No user matches name '{}'", name),
    }

    Ok(result)
}

/// Find every comment whose `name` matches; each match is also logged.
pub async fn find_many_users(db: &MongoDB, name: &str) -> Result<Vec<UserPlate>, AppError> {
    log::info!("🔍 Looking up comments by '{}' in '{}'", name, COMMENTS_COLLECTION);
    metrics::increment_db_query_count();

    let collection = db.collection::<UserPlate>(COMMENTS_COLLECTION);
    let filter = doc! { "name": name };

    let mut cursor = timeout(QUERY_TIMEOUT, collection.find(filter))
        .await
        .map_err(|_| AppError::Query(format!("find timed out after {:?}", QUERY_TIMEOUT)))?
        .map_err(|e| AppError::Query(format!("Database error: {}", e)))?;

    let results = timeout(QUERY_TIMEOUT, async {
        let mut results = Vec::new();
        while let Some(item) = cursor.next().await {
            let plate: UserPlate =
                item.map_err(|e| AppError::Query(format!("Cursor error: {}", e)))?;
            results.push(plate);
        }
        Ok::<_, AppError>(results)
    })
    .await
    .map_err(|_| AppError::Query(format!("cursor drain timed out after {:?}", QUERY_TIMEOUT)))??;

    log::info!("✅ Found {} comment(s) for '{}'", results.len(), name);
    for plate in &results {
        log::info!(
            "💬 comment ------------- {}",
            serde_json::to_string(plate).unwrap_or_else(|_| plate.name.clone())
        );
    }

    Ok(results)
}
