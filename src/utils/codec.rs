// JSON record codec: whole-record-or-nothing, no partial decode.

use serde::{de::DeserializeOwned, Serialize};

use crate::utils::error::AppError;

/// Decode a request body into a record of a known shape.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::Decode(e.to_string()))
}

/// Encode a record as a JSON byte sequence for a response body.
pub fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, AppError> {
    serde_json::to_vec(record).map_err(|e| AppError::Encode(e.to_string()))
}
