use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(String),
    Connection(String),
    Decode(String),
    Query(String),
    Encode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Connection(msg) => write!(f, "Connection error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AppError::Query(msg) => write!(f, "Query error: {}", msg),
            AppError::Encode(msg) => write!(f, "Encode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
