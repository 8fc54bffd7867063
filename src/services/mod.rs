pub mod plate_service;

pub use plate_service::*;
