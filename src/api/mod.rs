pub mod greetings;
pub mod health;
pub mod metrics;
pub mod plates;
pub mod records;
pub mod swagger;
