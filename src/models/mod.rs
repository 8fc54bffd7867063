pub mod test_record;
pub mod user_plate;

pub use test_record::*;
pub use user_plate::*;
