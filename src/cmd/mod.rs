pub mod analyze;
pub mod schema;
