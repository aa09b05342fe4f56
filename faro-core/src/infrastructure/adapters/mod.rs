pub mod json_reader;
pub mod schema_validator;

pub use json_reader::JsonCatalogReader;
pub use schema_validator::SchemaValidator;
