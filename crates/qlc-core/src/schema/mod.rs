mod introspection;
mod schema;
mod schema_builder;
mod schema_error;

pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_error::SchemaError;
