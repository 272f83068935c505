mod documents;
mod fixtures;
mod schema;

pub use documents::DocumentsRepositoryError;
pub use fixtures::FixtureError;
pub use schema::SchemaError;
