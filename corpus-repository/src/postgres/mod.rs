//! PostgreSQL implementations: documents repository, connection construction,
//! schema provisioning, and the fixture bulk loader.
pub mod connection;
pub mod documents_repository;
pub mod fixtures_loader;
pub mod schema;

pub use documents_repository::PostgresDocumentsRepository;
