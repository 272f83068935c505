//! # Corpus Repository
//! This crate provides the trait and PostgreSQL implementation for the
//! documents data repository, along with schema provisioning, fixture bulk
//! loading, and connection construction. It includes definitions for errors,
//! interfaces, and concrete implementations.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::{DocumentsRepositoryError, FixtureError, SchemaError};
pub use interfaces::DocumentsRepository;
pub use postgres::PostgresDocumentsRepository;
