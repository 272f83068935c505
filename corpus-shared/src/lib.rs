//! Shared types and configuration for the corpus workspace.
//!
//! This crate holds the domain row types, the fixture set format, the
//! connection settings read from the environment, and tracing setup used by
//! every operational binary.

pub mod config;
pub mod telemetry;
pub mod types;

pub use config::{ConnectionSettings, SettingsError};
