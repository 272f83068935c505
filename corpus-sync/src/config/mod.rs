//! Configuration module for the transfer job: dependency wiring.
mod dependencies;

pub use dependencies::Dependencies;
