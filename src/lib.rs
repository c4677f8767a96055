//! Shoebox - a personal photo organizer
//!
//! This library manages a photo hierarchy of users, albums, pictures
//! and tags, persists it as a single serialized snapshot, and answers
//! boolean tag queries and date-range queries over the collection.

use thiserror::Error;

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod snapshot;
pub mod stock;

pub mod cli;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ShoeboxError {
    /// Model error while mutating the photo hierarchy
    #[error("Model error: {0}")]
    Model(#[from] model::ModelError),
    /// Snapshot persistence error
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] snapshot::SnapshotError),
    /// Query parsing or evaluation error
    #[error("Query error: {0}")]
    Query(#[from] query::QueryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
