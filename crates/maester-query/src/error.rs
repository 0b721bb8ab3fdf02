//! Error types for the maester-query crate.

use maester_core::EntityKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Store error: {0}")]
    Store(#[from] maester_graph::StoreError),

    #[error("Config error: {0}")]
    Config(#[from] maester_core::MaesterError),

    #[error("Failed to read seed file {path}: {source}")]
    SeedFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown field {field} on {entity}")]
    UnknownField { entity: EntityKind, field: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QueryError>;
