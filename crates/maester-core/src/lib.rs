//! maester-core: Shared types, configuration, and error handling for the Maester dataset service.
//!
//! This crate provides the foundational types used across all Maester crates:
//! - Character and House records as they appear in the seed data
//! - Relation kinds (siblings, spouses, lovers, allegiance, house membership)
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::MaesterConfig;
pub use error::MaesterError;
pub use types::{
    Alias, AliasRelation, Character, CharacterId, EntityKind, House, HouseId, RelationKind,
};
