//! Maester Graph — in-memory entity store and relationship resolution.
//!
//! Seed records are validated into an [`EntityStore`], indexed once into a
//! [`Dataset`], and from then on every derived edge (siblings, spouses,
//! lovers, house membership, allegiances) is computed on demand by the pure
//! functions in [`relations`].

pub mod dataset;
pub mod index;
pub mod relations;
pub mod store;

pub use dataset::Dataset;
pub use index::NameIndex;
pub use store::{EntityStore, StoreError};
