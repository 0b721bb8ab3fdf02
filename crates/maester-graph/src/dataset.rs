//! The immutable query context: entity store plus its name resolver.

use maester_core::{Character, CharacterId, House, HouseId};

use crate::index::NameIndex;
use crate::store::{EntityStore, StoreError};

/// One generation of loaded data, shared read-only by every resolver.
///
/// Construct once at startup and share behind an `Arc`; nothing here has
/// interior mutability.
#[derive(Debug, Clone)]
pub struct Dataset {
    store: EntityStore,
    index: NameIndex,
}

impl Dataset {
    pub fn new(store: EntityStore) -> Self {
        let index = NameIndex::build(&store);
        tracing::info!(
            characters = store.characters().len(),
            houses = store.houses().len(),
            fingerprint = %store.fingerprint(),
            "Dataset indexed"
        );
        Self { store, index }
    }

    /// Validate and index raw records.
    pub fn from_records(
        characters: Vec<Character>,
        houses: Vec<House>,
    ) -> Result<Self, StoreError> {
        Ok(Self::new(EntityStore::new(characters, houses)?))
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn characters(&self) -> &[Character] {
        self.store.characters()
    }

    pub fn houses(&self) -> &[House] {
        self.store.houses()
    }

    // ── Name Resolver ────────────────────────────────────────────

    /// Identifier of the character owning `slug`.
    pub fn resolve_id_by_slug(&self, slug: &str) -> Option<&CharacterId> {
        self.index.id_for_slug(slug)
    }

    /// First character (in seed order) whose name is exactly `name`.
    pub fn resolve_character_by_name(&self, name: &str) -> Option<&Character> {
        self.index
            .character_position(name)
            .map(|i| &self.store.characters()[i])
    }

    /// First house (in seed order) whose name is exactly `name`.
    pub fn resolve_house_by_name(&self, name: &str) -> Option<&House> {
        self.index
            .house_position(name)
            .map(|i| &self.store.houses()[i])
    }

    pub fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.index
            .character_position_by_id(id)
            .map(|i| &self.store.characters()[i])
    }

    pub fn house(&self, id: &HouseId) -> Option<&House> {
        self.index
            .house_position_by_id(id)
            .map(|i| &self.store.houses()[i])
    }
}
