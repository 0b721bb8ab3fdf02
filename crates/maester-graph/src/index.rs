//! Lookup indices over the entity store.
//!
//! Maps slugs, names, and ids to dense positions in the store's record
//! vectors so every resolution is a single hash lookup. Built once, O(n).
//!
//! When two records share a name, the first one in seed order owns the
//! name. Later duplicates stay reachable by id but never by name.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use maester_core::{CharacterId, HouseId};

use crate::store::EntityStore;

/// Position-based indices into an [`EntityStore`].
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    /// Character slug → character id.
    slug_to_id: HashMap<String, CharacterId>,
    /// Character name → position in `characters()`.
    character_by_name: HashMap<String, usize>,
    /// Character id → position in `characters()`.
    character_by_id: HashMap<CharacterId, usize>,
    /// House name → position in `houses()`.
    house_by_name: HashMap<String, usize>,
    /// House id → position in `houses()`.
    house_by_id: HashMap<HouseId, usize>,
}

impl NameIndex {
    pub fn build(store: &EntityStore) -> Self {
        let characters = store.characters();
        let houses = store.houses();

        let mut slug_to_id = HashMap::with_capacity(characters.len());
        let mut character_by_name = HashMap::with_capacity(characters.len());
        let mut character_by_id = HashMap::with_capacity(characters.len());

        for (i, c) in characters.iter().enumerate() {
            slug_to_id.insert(c.slug.clone(), c.id.clone());
            character_by_id.insert(c.id.clone(), i);

            match character_by_name.entry(c.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(first) => {
                    tracing::warn!(
                        name = %c.name,
                        kept = %characters[*first.get()].id,
                        ignored = %c.id,
                        "Duplicate character name; first occurrence wins"
                    );
                }
            }
        }

        let mut house_by_name = HashMap::with_capacity(houses.len());
        let mut house_by_id = HashMap::with_capacity(houses.len());

        for (i, h) in houses.iter().enumerate() {
            house_by_id.insert(h.id.clone(), i);

            match house_by_name.entry(h.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(first) => {
                    tracing::warn!(
                        name = %h.name,
                        kept = %houses[*first.get()].id,
                        ignored = %h.id,
                        "Duplicate house name; first occurrence wins"
                    );
                }
            }
        }

        Self {
            slug_to_id,
            character_by_name,
            character_by_id,
            house_by_name,
            house_by_id,
        }
    }

    pub fn id_for_slug(&self, slug: &str) -> Option<&CharacterId> {
        self.slug_to_id.get(slug)
    }

    pub fn character_position(&self, name: &str) -> Option<usize> {
        self.character_by_name.get(name).copied()
    }

    pub fn character_position_by_id(&self, id: &CharacterId) -> Option<usize> {
        self.character_by_id.get(id).copied()
    }

    pub fn house_position(&self, name: &str) -> Option<usize> {
        self.house_by_name.get(name).copied()
    }

    pub fn house_position_by_id(&self, id: &HouseId) -> Option<usize> {
        self.house_by_id.get(id).copied()
    }
}
