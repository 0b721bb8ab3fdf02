//! Immutable in-memory collections of characters and houses.
//!
//! Construction is the only fallible step in the whole resolution pipeline:
//! it rejects seed data that would make an identifier ambiguous. Everything
//! downstream is infallible.

use std::collections::HashSet;

use serde::Serialize;

use maester_core::{Character, EntityKind, House};

/// Errors raised while building the entity store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: EntityKind, id: String },

    #[error("Duplicate character slug: {slug}")]
    DuplicateSlug { slug: String },

    #[error("Failed to parse {entity} seed data: {source}")]
    Parse {
        entity: EntityKind,
        #[source]
        source: serde_json::Error,
    },
}

/// The loaded dataset, in seed order.
#[derive(Debug, Clone)]
pub struct EntityStore {
    characters: Vec<Character>,
    houses: Vec<House>,
    fingerprint: String,
}

impl EntityStore {
    /// Build the store, enforcing unique character ids, house ids, and slugs.
    pub fn new(characters: Vec<Character>, houses: Vec<House>) -> Result<Self, StoreError> {
        let mut ids = HashSet::with_capacity(characters.len());
        let mut slugs = HashSet::with_capacity(characters.len());
        for c in &characters {
            if !ids.insert(&c.id) {
                return Err(StoreError::DuplicateId {
                    entity: EntityKind::Character,
                    id: c.id.to_string(),
                });
            }
            if !slugs.insert(c.slug.as_str()) {
                return Err(StoreError::DuplicateSlug {
                    slug: c.slug.clone(),
                });
            }
        }

        let mut house_ids = HashSet::with_capacity(houses.len());
        for h in &houses {
            if !house_ids.insert(&h.id) {
                return Err(StoreError::DuplicateId {
                    entity: EntityKind::House,
                    id: h.id.to_string(),
                });
            }
        }

        let fingerprint = compute_fingerprint(&characters, &houses);
        Ok(Self {
            characters,
            houses,
            fingerprint,
        })
    }

    /// Parse two JSON arrays (characters, houses) and build the store.
    pub fn from_json(characters_json: &str, houses_json: &str) -> Result<Self, StoreError> {
        let characters: Vec<Character> =
            serde_json::from_str(characters_json).map_err(|source| StoreError::Parse {
                entity: EntityKind::Character,
                source,
            })?;
        let houses: Vec<House> =
            serde_json::from_str(houses_json).map_err(|source| StoreError::Parse {
                entity: EntityKind::House,
                source,
            })?;
        Self::new(characters, houses)
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    /// BLAKE3 hex digest of the dataset's canonical JSON.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

#[derive(Serialize)]
struct HashableDataset<'a> {
    characters: &'a [Character],
    houses: &'a [House],
}

fn compute_fingerprint(characters: &[Character], houses: &[House]) -> String {
    let hashable = HashableDataset { characters, houses };
    let json = serde_json::to_vec(&hashable).expect("Dataset serialization should not fail");
    blake3::hash(&json).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicate_slug() {
        let characters = vec![
            Character::new("1", "Jon Snow", "jon-snow"),
            Character::new("2", "Aegon Targaryen", "jon-snow"),
        ];

        let err = EntityStore::new(characters, vec![]).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSlug { ref slug } if slug == "jon-snow"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let characters = vec![
            Character::new("1", "Jon Snow", "jon-snow"),
            Character::new("1", "Sansa Stark", "sansa-stark"),
        ];
        let err = EntityStore::new(characters, vec![]).unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateId {
                entity: EntityKind::Character,
                ..
            }
        ));

        let houses = vec![House::new("5", "Tully"), House::new("5", "Stark")];
        let err = EntityStore::new(vec![], houses).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate House id: 5");
    }

    #[test]
    fn test_duplicate_names_are_accepted() {
        let characters = vec![
            Character::new("1", "Brandon Stark", "brandon-stark"),
            Character::new("2", "Brandon Stark", "bran-stark"),
        ];
        let houses = vec![House::new("1", "Stark"), House::new("2", "Stark")];

        let store = EntityStore::new(characters, houses).unwrap();
        assert_eq!(store.characters().len(), 2);
        assert_eq!(store.houses().len(), 2);
    }

    #[test]
    fn test_from_json_reports_entity_on_parse_error() {
        let err = EntityStore::from_json("[]", "{not json").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Parse {
                entity: EntityKind::House,
                ..
            }
        ));
    }

    #[test]
    fn test_fingerprint_is_stable_and_content_sensitive() {
        let a = EntityStore::new(vec![Character::new("1", "Jon Snow", "jon-snow")], vec![]).unwrap();
        let b = EntityStore::new(vec![Character::new("1", "Jon Snow", "jon-snow")], vec![]).unwrap();
        let c = EntityStore::new(vec![Character::new("1", "Jon Stark", "jon-snow")], vec![]).unwrap();

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }
}
