//! maester-query: Read-only query facade over the Maester dataset.
//!
//! Wraps an immutable [`Dataset`] and exposes the list/get operations plus
//! per-record derived fields, either as full views or through a single
//! field-resolution callback keyed by entity type and field name.

pub mod error;
pub mod load;
pub mod types;

pub use error::QueryError;
pub use types::{CharacterSummary, CharacterView, DatasetStats, EntityRef, HouseSummary, HouseView};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use maester_core::{Character, CharacterId, EntityKind, House, HouseId};
use maester_graph::relations;
use maester_graph::Dataset;

/// Derived fields the character callback understands.
pub const CHARACTER_FIELDS: &[&str] = &[
    "siblingIds",
    "spouseIds",
    "loverIds",
    "houseId",
    "siblings",
    "spouses",
    "lovers",
];

/// Derived fields the house callback understands.
pub const HOUSE_FIELDS: &[&str] = &[
    "allegianceHouseIds",
    "memberIds",
    "allegiances",
    "members",
    "image",
];

/// The query facade. Cheap to clone; every clone reads the same dataset.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    dataset: Arc<Dataset>,
    loaded_at: DateTime<Utc>,
}

impl QueryEngine {
    pub fn new(dataset: Dataset) -> Self {
        Self::from_shared(Arc::new(dataset))
    }

    pub fn from_shared(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            loaded_at: Utc::now(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    // ── Queries ──────────────────────────────────────────────────

    pub fn list_characters(&self) -> &[Character] {
        self.dataset.characters()
    }

    pub fn list_houses(&self) -> &[House] {
        self.dataset.houses()
    }

    /// Exact-name lookup; the first record in seed order wins.
    pub fn get_character(&self, name: &str) -> Option<&Character> {
        self.dataset.resolve_character_by_name(name)
    }

    /// Exact-name lookup; the first record in seed order wins.
    pub fn get_house(&self, name: &str) -> Option<&House> {
        self.dataset.resolve_house_by_name(name)
    }

    // ── Derived fields ───────────────────────────────────────────

    pub fn sibling_ids(&self, character: &Character) -> Vec<CharacterId> {
        relations::sibling_ids(&self.dataset, character)
    }

    pub fn spouse_ids(&self, character: &Character) -> Vec<CharacterId> {
        relations::spouse_ids(&self.dataset, character)
    }

    pub fn lover_ids(&self, character: &Character) -> Vec<CharacterId> {
        relations::lover_ids(&self.dataset, character)
    }

    pub fn house_id(&self, character: &Character) -> Option<HouseId> {
        relations::house_id(&self.dataset, character)
    }

    pub fn allegiance_house_ids(&self, house: &House) -> Vec<HouseId> {
        relations::allegiance_house_ids(&self.dataset, house)
    }

    pub fn member_ids(&self, house: &House) -> Vec<CharacterId> {
        relations::member_ids(&self.dataset, house)
    }

    // ── Views ────────────────────────────────────────────────────

    pub fn character_view(&self, character: &Character) -> CharacterView {
        let sibling_ids = self.sibling_ids(character);
        let spouse_ids = self.spouse_ids(character);
        let lover_ids = self.lover_ids(character);

        CharacterView {
            id: character.id.clone(),
            name: character.name.clone(),
            slug: character.slug.clone(),
            house: character.house.clone(),
            image: character.image.clone(),
            allegiances: character.allegiances.clone(),
            house_id: self.house_id(character),
            siblings: self.character_summaries(&sibling_ids),
            spouses: self.character_summaries(&spouse_ids),
            lovers: self.character_summaries(&lover_ids),
            sibling_ids,
            spouse_ids,
            lover_ids,
        }
    }

    pub fn house_view(&self, house: &House) -> HouseView {
        let allegiance_house_ids = self.allegiance_house_ids(house);
        let member_ids = self.member_ids(house);

        HouseView {
            id: house.id.clone(),
            name: house.name.clone(),
            words: house.words.clone(),
            region: house.region.clone(),
            image: house.logo_url.clone(),
            allegiances: self.house_summaries(&allegiance_house_ids),
            members: self.character_summaries(&member_ids),
            allegiance_house_ids,
            member_ids,
        }
    }

    /// Resolve one derived field of a record to JSON.
    ///
    /// Unknown field names are an error; a field that simply has no match
    /// resolves to `null` or `[]`.
    pub fn resolve_field(&self, entity: EntityRef<'_>, field: &str) -> error::Result<Value> {
        let value = match entity {
            EntityRef::Character(c) => match field {
                "siblingIds" => serde_json::to_value(self.sibling_ids(c))?,
                "spouseIds" => serde_json::to_value(self.spouse_ids(c))?,
                "loverIds" => serde_json::to_value(self.lover_ids(c))?,
                "houseId" => serde_json::to_value(self.house_id(c))?,
                "siblings" => serde_json::to_value(self.character_summaries(&self.sibling_ids(c)))?,
                "spouses" => serde_json::to_value(self.character_summaries(&self.spouse_ids(c)))?,
                "lovers" => serde_json::to_value(self.character_summaries(&self.lover_ids(c)))?,
                _ => return Err(unknown_field(EntityKind::Character, field)),
            },
            EntityRef::House(h) => match field {
                "allegianceHouseIds" => serde_json::to_value(self.allegiance_house_ids(h))?,
                "memberIds" => serde_json::to_value(self.member_ids(h))?,
                "allegiances" => {
                    serde_json::to_value(self.house_summaries(&self.allegiance_house_ids(h)))?
                }
                "members" => serde_json::to_value(self.character_summaries(&self.member_ids(h)))?,
                "image" => serde_json::to_value(&h.logo_url)?,
                _ => return Err(unknown_field(EntityKind::House, field)),
            },
        };

        tracing::debug!(field, "Field resolved");
        Ok(value)
    }

    /// Resolve `field` on the record named `name`.
    ///
    /// The field name is checked before the lookup, so a bad field is an
    /// error even when no record matches. A missing record yields `null`.
    pub fn resolve_named_field(
        &self,
        entity: EntityKind,
        name: &str,
        field: &str,
    ) -> error::Result<Value> {
        check_field(entity, field)?;

        let record = match entity {
            EntityKind::Character => self.get_character(name).map(EntityRef::Character),
            EntityKind::House => self.get_house(name).map(EntityRef::House),
        };
        match record {
            Some(record) => self.resolve_field(record, field),
            None => Ok(Value::Null),
        }
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            characters: self.dataset.characters().len(),
            houses: self.dataset.houses().len(),
            fingerprint: self.dataset.store().fingerprint().to_string(),
            loaded_at: self.loaded_at,
        }
    }

    fn character_summaries(&self, ids: &[CharacterId]) -> Vec<CharacterSummary> {
        ids.iter()
            .filter_map(|id| self.dataset.character(id))
            .map(CharacterSummary::from)
            .collect()
    }

    fn house_summaries(&self, ids: &[HouseId]) -> Vec<HouseSummary> {
        ids.iter()
            .filter_map(|id| self.dataset.house(id))
            .map(HouseSummary::from)
            .collect()
    }
}

/// Fail with `UnknownField` unless `field` is a derived field of `entity`.
pub fn check_field(entity: EntityKind, field: &str) -> error::Result<()> {
    let known = match entity {
        EntityKind::Character => CHARACTER_FIELDS,
        EntityKind::House => HOUSE_FIELDS,
    };
    if known.contains(&field) {
        Ok(())
    } else {
        Err(unknown_field(entity, field))
    }
}

fn unknown_field(entity: EntityKind, field: &str) -> QueryError {
    QueryError::UnknownField {
        entity,
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use maester_core::Alias;

    use super::*;

    fn engine() -> QueryEngine {
        let mut jon = Character::new("1", "Jon Snow", "jon-snow");
        jon.house = Some("Stark".to_string());
        jon.siblings = vec!["Sansa Stark".to_string()];
        jon.lovers = vec!["Ygritte".to_string()];
        jon.related = vec![
            Alias::new("Sansa Stark", "sansa-stark"),
            Alias::new("Ygritte", "ygritte"),
        ];

        let mut sansa = Character::new("2", "Sansa Stark", "sansa-stark");
        sansa.house = Some("Stark".to_string());

        let mut stark = House::new("4", "Stark");
        stark.allegiance = vec!["Tully".to_string()];
        stark.logo_url = Some("https://example.org/stark.png".to_string());

        let dataset = Dataset::from_records(
            vec![jon, sansa],
            vec![stark, House::new("5", "Tully")],
        )
        .unwrap();
        QueryEngine::new(dataset)
    }

    #[test]
    fn test_list_and_get() {
        let engine = engine();
        assert_eq!(engine.list_characters().len(), 2);
        assert_eq!(engine.list_houses().len(), 2);
        assert_eq!(engine.get_character("Sansa Stark").map(|c| c.id.as_str()), Some("2"));
        assert!(engine.get_character("Arya Stark").is_none());
        assert_eq!(engine.get_house("Tully").map(|h| h.id.as_str()), Some("5"));
    }

    #[test]
    fn test_character_view() {
        let engine = engine();
        let jon = engine.get_character("Jon Snow").unwrap();
        let view = engine.character_view(jon);

        assert_eq!(view.house_id, Some(HouseId::from("4")));
        assert_eq!(view.sibling_ids, vec![CharacterId::from("2")]);
        assert_eq!(view.siblings[0].name, "Sansa Stark");
        // Ygritte is aliased but has no record.
        assert!(view.lover_ids.is_empty());
        assert!(view.lovers.is_empty());
        assert!(view.spouses.is_empty());
    }

    #[test]
    fn test_house_view() {
        let engine = engine();
        let stark = engine.get_house("Stark").unwrap();
        let view = engine.house_view(stark);

        assert_eq!(view.allegiance_house_ids, vec![HouseId::from("5")]);
        assert_eq!(view.allegiances[0].name, "Tully");
        assert_eq!(
            view.member_ids,
            vec![CharacterId::from("1"), CharacterId::from("2")]
        );
        assert_eq!(view.image.as_deref(), Some("https://example.org/stark.png"));
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let engine = engine();
        let jon = engine.get_character("Jon Snow").unwrap();
        let json = serde_json::to_value(engine.character_view(jon)).unwrap();

        assert_eq!(json["houseId"], "4");
        assert_eq!(json["siblingIds"], serde_json::json!(["2"]));
        assert_eq!(json["siblings"][0]["slug"], "sansa-stark");
    }

    #[test]
    fn test_resolve_field() {
        let engine = engine();
        let jon = engine.get_character("Jon Snow").unwrap();
        let tully = engine.get_house("Tully").unwrap();

        let siblings = engine
            .resolve_field(EntityRef::Character(jon), "siblingIds")
            .unwrap();
        assert_eq!(siblings, serde_json::json!(["2"]));

        let members = engine.resolve_field(EntityRef::House(tully), "memberIds").unwrap();
        assert_eq!(members, serde_json::json!([]));

        let image = engine.resolve_field(EntityRef::House(tully), "image").unwrap();
        assert!(image.is_null());
    }

    #[test]
    fn test_every_listed_field_resolves() {
        let engine = engine();
        let jon = engine.get_character("Jon Snow").unwrap();
        let stark = engine.get_house("Stark").unwrap();

        for field in CHARACTER_FIELDS {
            assert!(engine.resolve_field(EntityRef::Character(jon), field).is_ok());
        }
        for field in HOUSE_FIELDS {
            assert!(engine.resolve_field(EntityRef::House(stark), field).is_ok());
        }
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let engine = engine();
        let jon = engine.get_character("Jon Snow").unwrap();

        let err = engine
            .resolve_field(EntityRef::Character(jon), "memberIds")
            .unwrap_err();
        assert!(matches!(
            err,
            QueryError::UnknownField {
                entity: EntityKind::Character,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Unknown field memberIds on Character");
    }

    #[test]
    fn test_check_field() {
        assert!(check_field(EntityKind::Character, "houseId").is_ok());
        assert!(check_field(EntityKind::House, "image").is_ok());
        assert!(check_field(EntityKind::House, "houseId").is_err());
        assert!(check_field(EntityKind::Character, "bogus").is_err());
    }

    #[test]
    fn test_named_field_on_missing_record() {
        let engine = engine();

        let value = engine
            .resolve_named_field(EntityKind::House, "Nope", "memberIds")
            .unwrap();
        assert!(value.is_null());

        let err = engine
            .resolve_named_field(EntityKind::House, "Nope", "bogus")
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown field bogus on House");

        let siblings = engine
            .resolve_named_field(EntityKind::Character, "Jon Snow", "siblingIds")
            .unwrap();
        assert_eq!(siblings, serde_json::json!(["2"]));
    }

    #[test]
    fn test_stats() {
        let engine = engine();
        let stats = engine.stats();
        assert_eq!(stats.characters, 2);
        assert_eq!(stats.houses, 2);
        assert_eq!(stats.fingerprint, engine.dataset().store().fingerprint());
    }
}
