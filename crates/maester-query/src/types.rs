//! Response types served by the query facade.
//!
//! Field names are camelCase on the wire to match the dataset's public schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maester_core::{Character, CharacterId, House, HouseId};

/// A character with every derived field resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CharacterView {
    pub id: CharacterId,
    pub name: String,
    pub slug: String,
    pub house: Option<String>,
    pub image: Option<String>,
    pub allegiances: Vec<String>,
    pub house_id: Option<HouseId>,
    pub sibling_ids: Vec<CharacterId>,
    pub spouse_ids: Vec<CharacterId>,
    pub lover_ids: Vec<CharacterId>,
    pub siblings: Vec<CharacterSummary>,
    pub spouses: Vec<CharacterSummary>,
    pub lovers: Vec<CharacterSummary>,
}

/// A house with every derived field resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HouseView {
    pub id: HouseId,
    pub name: String,
    pub words: Option<String>,
    pub region: Vec<String>,
    /// Served from the record's `logoURL`.
    pub image: Option<String>,
    pub allegiance_house_ids: Vec<HouseId>,
    pub member_ids: Vec<CharacterId>,
    pub allegiances: Vec<HouseSummary>,
    pub members: Vec<CharacterSummary>,
}

/// Reference to a related character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterSummary {
    pub id: CharacterId,
    pub name: String,
    pub slug: String,
}

impl From<&Character> for CharacterSummary {
    fn from(c: &Character) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            slug: c.slug.clone(),
        }
    }
}

/// Reference to a related house.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HouseSummary {
    pub id: HouseId,
    pub name: String,
}

impl From<&House> for HouseSummary {
    fn from(h: &House) -> Self {
        Self {
            id: h.id.clone(),
            name: h.name.clone(),
        }
    }
}

/// A record handed to the field-resolution callback.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Character(&'a Character),
    House(&'a House),
}

/// Statistics about the loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub characters: usize,
    pub houses: usize,
    /// BLAKE3 hex digest of the seed data.
    pub fingerprint: String,
    pub loaded_at: DateTime<Utc>,
}
