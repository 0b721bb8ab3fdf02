//! Core domain types for the character and house dataset.
//!
//! Records are denormalized: relation fields hold display *names*, and the
//! per-character `related` alias table bridges those names to slugs. Nothing
//! here resolves anything; see `maester-graph` for that.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

// ── Identifiers ───────────────────────────────────────────────────

/// Unique identifier of a character record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterId(#[serde(deserialize_with = "string_or_integer")] pub String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier of a house record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HouseId(#[serde(deserialize_with = "string_or_integer")] pub String);

impl HouseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HouseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for HouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seed exports carry ids either as strings (document-store object ids) or
/// as plain integers. Both normalize to a string.
fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

// ── Records ───────────────────────────────────────────────────────

/// One entry of a character's alias table: a display name and the slug it
/// resolves to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub slug: String,
}

impl Alias {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// A character as it appears in the seed data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    #[serde(alias = "_id")]
    pub id: CharacterId,
    pub name: String,
    pub slug: String,
    /// Name of the character's house, if any.
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Free-text allegiance names, served verbatim.
    #[serde(default)]
    pub allegiances: Vec<String>,
    #[serde(default)]
    pub siblings: Vec<String>,
    #[serde(default)]
    pub spouse: Vec<String>,
    #[serde(default)]
    pub lovers: Vec<String>,
    #[serde(default)]
    pub related: Vec<Alias>,
}

impl Character {
    /// Minimal record with empty relation fields.
    pub fn new(
        id: impl Into<CharacterId>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            house: None,
            image: None,
            allegiances: Vec::new(),
            siblings: Vec::new(),
            spouse: Vec::new(),
            lovers: Vec::new(),
            related: Vec::new(),
        }
    }

    /// The name list backing an alias-resolved relation.
    pub fn relation_names(&self, relation: AliasRelation) -> &[String] {
        match relation {
            AliasRelation::Siblings => &self.siblings,
            AliasRelation::Spouses => &self.spouse,
            AliasRelation::Lovers => &self.lovers,
        }
    }
}

/// A house as it appears in the seed data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct House {
    #[serde(alias = "_id")]
    pub id: HouseId,
    pub name: String,
    #[serde(default)]
    pub words: Option<String>,
    #[serde(default)]
    pub region: Vec<String>,
    /// Names of the houses this house is sworn to.
    #[serde(default)]
    pub allegiance: Vec<String>,
    #[serde(default, rename = "logoURL")]
    pub logo_url: Option<String>,
}

impl House {
    pub fn new(id: impl Into<HouseId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            words: None,
            region: Vec::new(),
            allegiance: Vec::new(),
            logo_url: None,
        }
    }
}

// ── Relation Kinds ────────────────────────────────────────────────

/// Character relations resolved through the `related` alias table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AliasRelation {
    Siblings,
    Spouses,
    Lovers,
}

impl AliasRelation {
    pub const ALL: [AliasRelation; 3] = [Self::Siblings, Self::Spouses, Self::Lovers];
}

/// Every kind of derived edge in the dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Siblings,
    Spouses,
    Lovers,
    Allegiance,
    HouseMembership,
}

impl From<AliasRelation> for RelationKind {
    fn from(relation: AliasRelation) -> Self {
        match relation {
            AliasRelation::Siblings => Self::Siblings,
            AliasRelation::Spouses => Self::Spouses,
            AliasRelation::Lovers => Self::Lovers,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Siblings => "siblings",
            Self::Spouses => "spouses",
            Self::Lovers => "lovers",
            Self::Allegiance => "allegiance",
            Self::HouseMembership => "house_membership",
        };
        f.write_str(s)
    }
}

/// The entity types exposed to field-resolution callers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Character,
    House,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => f.write_str("Character"),
            Self::House => f.write_str("House"),
        }
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "character" | "characters" => Ok(Self::Character),
            "house" | "houses" => Ok(Self::House),
            other => Err(format!("unknown entity kind: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_accepts_document_store_ids() {
        let json = r#"{
            "_id": "5cc0743504e71a0010b852d9",
            "name": "Jon Snow",
            "slug": "Jon_Snow",
            "house": "House Stark",
            "siblings": ["Sansa Stark"],
            "related": [{"name": "Sansa Stark", "slug": "Sansa_Stark"}]
        }"#;

        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.id.as_str(), "5cc0743504e71a0010b852d9");
        assert_eq!(c.house.as_deref(), Some("House Stark"));
        assert!(c.spouse.is_empty());
        assert!(c.lovers.is_empty());
        assert_eq!(c.related[0].slug, "Sansa_Stark");
    }

    #[test]
    fn integer_ids_normalize_to_strings() {
        let h: House = serde_json::from_str(r#"{"id": 5, "name": "Tully"}"#).unwrap();
        assert_eq!(h.id, HouseId::from("5"));

        let json = serde_json::to_string(&h.id).unwrap();
        assert_eq!(json, "\"5\"");
    }

    #[test]
    fn house_logo_keeps_wire_spelling() {
        let h: House = serde_json::from_str(
            r#"{"id": "h1", "name": "Stark", "logoURL": "https://example.org/stark.png"}"#,
        )
        .unwrap();
        assert_eq!(h.logo_url.as_deref(), Some("https://example.org/stark.png"));

        let json = serde_json::to_string(&h).unwrap();
        assert!(json.contains("\"logoURL\""));
    }

    #[test]
    fn relation_names_follow_kind() {
        let mut c = Character::new("1", "Jon Snow", "jon-snow");
        c.siblings = vec!["Arya Stark".to_string()];
        c.spouse = vec!["Ygritte".to_string()];

        assert_eq!(c.relation_names(AliasRelation::Siblings), ["Arya Stark"]);
        assert_eq!(c.relation_names(AliasRelation::Spouses), ["Ygritte"]);
        assert!(c.relation_names(AliasRelation::Lovers).is_empty());
    }

    #[test]
    fn alias_relations_name_their_kind() {
        let kinds: Vec<String> = AliasRelation::ALL
            .into_iter()
            .map(|r| RelationKind::from(r).to_string())
            .collect();
        assert_eq!(kinds, ["siblings", "spouses", "lovers"]);
        assert_eq!(RelationKind::HouseMembership.to_string(), "house_membership");
    }
}
