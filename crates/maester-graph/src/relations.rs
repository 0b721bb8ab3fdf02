//! Derived edges computed from name-based relation fields.
//!
//! Every function here is pure over `(&Dataset, record)` and never fails. A
//! name that cannot be matched yields no edge rather than an error, so stale
//! or incomplete seed data degrades to missing links.

use std::collections::HashSet;

use maester_core::{AliasRelation, Character, CharacterId, House, HouseId, RelationKind};

use crate::dataset::Dataset;

/// Resolve one of a character's alias-backed relations to character ids.
///
/// Filters the `related` alias table to entries whose name appears in the
/// relation's name list, then resolves each alias slug. Output follows
/// alias-table order; slugs that match no character are dropped.
pub fn alias_ids(
    dataset: &Dataset,
    character: &Character,
    relation: AliasRelation,
) -> Vec<CharacterId> {
    let names = character.relation_names(relation);
    if names.is_empty() {
        return Vec::new();
    }

    character
        .related
        .iter()
        .filter(|alias| names.contains(&alias.name))
        .filter_map(|alias| {
            let resolved = dataset.resolve_id_by_slug(&alias.slug);
            if resolved.is_none() {
                tracing::debug!(
                    character = %character.slug,
                    alias = %alias.slug,
                    relation = %RelationKind::from(relation),
                    "Alias slug did not resolve"
                );
            }
            resolved.cloned()
        })
        .collect()
}

pub fn sibling_ids(dataset: &Dataset, character: &Character) -> Vec<CharacterId> {
    alias_ids(dataset, character, AliasRelation::Siblings)
}

pub fn spouse_ids(dataset: &Dataset, character: &Character) -> Vec<CharacterId> {
    alias_ids(dataset, character, AliasRelation::Spouses)
}

pub fn lover_ids(dataset: &Dataset, character: &Character) -> Vec<CharacterId> {
    alias_ids(dataset, character, AliasRelation::Lovers)
}

/// The id of the house named by `character.house`, by exact name match.
pub fn house_id(dataset: &Dataset, character: &Character) -> Option<HouseId> {
    character
        .house
        .as_deref()
        .and_then(|name| dataset.resolve_house_by_name(name))
        .map(|h| h.id.clone())
}

/// Ids of the houses named in `house.allegiance`, in allegiance order.
/// A name listed twice contributes one id.
pub fn allegiance_house_ids(dataset: &Dataset, house: &House) -> Vec<HouseId> {
    let mut seen = HashSet::with_capacity(house.allegiance.len());
    house
        .allegiance
        .iter()
        .filter_map(|name| dataset.resolve_house_by_name(name))
        .filter(|h| seen.insert(&h.id))
        .map(|h| h.id.clone())
        .collect()
}

/// Ids of the characters whose house resolves to `house`, in seed order.
pub fn member_ids(dataset: &Dataset, house: &House) -> Vec<CharacterId> {
    dataset
        .characters()
        .iter()
        .filter(|c| house_id(dataset, c).as_ref() == Some(&house.id))
        .map(|c| c.id.clone())
        .collect()
}
