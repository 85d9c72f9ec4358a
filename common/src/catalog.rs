//! Catalog records for the places and school-path directories, and the
//! read-only catalog that owns them.

use std::{collections::HashSet, fmt::Display};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::search_category::SearchCategory;

const BUNDLED_PLACES_JSON: &str = include_str!("../data/places.json");
const BUNDLED_SCHOOL_PATHS_JSON: &str = include_str!("../data/schools.json");


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum RecordId {
    Int(u64),
    Text(String),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// `null` and missing fields both become the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Canonical tags per category, the structured search representation of a record.
/// Keeps the key order of the source JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchTags(pub IndexMap<SearchCategory, Vec<String>>);

impl SearchTags {
    /// Tags recorded for `category`; empty when the key is absent.
    pub fn tags_for(&self, category: SearchCategory) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn flattened(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }
}

impl<const N: usize> From<[(SearchCategory, Vec<&str>); N]> for SearchTags {
    fn from(value: [(SearchCategory, Vec<&str>); N]) -> Self {
        Self(
            value
                .into_iter()
                .map(|(k, v)| (k, v.into_iter().map(String::from).collect()))
                .collect(),
        )
    }
}

/// One place or school-path entry. Both directories share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub detail_info: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_tags: Option<SearchTags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}

impl CatalogRecord {
    /// Records from older catalog revisions carry no `searchTags` at all.
    pub fn has_structured_tags(&self) -> bool {
        self.search_tags.is_some()
    }

    pub fn detail(&self, field: &str) -> Option<&str> {
        self.detail_info.get(field).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogKind {
    Places,
    SchoolPaths,
}

impl CatalogKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Places => "居場所",
            Self::SchoolPaths => "卒業後の進路",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse {kind:?} catalog: {source}")]
    Parse {
        kind: CatalogKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0:?} catalog is empty")]
    Empty(CatalogKind),
    #[error("{kind:?} catalog has duplicate record id {id}")]
    DuplicateId { kind: CatalogKind, id: RecordId },
}

/// Immutable record collection, constructed once and handed to whoever needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    kind: CatalogKind,
    records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn new(kind: CatalogKind, records: Vec<CatalogRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty(kind));
        }
        // ids are looked up by their text form, so 12 and "12" collide
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.to_string()) {
                return Err(CatalogError::DuplicateId { kind, id: record.id.clone() });
            }
        }
        Ok(Self { kind, records })
    }

    pub fn from_json(kind: CatalogKind, text: &str) -> Result<Self, CatalogError> {
        let records: Vec<CatalogRecord> =
            serde_json::from_str(text).map_err(|source| CatalogError::Parse { kind, source })?;
        Self::new(kind, records)
    }

    /// The catalog compiled into the binary for `kind`.
    pub fn bundled(kind: CatalogKind) -> Result<Self, CatalogError> {
        let text = match kind {
            CatalogKind::Places => BUNDLED_PLACES_JSON,
            CatalogKind::SchoolPaths => BUNDLED_SCHOOL_PATHS_JSON,
        };
        let catalog = Self::from_json(kind, text)?;
        tracing::debug!("loaded {:?} catalog with {} records", kind, catalog.len());
        Ok(catalog)
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lookup by the textual form of an id, as it arrives from a URL.
    pub fn find_by_key(&self, key: &str) -> Option<&CatalogRecord> {
        self.records.iter().find(|r| r.id.to_string() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalogs_load() {
        let places = Catalog::bundled(CatalogKind::Places).unwrap();
        assert_eq!(places.len(), 11);
        assert!(places.records().iter().all(|r| r.has_structured_tags()));

        let schools = Catalog::bundled(CatalogKind::SchoolPaths).unwrap();
        assert!(schools.records().iter().any(|r| !r.has_structured_tags()));
    }

    #[test]
    fn missing_and_null_fields_default_to_empty() {
        let text = r#"[{"id": "a", "title": null, "detailInfo": null}]"#;
        let catalog = Catalog::from_json(CatalogKind::Places, text).unwrap();
        let record = &catalog.records()[0];
        assert_eq!(record.title, "");
        assert_eq!(record.body, "");
        assert!(record.tags.is_empty());
        assert!(record.detail_info.is_empty());
        assert!(!record.has_structured_tags());
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = Catalog::from_json(CatalogKind::SchoolPaths, "[]").unwrap_err();
        assert!(matches!(err, CatalogError::Empty(CatalogKind::SchoolPaths)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let text = r#"[{"id": 3, "title": "a"}, {"id": 3, "title": "b"}]"#;
        let err = Catalog::from_json(CatalogKind::Places, text).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id: RecordId::Int(3), .. }));
    }

    #[test]
    fn rejects_unknown_search_tag_category() {
        let text = r#"[{"id": 1, "searchTags": {"colour": ["red"]}}]"#;
        let err = Catalog::from_json(CatalogKind::Places, text).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn find_by_url_key() {
        let places = Catalog::bundled(CatalogKind::Places).unwrap();
        let record = places.find_by_key("2").unwrap();
        assert_eq!(record.title, "とまり木");
        assert_eq!(record.id, RecordId::Int(2));
        assert!(places.find_by_key("999").is_none());
    }

    #[test]
    fn numeric_looking_text_id_is_found_by_url_key() {
        let catalog = Catalog::from_json(CatalogKind::Places, r#"[{"id": "12", "title": "文字列ID"}]"#).unwrap();
        assert_eq!(catalog.records()[0].id, RecordId::Text("12".to_string()));
        let record = catalog.find_by_key("12").unwrap();
        assert_eq!(record.title, "文字列ID");
    }

    #[test]
    fn int_and_text_ids_with_same_key_collide() {
        let text = r#"[{"id": 12, "title": "a"}, {"id": "12", "title": "b"}]"#;
        let err = Catalog::from_json(CatalogKind::Places, text).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
    }

    #[test]
    fn absent_category_has_no_tags() {
        let tags = SearchTags::from([(SearchCategory::Grade, vec!["小学生から"])]);
        assert!(tags.tags_for(SearchCategory::Facility).is_empty());
        assert_eq!(tags.flattened().collect::<Vec<_>>(), vec!["小学生から"]);
    }
}
