//! Keyword and category filtering over a catalog.
//!
//! Two stages, both of which a record must pass:
//! - stage A: the normalized keyword is a substring of the record's searchable text;
//! - stage B: for every active category, at least one selected option matches
//!   at least one of the record's tags in that category.
//!
//! Filtering never reorders records and never fails; missing fields simply do not match.

mod legacy;
mod registry;

pub use registry::{CategoryRule, LegacyMatcher, MatcherRegistry};

use std::collections::BTreeSet;

use crate::{
    catalog::{Catalog, CatalogRecord},
    filter_selection::{CategorySelection, FilterSelection},
    search_category::SearchCategory,
    text_normalize::{bidirectional_contains, normalize_text},
};


/// Normalized concatenation of everything stage A searches. Detail fields and
/// search tags are joined in the order the catalog JSON lists them.
pub fn searchable_text(record: &CatalogRecord) -> String {
    let mut text = String::new();
    text.push_str(&record.title);
    text.push_str(&record.body);
    text.push_str(&record.tags.concat());
    for value in record.detail_info.values() {
        text.push_str(value);
    }
    if let Some(search_tags) = &record.search_tags {
        for tag in search_tags.flattened() {
            text.push_str(tag);
        }
    }
    normalize_text(&text)
}

/// Stage A for a single record. `term` must already be normalized and non-empty.
fn matches_keyword(record: &CatalogRecord, term: &str) -> bool {
    searchable_text(record).contains(term)
}

/// Structured-tag match: any option against any tag, containment in either direction.
pub fn tags_match_options(tags: &[String], options: &BTreeSet<String>) -> bool {
    options.iter().any(|option| {
        let option = normalize_text(option);
        tags.iter().any(|tag| bidirectional_contains(&normalize_text(tag), &option))
    })
}

impl MatcherRegistry {
    /// Stage B for a single record and category.
    pub fn matches_category(&self, record: &CatalogRecord, category: SearchCategory, options: &BTreeSet<String>) -> bool {
        let Some(rule) = self.rule(category) else {
            return false;
        };
        match &record.search_tags {
            Some(search_tags) => tags_match_options(search_tags.tags_for(category), options),
            None => match rule.legacy {
                Some(legacy) => options.iter().any(|option| legacy(record, option)),
                None => false,
            },
        }
    }
}

pub fn filter_records<'a>(
    records: &'a [CatalogRecord],
    keyword: &str,
    selection: &CategorySelection,
    registry: &MatcherRegistry,
) -> Vec<&'a CatalogRecord> {
    tracing::debug!("filtering {} records: keyword={:?} selection={:?}", records.len(), keyword, selection);
    let mut results: Vec<&CatalogRecord> = records.iter().collect();

    let term = normalize_text(keyword);
    if !term.is_empty() {
        results.retain(|record| matches_keyword(record, &term));
    }

    for (category, options) in selection.iter().filter(|(_, o)| !o.is_empty()) {
        tracing::debug!("narrowing by {}: {:?}", category, options);
        results.retain(|record| registry.matches_category(record, *category, options));
    }

    tracing::debug!("filter result: {} records", results.len());
    results
}

impl Catalog {
    pub fn registry(&self) -> &'static MatcherRegistry {
        MatcherRegistry::for_kind(self.kind())
    }

    /// Recomputed in full on every call; catalogs hold tens of records.
    pub fn filter(&self, selection: &FilterSelection) -> Vec<&CatalogRecord> {
        filter_records(self.records(), &selection.keyword, &selection.categories, self.registry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogKind, RecordId, SearchTags};

    fn place(id: u64, title: &str, body: &str, search_tags: Option<SearchTags>) -> CatalogRecord {
        CatalogRecord {
            id: RecordId::Int(id),
            title: title.to_string(),
            body: body.to_string(),
            search_tags,
            ..Default::default()
        }
    }

    fn selection(pairs: &[(SearchCategory, &[&str])]) -> CategorySelection {
        pairs
            .iter()
            .map(|(c, opts)| (*c, opts.iter().map(|s| s.to_string()).collect()))
            .collect()
    }

    #[test]
    fn facility_filter_on_structured_tags() {
        let records = vec![place(1, "a", "", Some(SearchTags::from([(SearchCategory::Facility, vec!["フリースクール"])])))];
        let registry = MatcherRegistry::for_kind(CatalogKind::Places);

        let hit = filter_records(&records, "", &selection(&[(SearchCategory::Facility, &["フリースクール"])]), registry);
        assert_eq!(hit.len(), 1);

        let miss = filter_records(&records, "", &selection(&[(SearchCategory::Facility, &["塾"])]), registry);
        assert!(miss.is_empty());
    }

    #[test]
    fn keyword_matches_body_text() {
        let records = vec![place(2, "とまり木", "お母さん向けに座談会をしています", None)];
        let registry = MatcherRegistry::for_kind(CatalogKind::Places);
        assert_eq!(filter_records(&records, "座談会", &CategorySelection::new(), registry).len(), 1);
        assert!(filter_records(&records, "存在しない文字列", &CategorySelection::new(), registry).is_empty());
    }

    #[test]
    fn keyword_ignores_spacing() {
        let records = vec![place(2, "とまり木", "座談会をしています", None)];
        let registry = MatcherRegistry::for_kind(CatalogKind::Places);
        assert_eq!(filter_records(&records, "　座 談  会", &CategorySelection::new(), registry).len(), 1);
    }

    #[test]
    fn keyword_searches_detail_info_and_search_tags() {
        let mut record = place(1, "a", "b", Some(SearchTags::from([(SearchCategory::Situation, vec!["友達をさがしたい"])])));
        record.detail_info.insert("fee".to_string(), "無料".to_string());
        let records = vec![record];
        let registry = MatcherRegistry::for_kind(CatalogKind::Places);
        assert_eq!(filter_records(&records, "無料", &CategorySelection::new(), registry).len(), 1);
        assert_eq!(filter_records(&records, "友達", &CategorySelection::new(), registry).len(), 1);
    }

    #[test]
    fn detail_fields_join_in_json_order() {
        let text = r#"[{"id": 1, "title": "", "detailInfo": {"location": "福井", "campus": "あり"}}]"#;
        let catalog = Catalog::from_json(CatalogKind::SchoolPaths, text).unwrap();
        assert!(searchable_text(&catalog.records()[0]).ends_with("福井あり"));
        let selection = FilterSelection::with_keyword("福井あり");
        assert_eq!(catalog.filter(&selection).len(), 1);
        assert!(catalog.filter(&FilterSelection::with_keyword("あり福井")).is_empty());
    }

    #[test]
    fn empty_tag_list_never_matches() {
        let records = vec![place(1, "a", "", Some(SearchTags::from([(SearchCategory::Grade, vec![])])))];
        let registry = MatcherRegistry::for_kind(CatalogKind::Places);
        let result = filter_records(&records, "", &selection(&[(SearchCategory::Grade, &["小学生から"])]), registry);
        assert!(result.is_empty());
    }

    #[test]
    fn places_without_search_tags_never_match_a_category() {
        let records = vec![place(1, "フリースクール", "", None)];
        let registry = MatcherRegistry::for_kind(CatalogKind::Places);
        let result = filter_records(&records, "", &selection(&[(SearchCategory::Facility, &["フリースクール"])]), registry);
        assert!(result.is_empty());
    }

    #[test]
    fn unregistered_category_excludes_everything() {
        let records = vec![place(1, "a", "", Some(SearchTags::from([(SearchCategory::Period, vec!["混乱期"])])))];
        let registry = MatcherRegistry::for_kind(CatalogKind::Places);
        let result = filter_records(&records, "", &selection(&[(SearchCategory::Period, &["混乱期"])]), registry);
        assert!(result.is_empty());
    }

    #[test]
    fn short_tag_matches_longer_option() {
        // a one-character tag is contained in many options; kept as observed
        let records = vec![place(1, "a", "", Some(SearchTags::from([(SearchCategory::Facility, vec!["塾"])])))];
        let registry = MatcherRegistry::for_kind(CatalogKind::Places);
        let result = filter_records(&records, "", &selection(&[(SearchCategory::Facility, &["学習塾・個別指導"])]), registry);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn catalog_filter_uses_its_own_registry() {
        let catalog = Catalog::bundled(CatalogKind::Places).unwrap();
        let mut selection = FilterSelection::default();
        selection.set_options(SearchCategory::Facility, ["サークル"]);
        let titles: Vec<_> = catalog.filter(&selection).iter().map(|r| r.title.as_str()).collect();
        assert!(titles.contains(&"とまり木"));
        assert!(!titles.contains(&"オルタナティブスクールちいさな学校ヒトツナガリ"));
    }
}
