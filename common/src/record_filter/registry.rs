//! Category → matching rule tables, one per catalog kind.

use crate::{catalog::{CatalogKind, CatalogRecord}, search_category::SearchCategory};

use super::legacy;

/// Heuristic used for a record that has no `searchTags`. Receives the raw option.
pub type LegacyMatcher = fn(&CatalogRecord, &str) -> bool;

#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: SearchCategory,
    pub legacy: Option<LegacyMatcher>,
}

#[derive(Debug)]
pub struct MatcherRegistry {
    rules: &'static [CategoryRule],
}

static PLACE_RULES: [CategoryRule; 3] = [
    CategoryRule { category: SearchCategory::Grade, legacy: None },
    CategoryRule { category: SearchCategory::Situation, legacy: None },
    CategoryRule { category: SearchCategory::Facility, legacy: None },
];

static SCHOOL_PATH_RULES: [CategoryRule; 5] = [
    CategoryRule { category: SearchCategory::Type, legacy: Some(legacy::school_type) },
    CategoryRule { category: SearchCategory::Style, legacy: Some(legacy::class_style) },
    CategoryRule { category: SearchCategory::Frequency, legacy: Some(legacy::attendance_frequency) },
    CategoryRule { category: SearchCategory::Exam, legacy: Some(legacy::entrance_exam) },
    CategoryRule { category: SearchCategory::Location, legacy: Some(legacy::campus_location) },
];

static PLACES: MatcherRegistry = MatcherRegistry { rules: &PLACE_RULES };
static SCHOOL_PATHS: MatcherRegistry = MatcherRegistry { rules: &SCHOOL_PATH_RULES };

impl MatcherRegistry {
    pub const fn from_rules(rules: &'static [CategoryRule]) -> Self {
        Self { rules }
    }

    pub fn for_kind(kind: CatalogKind) -> &'static MatcherRegistry {
        match kind {
            CatalogKind::Places => &PLACES,
            CatalogKind::SchoolPaths => &SCHOOL_PATHS,
        }
    }

    pub fn rule(&self, category: SearchCategory) -> Option<&CategoryRule> {
        self.rules.iter().find(|r| r.category == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = SearchCategory> + '_ {
        self.rules.iter().map(|r| r.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registries_cover_their_panels() {
        use crate::filter_panel::FilterPanelConfig;

        let places = MatcherRegistry::for_kind(CatalogKind::Places);
        for group in FilterPanelConfig::places_panel().groups {
            assert!(places.rule(group.category).is_some());
        }
        let schools = MatcherRegistry::for_kind(CatalogKind::SchoolPaths);
        for group in FilterPanelConfig::school_paths_panel().groups {
            assert!(schools.rule(group.category).is_some_and(|r| r.legacy.is_some()));
        }
    }

    #[test]
    fn custom_registry_from_static_rules() {
        static RULES: [CategoryRule; 1] = [CategoryRule { category: SearchCategory::Period, legacy: None }];
        let registry = MatcherRegistry::from_rules(&RULES);
        assert_eq!(registry.categories().collect::<Vec<_>>(), vec![SearchCategory::Period]);
        assert!(registry.rule(SearchCategory::Grade).is_none());
    }
}
