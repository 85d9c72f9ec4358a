use common::{
    catalog::{Catalog, CatalogKind, CatalogRecord},
    filter_selection::FilterSelection,
    record_filter::searchable_text,
    search_category::SearchCategory,
    text_normalize::normalize_text,
};

fn ids(records: &[&CatalogRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.to_string()).collect()
}

fn catalogs() -> Vec<Catalog> {
    vec![
        Catalog::bundled(CatalogKind::Places).unwrap(),
        Catalog::bundled(CatalogKind::SchoolPaths).unwrap(),
    ]
}

#[test]
fn empty_selection_returns_whole_catalog_in_order() {
    for catalog in catalogs() {
        let result = catalog.filter(&FilterSelection::default());
        let expected: Vec<&CatalogRecord> = catalog.records().iter().collect();
        assert_eq!(result, expected);
    }
}

#[test]
fn single_record_keyword_result_agrees_with_searchable_text() {
    let keywords = ["座談会", "福井", "オンライン", "ICT", "無料", "存在しない文字列", "通信 制"];
    for catalog in catalogs() {
        for record in catalog.records() {
            let single = Catalog::new(catalog.kind(), vec![record.clone()]).unwrap();
            for keyword in keywords {
                let kept = !single.filter(&FilterSelection::with_keyword(keyword)).is_empty();
                let contained = searchable_text(record).contains(&normalize_text(keyword));
                assert_eq!(kept, contained, "record {} keyword {}", record.id, keyword);
            }
        }
    }
}

#[test]
fn filtering_is_idempotent_and_order_preserving() {
    let catalog = Catalog::bundled(CatalogKind::Places).unwrap();
    let mut selection = FilterSelection::with_keyword("福井");
    selection.set_options(SearchCategory::Grade, ["小学生から", "中学生から"]);

    let first = catalog.filter(&selection);
    let second = catalog.filter(&selection);
    assert_eq!(ids(&first), ids(&second));

    let positions: Vec<usize> = first
        .iter()
        .map(|r| catalog.records().iter().position(|c| c.id == r.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn categories_combine_with_and() {
    let catalog = Catalog::bundled(CatalogKind::Places).unwrap();

    let mut only_grade = FilterSelection::default();
    only_grade.set_options(SearchCategory::Grade, ["卒業している場合"]);
    assert!(ids(&catalog.filter(&only_grade)).contains(&"2".to_string()));

    let mut both = only_grade.clone();
    both.set_options(SearchCategory::Facility, ["習い事"]);
    assert!(!ids(&catalog.filter(&both)).contains(&"2".to_string()));
}

#[test]
fn options_within_a_category_combine_with_or() {
    let catalog = Catalog::bundled(CatalogKind::Places).unwrap();
    let mut one = FilterSelection::default();
    one.set_options(SearchCategory::Facility, ["習い事"]);
    let mut two = FilterSelection::default();
    two.set_options(SearchCategory::Facility, ["習い事", "サークル"]);
    assert!(catalog.filter(&two).len() > catalog.filter(&one).len());
}

#[test]
fn keyword_with_mixed_spacing_matches() {
    let catalog = Catalog::bundled(CatalogKind::Places).unwrap();
    let result = catalog.filter(&FilterSelection::with_keyword("　座 談  会"));
    assert!(result.iter().any(|r| r.title == "とまり木"));
}

#[test]
fn school_paths_mix_structured_and_legacy_records() {
    let catalog = Catalog::bundled(CatalogKind::SchoolPaths).unwrap();

    let mut exam = FilterSelection::default();
    exam.set_options(SearchCategory::Exam, ["試験なし"]);
    // 2 and 3 through structured tags containing the option, 4 and 5 through the legacy text
    assert_eq!(ids(&catalog.filter(&exam)), vec!["2", "3", "4", "5"]);

    let mut frequency = FilterSelection::default();
    frequency.set_options(SearchCategory::Frequency, ["週1~5選択制登校"]);
    assert_eq!(ids(&catalog.filter(&frequency)), vec!["3", "5"]);

    let mut outside = FilterSelection::default();
    outside.set_options(SearchCategory::Location, ["福井県外"]);
    assert_eq!(ids(&catalog.filter(&outside)), vec!["2", "4"]);
}

#[test]
fn period_selection_excludes_directory_records() {
    let catalog = Catalog::bundled(CatalogKind::Places).unwrap();
    let mut selection = FilterSelection::default();
    selection.set_options(SearchCategory::Period, ["混乱期"]);
    assert!(catalog.filter(&selection).is_empty());
}
