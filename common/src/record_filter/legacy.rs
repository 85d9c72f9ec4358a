//! Matching for school-path records that predate structured `searchTags`.
//!
//! Each option is mapped by hand onto substrings of a free-text `detailInfo`
//! field. The mappings only know the options offered by the school-path panel.

use crate::{catalog::CatalogRecord, text_normalize::{normalize_optional_text, normalize_text}};

const OTHER: &str = "その他";

fn detail(record: &CatalogRecord, field: &str) -> String {
    normalize_optional_text(record.detail(field))
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// 形態: joined display tags, the `suggestion` field, or the title.
pub(super) fn school_type(record: &CatalogRecord, option: &str) -> bool {
    let option = normalize_text(option);
    let tags = normalize_text(&record.tags.concat());
    tags.contains(&option) || detail(record, "suggestion").contains(&option) || normalize_text(&record.title).contains(&option)
}

/// 授業スタイル
pub(super) fn class_style(record: &CatalogRecord, option: &str) -> bool {
    if option == OTHER {
        return false;
    }
    detail(record, "style").contains(&normalize_text(option))
}

/// 登校頻度
pub(super) fn attendance_frequency(record: &CatalogRecord, option: &str) -> bool {
    let frequency = detail(record, "frequency");
    if option.contains("週1~5") {
        return contains_any(&frequency, &["週1", "週one", "週１"]);
    }
    if option.contains("宿泊なし") {
        return contains_any(&frequency, &["宿泊なし", "宿泊無し"]);
    }
    if option == OTHER {
        return false;
    }
    frequency.contains(&normalize_text(option))
}

/// 入試の有無
pub(super) fn entrance_exam(record: &CatalogRecord, option: &str) -> bool {
    let exam = detail(record, "exam");
    if option == "試験なし" {
        return contains_any(&exam, &["なし", "ありません"]);
    }
    if option.contains("面接のみ") {
        return exam.contains("面接");
    }
    if option.contains("書類のみ") {
        return exam.contains("書類");
    }
    if option == OTHER {
        return false;
    }
    exam.contains(&normalize_text(option))
}

/// 本校所在地
pub(super) fn campus_location(record: &CatalogRecord, option: &str) -> bool {
    let location = detail(record, "location");
    match option {
        "福井県内" => location.contains("福井"),
        "福井にキャンパスがある" => detail(record, "campus").contains("あり") || location.contains("福井"),
        "福井県外" => !location.contains("福井"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecordId;

    fn school(details: &[(&str, &str)]) -> CatalogRecord {
        CatalogRecord {
            id: RecordId::Int(1),
            title: "テスト高等学校".to_string(),
            tags: vec!["通信制高校".to_string()],
            detail_info: details.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn school_type_checks_tags_suggestion_and_title() {
        let record = school(&[("suggestion", "サポート校")]);
        assert!(school_type(&record, "通信制高校"));
        assert!(school_type(&record, "サポート校"));
        assert!(school_type(&record, "高等学校"));
        assert!(!school_type(&record, "定時制高校"));
    }

    #[test]
    fn style_other_never_matches() {
        let record = school(&[("style", "その他")]);
        assert!(!class_style(&record, "その他"));
        assert!(class_style(&school(&[("style", "オンライン中心")]), "オンライン"));
        assert!(!class_style(&school(&[]), "対面"));
    }

    #[test]
    fn frequency_hand_mapped_options() {
        assert!(attendance_frequency(&school(&[("frequency", "週１日から")]), "週1~5選択制登校"));
        // only a literal 週1 counts
        assert!(!attendance_frequency(&school(&[("frequency", "週3日")]), "週1~5選択制登校"));
        assert!(!attendance_frequency(&school(&[("frequency", "毎日")]), "週1~5選択制登校"));
        assert!(attendance_frequency(&school(&[("frequency", "年数回（宿泊無し）")]), "年数回のスクーリング(宿泊なし)"));
        assert!(attendance_frequency(&school(&[("frequency", "毎日登校")]), "毎日登校"));
        assert!(!attendance_frequency(&school(&[("frequency", "その他")]), "その他"));
    }

    #[test]
    fn exam_hand_mapped_options() {
        assert!(entrance_exam(&school(&[("exam", "入学試験はありません")]), "試験なし"));
        assert!(entrance_exam(&school(&[("exam", "なし")]), "試験なし"));
        assert!(entrance_exam(&school(&[("exam", "面接あり")]), "試験なし(面接のみ)"));
        assert!(!entrance_exam(&school(&[("exam", "面談")]), "試験なし(面接のみ)"));
        assert!(entrance_exam(&school(&[("exam", "書類選考")]), "試験なし(書類のみ)"));
        assert!(!entrance_exam(&school(&[("exam", "その他")]), "その他"));
    }

    #[test]
    fn location_hand_mapped_options() {
        let inside = school(&[("location", "福井県坂井市")]);
        let outside_with_campus = school(&[("location", "東京都"), ("campus", "福井にキャンパスあり")]);
        let outside = school(&[("location", "滋賀県"), ("campus", "なし")]);

        assert!(campus_location(&inside, "福井県内"));
        assert!(!campus_location(&outside, "福井県内"));
        assert!(campus_location(&outside_with_campus, "福井にキャンパスがある"));
        assert!(campus_location(&inside, "福井にキャンパスがある"));
        assert!(!campus_location(&outside, "福井にキャンパスがある"));
        assert!(campus_location(&outside, "福井県外"));
        assert!(!campus_location(&inside, "福井県外"));
        assert!(!campus_location(&inside, "その他"));
    }
}
