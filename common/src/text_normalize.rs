//! Whitespace and case folding used for every comparison in the directory search.

/// Characters stripped before comparing: ASCII space, full-width space, tab, newline.
const STRIPPED_CHARS: [char; 4] = [' ', '\u{3000}', '\t', '\n'];

/// Removes all spacing characters and lower-cases the rest.
///
/// The result is only ever used for comparison, never for display.
pub fn normalize_text(input: &str) -> String {
    input
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Same as [`normalize_text`], with a missing value normalizing to `""`.
pub fn normalize_optional_text(input: Option<&str>) -> String {
    input.map(normalize_text).unwrap_or_default()
}

/// True when either normalized string contains the other.
pub fn bidirectional_contains(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_half_and_full_width_spaces() {
        assert_eq!(normalize_text("　ざ だん  かい"), "ざだんかい");
        assert_eq!(normalize_text("a\tb\nc"), "abc");
    }

    #[test]
    fn lower_cases_ascii_and_full_width() {
        assert_eq!(normalize_text("ICT Ｆ"), "ictｆ");
    }

    #[test]
    fn keeps_other_characters() {
        assert_eq!(normalize_text("週1~5選択制登校"), "週1~5選択制登校");
        // carriage return is not in the stripped set
        assert_eq!(normalize_text("a\rb"), "a\rb");
    }

    #[test]
    fn missing_input_is_empty() {
        assert_eq!(normalize_optional_text(None), "");
        assert_eq!(normalize_optional_text(Some(" X ")), "x");
    }

    #[test]
    fn containment_either_way() {
        assert!(bidirectional_contains("フリースクール", "スクール"));
        assert!(bidirectional_contains("スクール", "フリースクール"));
        assert!(!bidirectional_contains("塾", "フリースクール"));
    }
}
