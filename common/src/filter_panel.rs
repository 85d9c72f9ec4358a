//! Filter panel definitions and the selection state the panel edits before
//! it is applied to a page.

use serde::{Deserialize, Serialize};

use crate::{filter_selection::CategorySelection, search_category::SearchCategory};

/// Options on the "時期で絞りこむ" tab. Only one may be selected at a time.
pub const PERIOD_OPTIONS: [&str; 4] = ["登校渋り期", "混乱期", "安定期", "回復期"];


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub title: String,
    pub category: SearchCategory,
    pub options: Vec<String>,
}

impl FilterGroup {
    fn new(title: &str, category: SearchCategory, options: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            category,
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPanelConfig {
    pub accent_color: String,
    pub groups: Vec<FilterGroup>,
}

impl FilterPanelConfig {
    pub fn places_panel() -> Self {
        Self {
            accent_color: "#88D3BC".to_string(),
            groups: vec![
                FilterGroup::new(
                    "お子さんの学年からさがす",
                    SearchCategory::Grade,
                    &["小学生から", "中学生から", "高校生から", "卒業している場合"],
                ),
                FilterGroup::new(
                    "状況からさがす",
                    SearchCategory::Situation,
                    &[
                        "進学したい",
                        "専門的なことを学びたい",
                        "一人で学習したい",
                        "オンラインで授業を受けたい",
                        "学校行事に参加したい",
                        "家以外の場所での居場所を見つけたい",
                        "外部とコミュニケーションを取れる場所に行きたい",
                        "不登校や子育てについて相談したい",
                        "不登校や子育ての未来について見失わない",
                        "不登校や子育てのイベントに参加したい",
                        "友達をさがしたい",
                    ],
                ),
                FilterGroup::new(
                    "施設の区分からさがす",
                    SearchCategory::Facility,
                    &["フリースクール", "塾", "オンラインサポート", "サークル", "オルタナティブスクール", "習い事", "イベント"],
                ),
            ],
        }
    }

    pub fn school_paths_panel() -> Self {
        Self {
            accent_color: "#79B5EE".to_string(),
            groups: vec![
                FilterGroup::new("形態からさがす", SearchCategory::Type, &["定時制高校", "通信制高校", "サポート校", "フリースクール"]),
                FilterGroup::new("授業スタイルからさがす", SearchCategory::Style, &["対面", "オンライン", "選択可能", "その他"]),
                FilterGroup::new(
                    "登校頻度からさがす",
                    SearchCategory::Frequency,
                    &["毎日登校", "週1~5選択制登校", "年数回のスクーリング(宿泊なし)", "年数回のスクーリング(宿泊あり)", "その他"],
                ),
                FilterGroup::new("入試の有無からさがす", SearchCategory::Exam, &["試験なし", "試験なし(面接のみ)", "試験なし(書類のみ)", "その他"]),
                FilterGroup::new("本校所在地からさがす", SearchCategory::Location, &["福井県内", "福井にキャンパスがある", "福井県外"]),
            ],
        }
    }

    pub fn experiences_panel() -> Self {
        Self {
            accent_color: "#EF9F94".to_string(),
            groups: vec![
                FilterGroup::new(
                    "初めて不登校になった学年",
                    SearchCategory::Grade,
                    &[
                        "小学校1年生", "小学校2年生", "小学校3年生", "小学校4年生", "小学校5年生", "小学校6年生",
                        "中学校1年生", "中学校2年生", "中学校3年生",
                    ],
                ),
                FilterGroup::new(
                    "不登校になったきっかけ",
                    SearchCategory::Trigger,
                    &["いじめ／友人関係", "勉強のつまずき", "発達特性・体調要因", "教師や学校との関係", "はっきりとした原因が無い", "その他"],
                ),
                FilterGroup::new(
                    "利用したサポートの種類",
                    SearchCategory::Support,
                    &[
                        "公的なフリースクール",
                        "スクールカウンセラー",
                        "学校内の支援教室（校内サポートルーム等）",
                        "スクールソーシャルワーカー",
                        "心のパートナー",
                        "行政の相談窓口",
                        "行政主催のお話会やイベント",
                        "民間のフリースクール",
                        "民間の学習支援",
                        "民間主催のお話会やイベント",
                        "民間の相談窓口",
                        "その他",
                    ],
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterPanelTab {
    #[default]
    Condition,
    Period,
}

impl FilterPanelTab {
    fn owns(&self, category: SearchCategory) -> bool {
        match self {
            Self::Condition => category != SearchCategory::Period,
            Self::Period => category == SearchCategory::Period,
        }
    }
}

/// Pending selection inside an open panel. Nothing reaches the page until [`apply`](Self::apply).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterPanelState {
    pub active_tab: FilterPanelTab,
    // insertion order is the chip display order
    selected: Vec<(SearchCategory, String)>,
}

impl FilterPanelState {
    /// Reopens the panel on an already applied selection. A period option puts
    /// the panel on the period tab.
    pub fn from_selection(selection: &CategorySelection) -> Self {
        let selected: Vec<(SearchCategory, String)> = selection
            .iter()
            .flat_map(|(category, options)| options.iter().map(move |o| (*category, o.clone())))
            .collect();
        let active_tab = if selected.iter().any(|(c, _)| *c == SearchCategory::Period) {
            FilterPanelTab::Period
        } else {
            FilterPanelTab::Condition
        };
        let mut state = Self { active_tab, selected };
        let tab = state.active_tab;
        state.selected.retain(|(c, _)| tab.owns(*c));
        state
    }

    pub fn selected(&self) -> &[(SearchCategory, String)] {
        &self.selected
    }

    pub fn is_selected(&self, category: SearchCategory, option: &str) -> bool {
        self.selected.iter().any(|(c, o)| *c == category && o == option)
    }

    pub fn toggle(&mut self, category: SearchCategory, option: &str) {
        if self.is_selected(category, option) {
            self.selected.retain(|(c, o)| !(*c == category && o == option));
            return;
        }
        if category == SearchCategory::Period {
            self.selected.retain(|(c, _)| *c != SearchCategory::Period);
        }
        self.selected.push((category, option.to_string()));
    }

    /// Switching tabs drops whatever was selected on the tab being left.
    pub fn switch_tab(&mut self, tab: FilterPanelTab) {
        if tab != self.active_tab {
            self.selected.retain(|(c, _)| tab.owns(*c));
        }
        self.active_tab = tab;
    }

    /// The `(selected_count, selection)` pair handed to the page.
    pub fn apply(&self) -> (usize, CategorySelection) {
        let mut selection = CategorySelection::new();
        for (category, option) in &self.selected {
            selection.entry(*category).or_default().insert(option.clone());
        }
        (self.selected.len(), selection)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
