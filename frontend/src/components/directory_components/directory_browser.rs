//! Keyword box, filter panel and result list over one bundled catalog.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_content_icons::MdFilterList;

use common::{
    catalog::{CatalogKind, CatalogRecord},
    filter_panel::{FilterPanelConfig, FilterPanelState},
    filter_selection::{CategorySelection, FilterSelection},
};

use crate::{
    components::directory_components::{
        filter_panel::FilterPanel, record_card::RecordCard, selection_chips::SelectionChips,
    },
    data_definitions::directory_catalogs::DirectoryCatalogs,
};


pub fn panel_config_for(kind: CatalogKind) -> FilterPanelConfig {
    match kind {
        CatalogKind::Places => FilterPanelConfig::places_panel(),
        CatalogKind::SchoolPaths => FilterPanelConfig::school_paths_panel(),
    }
}

/// With `live_keyword` every keystroke filters; otherwise the keyword is only
/// applied on Enter or the search button. `on_change` sees every applied selection.
#[component]
pub fn DirectoryBrowser(
    kind: CatalogKind,
    initial_selection: ReadSignal<FilterSelection>,
    live_keyword: bool,
    on_change: Option<Callback<FilterSelection>>,
) -> Element {
    let catalogs = use_context::<DirectoryCatalogs>();

    let mut selection = use_signal(|| initial_selection.read().clone());
    let mut keyword_draft = use_signal(|| initial_selection.read().keyword.clone());
    // the url may change under us without remounting
    use_effect(move || {
        let new_selection = initial_selection.read().clone();
        keyword_draft.set(new_selection.keyword.clone());
        selection.set(new_selection);
    });

    let mut apply_selection = move |next: FilterSelection| {
        if *selection.peek() == next {
            return;
        }
        selection.set(next.clone());
        if let Some(on_change) = on_change {
            on_change(next);
        }
    };

    let results = use_memo(move || {
        let catalog = catalogs.catalog(kind);
        catalog.filter(&selection.read()).into_iter().cloned().collect::<Vec<CatalogRecord>>()
    });

    let mut panel_open = use_signal(|| false);
    let mut panel_state = use_signal(FilterPanelState::default);
    let accent = panel_config_for(kind).accent_color;
    let kind_name = kind.display_name();

    let mut commit_keyword = move |_: ()| {
        let mut next = selection.read().clone();
        next.keyword = keyword_draft.read().clone();
        apply_selection(next);
    };
    let keyword_oninput = move |event: Event<FormData>| {
        let value = event.value();
        keyword_draft.set(value.clone());
        if live_keyword {
            let mut next = selection.read().clone();
            next.keyword = value;
            apply_selection(next);
        }
    };
    let keyword_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            commit_keyword(());
        }
    };

    let selected_count = use_memo(move || selection.read().selected_count());
    let result_count = use_memo(move || results.read().len());

    rsx! {
        div {
            id: "x-directory-browser",
            style: "display: flex; flex-direction: column; gap: 16px; padding: 24px; max-width: 960px; margin: 0 auto;",

            div {
                style: "display: flex; flex-direction: row; gap: 12px; align-items: center; flex-wrap: wrap;",
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        flex: 1;
                        min-width: 240px;
                        padding: 10px 14px;
                        border-radius: 9999px;
                        border: 1px solid rgba(101, 101, 101, 0.8);
                        background-color: white;
                    ",
                    button {
                        style: "border: none; background: none; cursor: pointer;",
                        onclick: move |_| commit_keyword(()),
                        Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: {accent};" }
                    }
                    input {
                        r#type: "text",
                        placeholder: "キーワードを入力",
                        style: "flex: 1; border: none; outline: none; background: transparent; font-size: 16px;",
                        value: "{keyword_draft}",
                        oninput: keyword_oninput,
                        onkeydown: keyword_onkeydown,
                    }
                }
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        padding: 10px 16px;
                        border-radius: 9999px;
                        border: 1px solid {accent};
                        background-color: white;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        panel_state.set(FilterPanelState::from_selection(&selection.read().categories));
                        panel_open.set(true);
                    },
                    Icon { icon: MdFilterList, style: "width: 20px; height: 20px;" }
                    if selected_count() > 0 {
                        "絞り込み ({selected_count})"
                    } else {
                        "絞り込み"
                    }
                }
            }

            SelectionChips {
                selection,
                on_change: move |next: FilterSelection| {
                    keyword_draft.set(next.keyword.clone());
                    apply_selection(next);
                },
            }

            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                span { style: "font-size: 14px; color: #555555;", "{result_count}件" }
                if !selection.read().is_unconstrained() {
                    button {
                        style: "border: none; background: none; cursor: pointer; text-decoration: underline; color: #555555;",
                        onclick: move |_| {
                            keyword_draft.set(String::new());
                            apply_selection(FilterSelection::default());
                        },
                        "条件をクリア"
                    }
                }
            }

            if results.read().is_empty() {
                div {
                    class: "x-no-results",
                    style: "padding: 32px; text-align: center; color: #555555;",
                    "条件に一致する{kind_name}が見つかりませんでした。"
                }
            } else {
                div {
                    style: "display: flex; flex-direction: column; gap: 12px;",
                    for record in results() {
                        RecordCard { key: "{record.id}", kind, record: record.clone() }
                    }
                }
            }
        }

        if panel_open() {
            FilterPanel {
                config: panel_config_for(kind),
                panel_state,
                on_apply: move |(_count, categories): (usize, CategorySelection)| {
                    let mut next = selection.read().clone();
                    next.categories = categories;
                    apply_selection(next);
                },
                on_close: move |_: ()| panel_open.set(false),
            }
        }
    }
}
