//! Modal panel for picking filter options. Edits a pending
//! [`FilterPanelState`]; the page only sees the result when "決定" is pressed.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use common::{
    filter_panel::{FilterPanelConfig, FilterPanelState, FilterPanelTab, PERIOD_OPTIONS},
    filter_selection::CategorySelection,
    search_category::SearchCategory,
};


#[component]
pub fn FilterPanel(
    config: ReadSignal<FilterPanelConfig>,
    panel_state: Signal<FilterPanelState>,
    on_apply: Callback<(usize, CategorySelection)>,
    on_close: Callback<()>,
) -> Element {
    let accent = use_memo(move || config.read().accent_color.clone());
    let active_tab = use_memo(move || panel_state.read().active_tab);

    rsx! {
        div {
            style: "position: fixed; inset: 0; background-color: rgba(0,0,0,0.4); z-index: 999;",
            onclick: move |_| on_close(()),
        }
        div {
            id: "x-filter-panel",
            style: "
                position: fixed;
                top: 5vh;
                left: 50%;
                transform: translateX(-50%);
                width: min(640px, 92vw);
                max-height: 90vh;
                overflow-y: auto;
                background: white;
                border-radius: 16px;
                padding: 24px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                z-index: 1000;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",
            button {
                style: "align-self: flex-end; border: none; background: none; cursor: pointer;",
                onclick: move |_| on_close(()),
                Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
            }

            SelectedChips { panel_state }

            div {
                style: "display: flex; flex-direction: row; border-bottom: 1px solid #E0E0E0;",
                TabButton { panel_state, tab: FilterPanelTab::Condition, label: "条件で絞りこむ", accent: accent() }
                TabButton { panel_state, tab: FilterPanelTab::Period, label: "時期で絞りこむ", accent: accent() }
            }

            if active_tab() == FilterPanelTab::Condition {
                for group in config.read().groups.iter().cloned() {
                    div {
                        key: "{group.category}",
                        class: "x-filter-category",
                        h3 { style: "font-size: 16px; margin: 8px 0;", "{group.title}" }
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 8px;",
                            for option in group.options.iter().cloned() {
                                OptionButton { key: "{option}", panel_state, category: group.category, option: option.clone(), accent: accent() }
                            }
                        }
                    }
                }
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 8px;",
                    for option in PERIOD_OPTIONS {
                        OptionButton { key: "{option}", panel_state, category: SearchCategory::Period, option: option.to_string(), accent: accent() }
                    }
                }
            }

            button {
                style: "
                    margin-top: 8px;
                    padding: 12px;
                    border: none;
                    border-radius: 999px;
                    background-color: {accent};
                    color: white;
                    font-size: 16px;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    on_apply(panel_state.read().apply());
                    on_close(());
                },
                "決定"
            }
        }
    }
}

#[component]
fn SelectedChips(panel_state: Signal<FilterPanelState>) -> Element {
    let selected = panel_state.read().selected().to_vec();
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 6px; min-height: 32px; padding: 6px; border: 1px solid #E0E0E0; border-radius: 8px;",
            for (category, option) in selected {
                span {
                    key: "{category}-{option}",
                    style: "display: flex; align-items: center; gap: 4px; padding: 2px 10px; border-radius: 999px; background: #F2F2F2;",
                    "{option}"
                    button {
                        style: "border: none; background: none; cursor: pointer;",
                        onclick: {
                            let option = option.clone();
                            move |_| panel_state.write().toggle(category, &option)
                        },
                        "×"
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(panel_state: Signal<FilterPanelState>, tab: FilterPanelTab, label: String, accent: String) -> Element {
    let is_active = panel_state.read().active_tab == tab;
    let border = if is_active { format!("3px solid {}", accent) } else { "3px solid transparent".to_string() };
    rsx! {
        button {
            style: "flex: 1; padding: 10px; border: none; border-bottom: {border}; background: none; cursor: pointer; font-size: 15px;",
            onclick: move |_| panel_state.write().switch_tab(tab),
            "{label}"
        }
    }
}

#[component]
fn OptionButton(panel_state: Signal<FilterPanelState>, category: SearchCategory, option: String, accent: String) -> Element {
    let is_selected = panel_state.read().is_selected(category, &option);
    let (background, color, border) = if is_selected {
        (accent.clone(), "#FFFFFF", accent.clone())
    } else {
        ("#FFFFFF".to_string(), "#333333", "#E0E0E0".to_string())
    };
    rsx! {
        button {
            style: "
                padding: 6px 14px;
                border-radius: 999px;
                border: 1px solid {border};
                background-color: {background};
                color: {color};
                cursor: pointer;
                font-size: 14px;
            ",
            onclick: move |_| panel_state.write().toggle(category, &option),
            "{option}"
        }
    }
}
