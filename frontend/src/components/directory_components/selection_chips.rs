//! Chips showing the applied keyword and options above the result list.

use dioxus::prelude::*;

use common::filter_selection::FilterSelection;


#[component]
pub fn SelectionChips(selection: ReadSignal<FilterSelection>, on_change: Callback<FilterSelection>) -> Element {
    let keyword = use_memo(move || selection.read().keyword.trim().to_string());
    let options = use_memo(move || selection.read().chips());

    if keyword.read().is_empty() && options.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "x-selection-chips",
            style: "display: flex; flex-wrap: wrap; gap: 8px; padding: 8px 0;",
            if !keyword.read().is_empty() {
                Chip {
                    label: "「{keyword}」",
                    on_remove: move |_: ()| {
                        let mut next = selection.read().clone();
                        next.keyword.clear();
                        on_change(next);
                    },
                }
            }
            for (category, option) in options() {
                Chip {
                    key: "{category}-{option}",
                    label: option.clone(),
                    on_remove: move |_: ()| {
                        let mut next = selection.read().clone();
                        next.remove_option(category, &option);
                        on_change(next);
                    },
                }
            }
        }
    }
}

#[component]
fn Chip(label: String, on_remove: Callback<()>) -> Element {
    rsx! {
        span {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                padding: 4px 12px;
                border-radius: 999px;
                background-color: #F2F2F2;
                font-size: 14px;
            ",
            "{label}"
            button {
                style: "border: none; background: none; cursor: pointer; font-size: 14px;",
                onclick: move |_| on_remove(()),
                "×"
            }
        }
    }
}
