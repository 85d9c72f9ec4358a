use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

use common::filter_selection::FilterSelection;

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "ふくい不登校支援ナビ" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
            ",

            div {
                style: "font-size: 32px; font-weight: 600; color: #333333;",
                "不登校のお子さんと保護者のための情報サイト"
            }
            div {
                style: "font-size: 18px; line-height: 1.6; max-width: 640px; color: #555555;",
                "福井県内の居場所や卒業後の進路、先輩たちの体験談をさがすことができます。"
            }

            PlaceQuickSearchCard {}

            // Section cards
            div {
                style: "display: flex; flex-direction: row; gap: 20px; flex-wrap: wrap;",
                SectionCard {
                    to: Route::PlacesPage {},
                    title: "居場所をさがす",
                    description: "フリースクールや学習支援、親の会などを条件からさがせます。",
                    color: "#88D3BC",
                }
                SectionCard {
                    to: Route::PathsPage {},
                    title: "卒業後の進路をさがす",
                    description: "通信制高校やサポート校などを授業スタイルや登校頻度からさがせます。",
                    color: "#79B5EE",
                }
                SectionCard {
                    to: Route::ExperiencesPage { question_id: String::new() },
                    title: "体験談をさがす",
                    description: "不登校を経験したご家庭の体験談を読むことができます。",
                    color: "#EF9F94",
                }
            }
        }
    }
}

/// Keyword box that jumps straight to the place search results.
#[component]
fn PlaceQuickSearchCard() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            id: "x-card-place-search",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                max-width: 640px;
                padding: 22px;
                border-radius: 22px;
                background: linear-gradient(135deg, #5CBFA0 0%, #88D3BC 100%);
                color: white;
            ",
            div { style: "font-size: 22px; font-weight: 500;", "キーワードで居場所をさがす" }
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 42px;
                    color: #111827;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "例: フリースクール",
                    style: "flex: 1; border: none; outline: none; background: transparent; font-size: 14px;",
                    oninput: move |e| {
                        *search_q.write() = e.value();
                    },
                    onkeypress: move |e| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            let selection = FilterSelection::with_keyword(search_q.read().clone());
                            n2.push(Route::place_search_results(selection));
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn SectionCard(to: Route, title: String, description: String, color: String) -> Element {
    rsx! {
        Link {
            to,
            class: "x-card-link",
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    width: 300px;
                    min-height: 160px;
                    padding: 20px;
                    border-radius: 16px;
                    background: white;
                    border-top: 6px solid {color};
                    color: #333333;
                    box-shadow: 0 6px 16px rgba(0,0,0,0.06);
                ",
                div { style: "font-size: 20px; font-weight: 600;", "{title}" }
                div { style: "font-size: 15px; line-height: 1.5; color: #555555;", "{description}" }
            }
        }
    }
}
