//! Experience stories: a pickup list for the linked questionnaire item, and a
//! keyword + filter search against the external API.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_content_icons::MdFilterList;

use common::{
    experience::{Experience, FetchOutcome, section_name_for_question},
    filter_panel::{FilterPanelConfig, FilterPanelState},
    filter_selection::{CategorySelection, FilterSelection},
};

use crate::{
    api::experience_api::{fetch_all_experiences, fetch_experiences_by_question, search_experiences},
    components::{
        directory_components::{filter_panel::FilterPanel, selection_chips::SelectionChips},
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::LoadingIndicator,
    },
    routes::Route,
};

const PICKUP_LIMIT: usize = 6;
const EXCERPT_CHARS: usize = 120;

type FetchState = Option<Result<FetchOutcome<Experience>, String>>;

/// What to render for a fetch; `None` once the reader has dismissed its error.
fn visible_state(state: FetchState, error_dismissed: bool) -> Option<FetchState> {
    let is_error = matches!(state, Some(Err(_)) | Some(Ok(FetchOutcome::Failed { .. })));
    if error_dismissed && is_error { None } else { Some(state) }
}


#[component]
pub fn ExperiencesPage(question_id: String) -> Element {
    rsx! {
        Title { "体験談をさがす" }
        div {
            id: "x-experiences-page",
            style: "display: flex; flex-direction: column; gap: 32px; padding: 24px; max-width: 960px; margin: 0 auto;",
            h1 { style: "margin: 0; font-size: 26px;", "体験談をさがす" }
            ExperienceSearch {}
            PickupExperiences { question_id }
        }
    }
}

fn take_pickup(outcome: FetchOutcome<Experience>) -> FetchOutcome<Experience> {
    match outcome {
        FetchOutcome::Found(items) => FetchOutcome::Found(items.into_iter().take(PICKUP_LIMIT).collect()),
        other => other,
    }
}

#[component]
fn PickupExperiences(question_id: ReadSignal<String>) -> Element {
    let pickup = use_resource(move || {
        let question_id = question_id.read().clone();
        async move {
            let result = if question_id.is_empty() {
                fetch_all_experiences().await
            } else {
                fetch_experiences_by_question(question_id, PICKUP_LIMIT).await
            };
            result.map(take_pickup).map_err(|e| e.to_string())
        }
    });
    let mut error_dismissed = use_signal(|| false);
    use_effect(move || {
        let _ = question_id.read();
        error_dismissed.set(false);
    });

    let heading = match section_name_for_question(&question_id.read()) {
        Some(section) => format!("「{}」に関する体験談", section),
        None => "ピックアップ体験談".to_string(),
    };
    let state = visible_state(pickup.read().clone(), error_dismissed());

    rsx! {
        section {
            h2 { style: "font-size: 20px;", "{heading}" }
            if let Some(state) = state {
                ExperienceOutcome {
                    state,
                    on_dismiss: move |_: ()| error_dismissed.set(true),
                }
            }
        }
    }
}

#[component]
fn ExperienceSearch() -> Element {
    let config = FilterPanelConfig::experiences_panel();
    let accent = config.accent_color.clone();

    let mut keyword = use_signal(String::new);
    let mut filters = use_signal(CategorySelection::new);
    let mut panel_open = use_signal(|| false);
    let mut panel_state = use_signal(FilterPanelState::default);
    let mut validation_message = use_signal(|| None::<&'static str>);
    let mut submitted = use_signal(|| None::<(String, CategorySelection)>);
    let mut error_dismissed = use_signal(|| false);

    let results = use_resource(move || {
        let submitted = submitted();
        async move {
            let (keyword, filters) = submitted?;
            Some(search_experiences(keyword, filters).await.map_err(|e| e.to_string()))
        }
    });

    let mut run_search = move |_: ()| {
        let current = FilterSelection { keyword: keyword.read().clone(), categories: filters.read().clone() };
        if current.is_unconstrained() {
            validation_message.set(Some("検索キーワードまたは絞り込み条件を指定してください。"));
            return;
        }
        validation_message.set(None);
        error_dismissed.set(false);
        dioxus::logger::tracing::info!("searching experiences: {:?}", current);
        submitted.set(Some((current.keyword, current.categories)));
    };

    let chips_selection = use_memo(move || FilterSelection { keyword: String::new(), categories: filters.read().clone() });
    let selected_count = use_memo(move || chips_selection.read().selected_count());
    let search_state = if submitted.read().is_none() {
        None
    } else {
        visible_state(results.read().clone().flatten(), error_dismissed())
    };

    rsx! {
        section {
            style: "display: flex; flex-direction: column; gap: 12px;",
            h2 { style: "font-size: 20px;", "キーワード・条件からさがす" }
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
                    input {
                        r#type: "text",
                        placeholder: "キーワードを入力",
                        style: "flex: 1; border: none; outline: none; background: transparent; font-size: 16px;",
                        value: "{keyword}",
                        oninput: move |e| keyword.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                run_search(());
                            }
                        },
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
                        panel_state.set(FilterPanelState::from_selection(&filters.read()));
                        panel_open.set(true);
                    },
                    Icon { icon: MdFilterList, style: "width: 20px; height: 20px;" }
                    if selected_count() > 0 {
                        "絞り込み ({selected_count})"
                    } else {
                        "絞り込み"
                    }
                }
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        padding: 10px 20px;
                        border-radius: 9999px;
                        border: none;
                        background-color: {accent};
                        color: white;
                        cursor: pointer;
                    ",
                    onclick: move |_| run_search(()),
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                    "検索"
                }
            }

            SelectionChips {
                selection: chips_selection,
                on_change: move |next: FilterSelection| filters.set(next.categories),
            }

            if let Some(message) = validation_message() {
                p { class: "x-validation-message", style: "color: #C0392B; margin: 0;", "{message}" }
            }

            if let Some(state) = search_state {
                ExperienceOutcome {
                    state,
                    on_dismiss: move |_: ()| error_dismissed.set(true),
                }
            }
        }

        if panel_open() {
            FilterPanel {
                config,
                panel_state,
                on_apply: move |(_count, categories): (usize, CategorySelection)| filters.set(categories),
                on_close: move |_: ()| panel_open.set(false),
            }
        }
    }
}

/// Loading, failure, empty and found states of one experience fetch.
#[component]
fn ExperienceOutcome(state: ReadSignal<FetchState>, on_dismiss: Callback<()>) -> Element {
    match state.read().clone() {
        None => rsx! {
            LoadingIndicator { message: "体験談を読み込み中..." }
        },
        Some(Err(e)) => rsx! {
            ComponentErrorDisplay { error_txt: format!("体験談の取得に失敗しました: {}", e), on_dismiss }
        },
        Some(Ok(FetchOutcome::Failed { error_type, message })) => {
            dioxus::logger::tracing::warn!("experience api reported {}: {}", error_type, message);
            rsx! {
                ComponentErrorDisplay { error_txt: message, on_dismiss }
            }
        }
        Some(Ok(FetchOutcome::Empty)) => rsx! {
            p { style: "color: #555555;", "該当する体験談が見つかりませんでした。" }
        },
        Some(Ok(FetchOutcome::Found(items))) => rsx! {
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px;",
                for experience in items {
                    ExperienceCard { key: "{experience.id}", experience: experience.clone() }
                }
            }
        },
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() > EXCERPT_CHARS {
        text.chars().take(EXCERPT_CHARS).collect::<String>() + "…"
    } else {
        text.to_string()
    }
}

#[component]
fn ExperienceCard(experience: ReadSignal<Experience>) -> Element {
    let experience = experience.read().clone();
    let labels: Vec<String> = [&experience.grade, &experience.trigger, &experience.support]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .collect();
    let excerpt_text = excerpt(&experience.text);
    let to = Route::experience_detail(&experience.id);

    rsx! {
        Link {
            to,
            class: "x-card-link",
            div {
                class: "x-experience-card",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    padding: 16px;
                    border-radius: 12px;
                    border: 1px solid #E0E0E0;
                    background-color: white;
                ",
                h3 { style: "margin: 0; font-size: 17px;", "{experience.title}" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 6px;",
                    for label in labels {
                        span {
                            key: "{label}",
                            style: "padding: 2px 8px; border-radius: 4px; background-color: #FCEBE8; font-size: 12px;",
                            "{label}"
                        }
                    }
                }
                p { style: "margin: 0; font-size: 14px; color: #555555; line-height: 1.6;", "{excerpt_text}" }
                if let Some(date) = experience.date.as_ref() {
                    span { style: "font-size: 12px; color: #888888;", "{date}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pickup_is_capped() {
        let items = vec![Experience::default(); 10];
        assert_eq!(take_pickup(FetchOutcome::Found(items)).items().len(), PICKUP_LIMIT);
        assert_eq!(take_pickup(FetchOutcome::Empty), FetchOutcome::Empty);
    }

    #[test]
    fn dismissed_error_hides_instead_of_reading_as_empty() {
        let failed: FetchState = Some(Err("timeout".to_string()));
        assert_eq!(visible_state(failed.clone(), true), None);
        assert_eq!(visible_state(failed.clone(), false), Some(failed));

        let reported: FetchState = Some(Ok(FetchOutcome::Failed { error_type: "network".into(), message: "m".into() }));
        assert_eq!(visible_state(reported, true), None);

        let empty: FetchState = Some(Ok(FetchOutcome::Empty));
        assert_eq!(visible_state(empty.clone(), true), Some(empty));
        assert_eq!(visible_state(None, true), Some(None));
    }

    #[test]
    fn excerpt_counts_characters() {
        let long = "あ".repeat(EXCERPT_CHARS + 5);
        let short = excerpt(&long);
        assert_eq!(short.chars().count(), EXCERPT_CHARS + 1);
        assert!(short.ends_with('…'));
        assert_eq!(excerpt("短い"), "短い");
    }
}
