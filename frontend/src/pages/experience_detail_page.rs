//! One experience story with its questionnaire answers.

use dioxus::prelude::*;

use common::experience::Experience;

use crate::{
    api::experience_api::fetch_experience_by_id,
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
    routes::Route,
};


#[component]
pub fn ExperienceDetailPage(id: String) -> Element {
    rsx! {
        div {
            id: "x-experience-detail",
            style: "display: flex; flex-direction: column; gap: 16px; padding: 24px; max-width: 860px; margin: 0 auto;",
            Link { to: Route::ExperiencesPage { question_id: String::new() }, class: "x-text-link", "体験談をさがすに戻る" }
            SuspendWrapper {
                ExperienceDetail { id }
            }
        }
    }
}

#[component]
fn ExperienceDetail(id: ReadSignal<String>) -> Element {
    let experience = use_resource(move || fetch_experience_by_id(id.read().clone())).suspend()?.cloned();
    let experience = match experience {
        Err(e) => {
            return rsx! {
                ComponentErrorDisplay { error_txt: format!("体験談の取得に失敗しました: {}", e) }
            };
        }
        Ok(None) => {
            dioxus::logger::tracing::warn!("no experience with id {}", id.read());
            return rsx! {
                p { style: "color: #555555;", "該当の体験談が見つかりません。" }
            };
        }
        Ok(Some(experience)) => experience,
    };

    rsx! {
        Title { "{experience.title}" }
        ExperienceStory { experience }
    }
}

#[component]
fn ExperienceStory(experience: ReadSignal<Experience>) -> Element {
    let experience = experience.read().clone();
    let meta: Vec<(&'static str, String)> = [
        ("投稿日", &experience.date),
        ("投稿者", &experience.author_name),
        ("学年", &experience.grade),
        ("きっかけ", &experience.trigger),
        ("利用したサポート", &experience.support),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().filter(|v| !v.trim().is_empty()).map(|v| (label, v.clone())))
    .collect();
    let sections = experience.story_sections();

    rsx! {
        h1 { style: "margin: 0; font-size: 26px;", "{experience.title}" }
        dl {
            style: "display: grid; grid-template-columns: max-content 1fr; gap: 6px 16px; margin: 0;",
            for (label, value) in meta {
                div {
                    key: "{label}",
                    style: "display: contents;",
                    dt { style: "color: #555555;", "{label}" }
                    dd { style: "margin: 0;", "{value}" }
                }
            }
        }
        if !experience.text.trim().is_empty() {
            StoryParagraphs { text: experience.text.clone() }
        }
        for (label, answer) in sections {
            section {
                key: "{label}",
                h3 { style: "font-size: 17px; margin: 16px 0 4px;", "{label}" }
                StoryParagraphs { text: answer.clone() }
            }
        }
    }
}

#[component]
fn StoryParagraphs(text: ReadSignal<String>) -> Element {
    let paragraphs: Vec<String> = text.read().lines().filter(|l| !l.trim().is_empty()).map(String::from).collect();
    rsx! {
        for (index, paragraph) in paragraphs.into_iter().enumerate() {
            p { key: "{index}", style: "margin: 0 0 8px; line-height: 1.8;", "{paragraph}" }
        }
    }
}
