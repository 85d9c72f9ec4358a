//! Moderation overview for administrators.

use dioxus::prelude::*;

use common::experience::{ApprovalStatus, Experience, ModerationQueues};

use crate::{
    api::experience_api::list_moderation_queues,
    components::{admin_guard::AdminGuard, error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
    data_definitions::auth_state::AuthContext,
    routes::Route,
};

const TABS: [ApprovalStatus; 3] = [ApprovalStatus::Pending, ApprovalStatus::OnHold, ApprovalStatus::Approved];


#[component]
pub fn AdminPage() -> Element {
    rsx! {
        Title { "管理者ページ" }
        AdminGuard {
            ModerationDashboard {}
        }
    }
}

#[component]
fn ModerationDashboard() -> Element {
    let mut auth = use_context::<AuthContext>();
    let mut active_tab = use_signal(|| ApprovalStatus::Pending);
    let user_name = auth.user_name.read().clone().unwrap_or_default();

    rsx! {
        div {
            id: "x-admin-page",
            style: "display: flex; flex-direction: column; gap: 16px; padding: 24px; max-width: 960px; margin: 0 auto;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                h1 { style: "margin: 0; font-size: 26px; flex-grow: 1;", "体験談の管理" }
                span { style: "color: #555555;", "{user_name}" }
                button {
                    style: "padding: 8px 16px; border: 1px solid #555555; border-radius: 999px; background: white; cursor: pointer;",
                    onclick: move |_| {
                        auth.logout();
                        navigator().push(Route::HomePage {});
                    },
                    "ログアウト"
                }
            }

            div {
                style: "display: flex; flex-direction: row; border-bottom: 1px solid #E0E0E0;",
                for status in TABS {
                    button {
                        key: "{status:?}",
                        style: tab_style(active_tab() == status),
                        onclick: move |_| active_tab.set(status),
                        {status.display_name()}
                    }
                }
            }

            SuspendWrapper {
                ModerationQueueView { status: active_tab() }
            }
        }
    }
}

fn tab_style(is_active: bool) -> &'static str {
    if is_active {
        "flex: 1; padding: 10px; border: none; border-bottom: 3px solid #EF9F94; background: none; cursor: pointer;"
    } else {
        "flex: 1; padding: 10px; border: none; border-bottom: 3px solid transparent; background: none; cursor: pointer;"
    }
}

#[component]
fn ModerationQueueView(status: ApprovalStatus) -> Element {
    let queues = use_resource(move || list_moderation_queues()).suspend()?.cloned();
    let queues = match queues {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(q) => q,
    };
    rsx! {
        QueueList { queues, status }
    }
}

#[component]
fn QueueList(queues: ReadSignal<ModerationQueues>, status: ApprovalStatus) -> Element {
    let items: Vec<Experience> = queues.read().by_status(status).to_vec();
    if items.is_empty() {
        let status_name = status.display_name();
        return rsx! {
            p { style: "color: #555555;", "{status_name}の体験談はありません。" }
        };
    }
    rsx! {
        table {
            style: "border-collapse: collapse; width: 100%;",
            thead {
                tr {
                    th { style: "text-align: left; padding: 8px;", "ID" }
                    th { style: "text-align: left; padding: 8px;", "タイトル" }
                    th { style: "text-align: left; padding: 8px;", "投稿者" }
                    th { style: "text-align: left; padding: 8px;", "投稿日" }
                }
            }
            tbody {
                for experience in items {
                    tr {
                        key: "{experience.id}",
                        style: "border-top: 1px solid #E0E0E0;",
                        td { style: "padding: 8px;", "{experience.id}" }
                        td { style: "padding: 8px;", "{experience.title}" }
                        td { style: "padding: 8px;", {experience.author_name.clone().unwrap_or_default()} }
                        td { style: "padding: 8px;", {experience.date.clone().unwrap_or_default()} }
                    }
                }
            }
        }
    }
}
