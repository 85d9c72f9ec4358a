//! Wraps admin-only pages. Renders its children only for a logged-in admin.

use dioxus::prelude::*;

use common::admin_guard::{AdminGuardState, GuardExit, evaluate_admin_guard};

use crate::{
    components::suspend_boundary::LoadingIndicator,
    data_definitions::auth_state::AuthContext,
    routes::Route,
};


#[component]
pub fn AdminGuard(children: Element) -> Element {
    let auth = use_context::<AuthContext>();
    let current_route = use_route::<Route>();
    let guard_state = use_memo(move || evaluate_admin_guard(&auth.flags.read(), &current_route.to_string()));

    use_effect(move || {
        if let AdminGuardState::Unauthenticated { return_to } = guard_state() {
            dioxus::logger::tracing::info!("not logged in, redirecting to login (return to {})", return_to);
            navigator().replace(Route::LoginPage { return_to });
        }
    });

    match guard_state() {
        AdminGuardState::Loading => rsx! {
            LoadingIndicator { message: "認証を確認中..." }
        },
        // the effect above is already navigating away
        AdminGuardState::Unauthenticated { .. } => rsx! {},
        AdminGuardState::AuthenticatedNonAdmin { exits } => rsx! {
            AccessDenied { exits: exits.to_vec() }
        },
        AdminGuardState::AuthenticatedAdmin => rsx! { {children} },
    }
}

#[component]
fn AccessDenied(exits: Vec<GuardExit>) -> Element {
    let mut auth = use_context::<AuthContext>();
    let current_route = use_route::<Route>();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
                padding: 48px 24px;
                text-align: center;
            ",
            h2 { style: "font-size: 24px; margin: 0;", "アクセス権限がありません" }
            p {
                style: "color: #555555;",
                "このページは管理者のみ閲覧できます。"
            }
            div {
                style: "display: flex; flex-direction: row; gap: 12px; flex-wrap: wrap; justify-content: center;",
                for exit in exits {
                    {match exit {
                        GuardExit::ReAuthenticate => { let key = "re-authenticate"; rsx! {
                            button {
                                key: "{key}",
                                style: "padding: 10px 20px; border: 1px solid #3498DB; border-radius: 999px; background: #3498DB; color: white; cursor: pointer;",
                                onclick: {
                                    let return_to = current_route.to_string();
                                    move |_| {
                                        auth.logout();
                                        navigator().push(Route::LoginPage { return_to: return_to.clone() });
                                    }
                                },
                                "別のアカウントでログイン"
                            }
                        }},
                        GuardExit::ReturnHome => { let key = "return-home"; rsx! {
                            button {
                                key: "{key}",
                                style: "padding: 10px 20px; border: 1px solid #3498DB; border-radius: 999px; background: white; color: #3498DB; cursor: pointer;",
                                onclick: move |_| {
                                    navigator().push(Route::HomePage {});
                                },
                                "トップページに戻る"
                            }
                        }},
                    }}
                }
            }
        }
    }
}
