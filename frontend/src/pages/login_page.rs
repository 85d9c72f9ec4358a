use dioxus::prelude::*;

use crate::routes::Route;


/// Sign-in happens with the external identity provider; this page only
/// tells the user where they will be sent back to.
#[component]
pub fn LoginPage(return_to: String) -> Element {
    let destination = if return_to.is_empty() { Route::HomePage {}.to_string() } else { return_to.clone() };
    rsx! {
        Title { "ログイン" }
        div {
            id: "x-login-page",
            style: "display: flex; flex-direction: column; align-items: center; gap: 16px; padding: 48px 24px; text-align: center;",
            h1 { style: "font-size: 26px; margin: 0;", "ログイン" }
            p {
                style: "color: #555555;",
                "管理者アカウントでログインしてください。"
            }
            p {
                style: "color: #888888; font-size: 14px;",
                "ログイン後は {destination} に戻ります。"
            }
            Link { to: Route::HomePage {}, class: "x-text-link", "トップページに戻る" }
        }
    }
}
