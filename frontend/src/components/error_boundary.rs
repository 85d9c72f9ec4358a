//! Error boundaries and the inline error display shared by pages.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error in {}: {:?}", boundary_name, err);
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 16px; padding: 32px;",
                        h1 {
                            style: "color: #C0392B; font-size: 28px;",
                            "エラーが発生しました",
                        }
                        p {
                            style: "color: #555555; font-size: 16px;",
                            "ページの表示中に問題が発生しました。時間をおいて再度お試しください。"
                        }
                        // also rendered above the router, so no Link here
                        a {
                            href: Route::HomePage {}.to_string(),
                            style: "color: #3498DB; font-size: 16px;",
                            "トップページに戻る"
                        }
                        pre {
                            style: "color: #7F8C8D; font-size: 12px; text-wrap: auto;",
                            "{boundary_name}: {err:?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "padding: 8px 24px; border: 1px solid #3498DB; border-radius: 4px; background: white; color: #3498DB; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "再読み込み"
                        }
                    }
                }
            },
            {children}
        }
    }
}

/// Inline failure message. Pages show it in place of the content that failed to load.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, on_dismiss: Option<Callback<()>>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-inline-error",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                margin: 16px auto;
                padding: 16px 24px;
                max-width: 560px;
                border: 1px solid #E74C3C;
                border-radius: 8px;
                background: #FDEDEC;
                color: #922B21;
            ",
            p { "{error_txt}" }
            if let Some(on_dismiss) = on_dismiss {
                button {
                    style: "border: none; background: none; color: #922B21; cursor: pointer; text-decoration: underline;",
                    onclick: move |_| on_dismiss(()),
                    "閉じる"
                }
            }
            {children}
        }
    }
}
