use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                LoadingIndicator { message: "読み込み中..." }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(into, default = "読み込み中...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 16px;
                padding: 32px;
                width: 100%;
            ",
            p { "{message}" }
            div {
                style: "
                    width: 40px;
                    height: 40px;
                    border: 4px solid #F3F3F3;
                    border-top: 4px solid #3498DB;
                    border-radius: 50%;
                    animation: x-spin 1s linear infinite;
                ",
            }
        }
    }
}
