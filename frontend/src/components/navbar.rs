//! Site header with the main section links.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdBook, MdHome, MdLock, MdSearch};
use dioxus_free_icons::icons::md_social_icons::MdSchool;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared layout: header on top, routed page below.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            div {
                id: "x-nav-header",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    padding: 12px 24px;
                    background-color: #FFFFFF;
                    border-bottom: 1px solid #E0E0E0;
                    flex-wrap: wrap;
                ",
                Link {
                    to: Route::HomePage {},
                    class: "x-nav-title",
                    "ふくい不登校支援ナビ"
                }
                div { style: "flex-grow: 1;" }
                NavLink { to: Route::HomePage {}, icon: MdHome, label: "TOP" }
                NavLink { to: Route::PlacesPage {}, icon: MdSearch, label: "居場所をさがす" }
                NavLink { to: Route::PathsPage {}, icon: MdSchool, label: "卒業後の進路をさがす" }
                NavLink { to: Route::ExperiencesPage { question_id: String::new() }, icon: MdBook, label: "体験談をさがす" }
                NavLink { to: Route::AdminPage {}, icon: MdLock, label: "管理者" }
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            class: "x-nav-link",
            Icon { icon: icon, style: "width: 20px; height: 20px;" }
            span { "{label}" }
        }
    }
}
