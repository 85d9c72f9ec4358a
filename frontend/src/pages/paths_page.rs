use dioxus::prelude::*;

use common::{catalog::CatalogKind, filter_selection::FilterSelection};

use crate::components::directory_components::directory_browser::DirectoryBrowser;


/// School-path directory. The keyword is applied on Enter or the search button.
#[component]
pub fn PathsPage() -> Element {
    rsx! {
        Title { "卒業後の進路をさがす" }
        h1 { style: "padding: 24px 24px 0 24px; margin: 0; font-size: 26px;", "卒業後の進路をさがす" }
        DirectoryBrowser {
            kind: CatalogKind::SchoolPaths,
            initial_selection: FilterSelection::default(),
            live_keyword: false,
        }
    }
}
