use dioxus::prelude::*;

use common::{catalog::CatalogKind, filter_selection::FilterSelection};

use crate::components::directory_components::directory_browser::DirectoryBrowser;


/// Places directory. The keyword filters as it is typed.
#[component]
pub fn PlacesPage() -> Element {
    rsx! {
        Title { "居場所をさがす" }
        h1 { style: "padding: 24px 24px 0 24px; margin: 0; font-size: 26px;", "居場所をさがす" }
        DirectoryBrowser {
            kind: CatalogKind::Places,
            initial_selection: FilterSelection::default(),
            live_keyword: true,
        }
    }
}
