use dioxus::prelude::*;

use common::{catalog::CatalogKind, filter_selection::FilterSelection};

use crate::{
    components::directory_components::directory_browser::DirectoryBrowser,
    data_definitions::url_param::UrlParam,
    routes::Route,
};


/// Place results for a selection carried in the URL. Edits replace the URL
/// instead of pushing history entries.
#[component]
pub fn PlaceSearchResultsPage(query: UrlParam<FilterSelection>) -> Element {
    let on_change = Callback::new(move |selection: FilterSelection| {
        navigator().replace(Route::place_search_results(selection));
    });
    let keyword = query.0.keyword.trim().to_string();

    rsx! {
        Title { "居場所の検索結果" }
        h1 {
            style: "padding: 24px 24px 0 24px; margin: 0; font-size: 26px;",
            if keyword.is_empty() {
                "居場所の検索結果"
            } else {
                "「{keyword}」の検索結果"
            }
        }
        DirectoryBrowser {
            kind: CatalogKind::Places,
            initial_selection: query.0.clone(),
            live_keyword: false,
            on_change,
        }
    }
}
