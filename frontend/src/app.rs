use dioxus::prelude::*;

use crate::components::error_boundary::{ComponentErrorDisplay, GlobalErrorBoundary};
use crate::data_definitions::{auth_state::AuthContext, directory_catalogs::DirectoryCatalogs};
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(AuthContext::new);
    let catalogs = use_hook(|| DirectoryCatalogs::load_bundled().map_err(|e| e.to_string()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {match catalogs {
            Ok(catalogs) => rsx! {
                CatalogProvider { catalogs }
            },
            Err(e) => {
                dioxus::logger::tracing::error!("bundled catalog failed to load: {}", e);
                rsx! {
                    ComponentErrorDisplay { error_txt: format!("データの読み込みに失敗しました: {}", e) }
                }
            }
        }}
    }
}

#[component]
fn CatalogProvider(catalogs: DirectoryCatalogs) -> Element {
    use_context_provider(move || catalogs);
    rsx! {
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
