use dioxus::prelude::*;

use common::{
    catalog::{CatalogKind, RecordId},
    filter_selection::FilterSelection,
};

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::admin_page::AdminPage;
use crate::pages::experience_detail_page::ExperienceDetailPage;
use crate::pages::experiences_page::ExperiencesPage;
use crate::pages::home_page::HomePage;
use crate::pages::login_page::LoginPage;
use crate::pages::place_search_results_page::PlaceSearchResultsPage;
use crate::pages::places_page::PlacesPage;
use crate::pages::paths_page::PathsPage;
use crate::pages::record_detail_page::{PlaceDetailPage, SchoolDetailPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/places")]
    PlacesPage {},

    #[route("/places/search/:query")]
    PlaceSearchResultsPage { query: UrlParam<FilterSelection> },

    #[route("/places/:id")]
    PlaceDetailPage { id: String },


    #[route("/paths")]
    PathsPage {},

    #[route("/schools/:id")]
    SchoolDetailPage { id: String },


    #[route("/experiences?:question_id")]
    ExperiencesPage { question_id: String },

    #[route("/experiences/:id")]
    ExperienceDetailPage { id: String },


    #[route("/admin")]
    AdminPage {},

    #[route("/login?:return_to")]
    LoginPage { return_to: String },

}

impl Route {
    pub fn place_search_results(selection: FilterSelection) -> Self {
        Self::PlaceSearchResultsPage { query: UrlParam::from(selection) }
    }

    /// Detail ids travel as text and are matched against the id's text form.
    pub fn record_detail(kind: CatalogKind, id: &RecordId) -> Self {
        match kind {
            CatalogKind::Places => Self::PlaceDetailPage { id: id.to_string() },
            CatalogKind::SchoolPaths => Self::SchoolDetailPage { id: id.to_string() },
        }
    }

    pub fn experience_detail(id: &RecordId) -> Self {
        Self::ExperienceDetailPage { id: id.to_string() }
    }
}
