pub mod admin_page;
pub mod experience_detail_page;
pub mod experiences_page;
pub mod home_page;
pub mod login_page;
pub mod place_search_results_page;
pub mod places_page;
pub mod paths_page;
pub mod record_detail_page;
