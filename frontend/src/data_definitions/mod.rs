pub mod url_param;
pub mod auth_state;
pub mod directory_catalogs;
