pub mod admin_guard;
pub mod directory_components;
pub mod error_boundary;
pub mod navbar;
pub mod suspend_boundary;
