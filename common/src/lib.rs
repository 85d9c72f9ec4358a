//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod text_normalize;
pub mod search_category;
pub mod catalog;
pub mod filter_selection;
pub mod filter_panel;
pub mod record_filter;
pub mod admin_guard;
pub mod experience;
