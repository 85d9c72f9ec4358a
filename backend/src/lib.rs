//! Server-side access to the external experience-story API.

pub mod config;
pub mod api_utils;
pub mod api;
