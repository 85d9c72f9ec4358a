pub mod experience_api;
