//! Experience-story API operations and module exports.

mod get_experiences;
pub use get_experiences::{fetch_all, fetch_by_id, fetch_by_question};

mod search_experiences;
pub use search_experiences::search;

mod moderation;
pub use moderation::{approve, list_by_status, list_moderation_queues, reject};
