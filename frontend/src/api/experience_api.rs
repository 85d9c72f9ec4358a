//! Client API calls for the experience-story endpoints.

use common::{
    experience::{Experience, FetchOutcome, ModerationQueues},
    filter_selection::CategorySelection,
};
use dioxus::prelude::*;

#[cfg(feature = "server")]
fn server_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::ServerError { message: e.to_string(), code: 500, details: None }
}

#[server]
pub async fn fetch_experience_by_id(id: String) -> Result<Option<Experience>, ServerFnError> {
    let client = backend::api_utils::experience_api_client::get_experience_api_client().map_err(server_error)?;
    let x = backend::api::experiences::fetch_by_id(&client, &id).await;
    x.map_err(server_error)
}

#[server]
pub async fn fetch_experiences_by_question(question_id: String, limit: usize) -> Result<FetchOutcome<Experience>, ServerFnError> {
    let client = backend::api_utils::experience_api_client::get_experience_api_client().map_err(server_error)?;
    let x = backend::api::experiences::fetch_by_question(&client, &question_id, limit).await;
    x.map_err(server_error)
}

#[server]
pub async fn fetch_all_experiences() -> Result<FetchOutcome<Experience>, ServerFnError> {
    let client = backend::api_utils::experience_api_client::get_experience_api_client().map_err(server_error)?;
    let x = backend::api::experiences::fetch_all(&client).await;
    x.map_err(server_error)
}

#[server]
pub async fn search_experiences(keyword: String, filters: CategorySelection) -> Result<FetchOutcome<Experience>, ServerFnError> {
    let client = backend::api_utils::experience_api_client::get_experience_api_client().map_err(server_error)?;
    let x = backend::api::experiences::search(&client, &keyword, &filters).await;
    x.map_err(server_error)
}

#[server]
pub async fn list_moderation_queues() -> Result<ModerationQueues, ServerFnError> {
    let client = backend::api_utils::experience_api_client::get_experience_api_client().map_err(server_error)?;
    let x = backend::api::experiences::list_moderation_queues(&client).await;
    x.map_err(server_error)
}
