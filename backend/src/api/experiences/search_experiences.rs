use common::{experience::{Experience, FetchOutcome}, filter_selection::CategorySelection};
use tracing::info;

use crate::api_utils::experience_api_client::ExperienceApiClient;

/// Keyword used by the API for "match everything".
pub const MATCH_ALL_KEYWORD: &str = "*";

pub async fn search(client: &ExperienceApiClient, keyword: &str, filters: &CategorySelection) -> anyhow::Result<FetchOutcome<Experience>> {
    let keyword = match keyword.trim() {
        "" => MATCH_ALL_KEYWORD.to_string(),
        k => k.to_string(),
    };
    let filters_json = serde_json::to_string(filters)?;
    info!("searching experiences: keyword={:?} filters={}", keyword, filters_json);
    let envelope = client
        .get_envelope::<Experience>("searchExperiences", &[("keyword", keyword), ("filters", filters_json)])
        .await?;
    Ok(envelope.into_outcome())
}
