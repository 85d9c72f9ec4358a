use common::experience::{Experience, FetchOutcome};
use tracing::info;

use crate::api_utils::experience_api_client::ExperienceApiClient;

pub async fn fetch_by_id(client: &ExperienceApiClient, id: &str) -> anyhow::Result<Option<Experience>> {
    let envelope = client.get_envelope::<Experience>("getExperienceById", &[("id", id.to_string())]).await?;
    match envelope.into_outcome() {
        FetchOutcome::Found(items) => Ok(items.into_iter().next()),
        FetchOutcome::Empty => Ok(None),
        FetchOutcome::Failed { error_type, message } => anyhow::bail!("{}: {}", error_type, message),
    }
}

/// Experiences attached to one questionnaire item, at most `limit`.
pub async fn fetch_by_question(client: &ExperienceApiClient, question_id: &str, limit: usize) -> anyhow::Result<FetchOutcome<Experience>> {
    let envelope = client
        .get_envelope::<Experience>(
            "getExperiencesByQuestion",
            &[("questionId", question_id.to_string()), ("limit", limit.to_string())],
        )
        .await?;
    let outcome = envelope.into_outcome();
    info!("experiences for question {}: {} items", question_id, outcome.items().len());
    Ok(outcome)
}

pub async fn fetch_all(client: &ExperienceApiClient) -> anyhow::Result<FetchOutcome<Experience>> {
    let envelope = client.get_envelope::<Experience>("getAllExperiences", &[]).await?;
    Ok(envelope.into_outcome())
}
