//! Listing and deciding on submitted experiences.

use common::experience::{ApiEnvelope, ApprovalStatus, Experience, FetchOutcome, ModerationQueues};
use serde_json::json;
use tracing::info;

use crate::api_utils::experience_api_client::ExperienceApiClient;

fn list_action(status: ApprovalStatus) -> anyhow::Result<&'static str> {
    Ok(match status {
        ApprovalStatus::Pending => "getPendingExperiences",
        ApprovalStatus::OnHold => "getOnHoldExperiences",
        ApprovalStatus::Approved => "getApprovedExperiences",
        ApprovalStatus::Rejected => anyhow::bail!("rejected experiences are not listed"),
    })
}

pub async fn list_by_status(client: &ExperienceApiClient, status: ApprovalStatus) -> anyhow::Result<Vec<Experience>> {
    let envelope = client.get_envelope::<Experience>(list_action(status)?, &[]).await?;
    match envelope.into_outcome() {
        FetchOutcome::Found(items) => Ok(items),
        FetchOutcome::Empty => Ok(vec![]),
        FetchOutcome::Failed { error_type, message } => anyhow::bail!("{}: {}", error_type, message),
    }
}

/// The three admin tabs, fetched concurrently. Any failure fails the whole listing.
pub async fn list_moderation_queues(client: &ExperienceApiClient) -> anyhow::Result<ModerationQueues> {
    let (pending, on_hold, approved) = futures::try_join!(
        list_by_status(client, ApprovalStatus::Pending),
        list_by_status(client, ApprovalStatus::OnHold),
        list_by_status(client, ApprovalStatus::Approved),
    )?;
    Ok(ModerationQueues { pending, on_hold, approved })
}

fn check_admin_response(envelope: ApiEnvelope<serde_json::Value>) -> anyhow::Result<()> {
    if let Some(error_type) = envelope.error_type {
        anyhow::bail!("{}: {}", error_type, envelope.error.unwrap_or_default());
    }
    Ok(())
}

pub async fn approve(client: &ExperienceApiClient, id: &str) -> anyhow::Result<()> {
    let envelope = client.post_action(json!({ "action": "approveExperience", "id": id })).await?;
    check_admin_response(envelope)?;
    info!("approved experience {}", id);
    Ok(())
}

pub async fn reject(client: &ExperienceApiClient, id: &str, reason: &str) -> anyhow::Result<()> {
    if reason.trim().is_empty() {
        anyhow::bail!("a rejection reason is required");
    }
    let envelope = client.post_action(json!({ "action": "rejectExperience", "id": id, "reason": reason })).await?;
    check_admin_response(envelope)?;
    info!("rejected experience {}", id);
    Ok(())
}
