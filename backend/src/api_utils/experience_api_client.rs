use common::experience::ApiEnvelope;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ExperienceApiConfig;

#[derive(Debug, Clone)]
pub struct ExperienceApiClient {
    http: reqwest::Client,
    base_url: String,
}

pub fn get_experience_api_client() -> anyhow::Result<ExperienceApiClient> {
    ExperienceApiClient::new(&ExperienceApiConfig::from_env())
}

impl ExperienceApiClient {
    pub fn new(config: &ExperienceApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    /// Read operations: `GET {base}?action=...`.
    pub(crate) async fn get_envelope<T: DeserializeOwned>(&self, action: &str, params: &[(&str, String)]) -> anyhow::Result<ApiEnvelope<T>> {
        let mut query = vec![("action", action.to_string())];
        query.extend(params.iter().map(|(k, v)| (*k, v.clone())));
        debug!("experience api GET {}", action);

        let response = self.http.get(&self.base_url).query(&query).send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            warn!("experience api {} failed: {}", action, status);
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        Ok(serde_json::from_str(&response_txt)?)
    }

    /// Admin operations: `POST {base}` with a JSON body carrying the action.
    pub(crate) async fn post_action(&self, body: serde_json::Value) -> anyhow::Result<ApiEnvelope<serde_json::Value>> {
        debug!("experience api POST {}", body["action"]);
        let response = self
            .http
            .post(&self.base_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(&body)?)
            .send()
            .await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            warn!("experience api {} failed: {}", body["action"], status);
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        Ok(serde_json::from_str(&response_txt)?)
    }
}
