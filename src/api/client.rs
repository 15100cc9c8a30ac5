use super::constants::{self, headers};
use super::result::ProvisioningResult;
use super::CrmApi;
use crate::config::Settings;
use crate::schema::{FieldSpec, ObjectType, PipelineSpec};
use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;

/// Twenty REST API client authenticated with a workspace API key
#[derive(Clone)]
pub struct TwentyClient {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl TwentyClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(constants::USER_AGENT)
            .build()?;

        Ok(Self::with_custom_client(settings, http_client))
    }

    /// Create a client on top of a preconfigured HTTP client
    pub fn with_custom_client(settings: &Settings, http_client: reqwest::Client) -> Self {
        Self {
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body and fold every failure into the result
    async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> ProvisioningResult {
        let correlation_id = uuid::Uuid::new_v4().to_string();
        debug!("POST {} [{}]", url, correlation_id);

        let response = self
            .http_client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .header(headers::X_CORRELATION_ID, &correlation_id)
            .json(body)
            .send()
            .await;

        match response {
            Ok(response) => Self::parse_response(response, &correlation_id).await,
            Err(e) => {
                warn!("POST {} [{}] failed: {}", url, correlation_id, e);
                ProvisioningResult::error(e.to_string(), None)
            }
        }
    }

    async fn parse_response(response: reqwest::Response, correlation_id: &str) -> ProvisioningResult {
        let status = response.status();
        info!("Response {} [{}]", status, correlation_id);

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("Request [{}] rejected with {}: {}", correlation_id, status, text);
            return ProvisioningResult::error(http_error_message(status, &text), Some(status.as_u16()));
        }

        // 204 is the only success allowed to carry no body
        if status == reqwest::StatusCode::NO_CONTENT {
            return ProvisioningResult::success(None, status.as_u16());
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Request [{}] body unreadable: {}", correlation_id, e);
                return ProvisioningResult::error(
                    format!("Failed to read response body: {}", e),
                    Some(status.as_u16()),
                );
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(json) => ProvisioningResult::success(Some(json), status.as_u16()),
            Err(e) => {
                warn!("Request [{}] returned {} with a non-JSON body: {}", correlation_id, status, text);
                ProvisioningResult::error(format!("Invalid JSON response: {}", e), Some(status.as_u16()))
            }
        }
    }
}

fn http_error_message(status: reqwest::StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

#[async_trait]
impl CrmApi for TwentyClient {
    async fn verify_connection(&self) -> anyhow::Result<()> {
        let url = constants::workspace_endpoint(&self.base_url);
        let correlation_id = uuid::Uuid::new_v4().to_string();
        debug!("GET {} [{}]", url, correlation_id);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header(headers::X_CORRELATION_ID, &correlation_id)
            .send()
            .await?;

        let status = response.status();
        info!("Response {} [{}]", status, correlation_id);

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!(http_error_message(status, &text));
        }

        Ok(())
    }

    async fn create_field(&self, object: ObjectType, field: &FieldSpec) -> ProvisioningResult {
        let url = constants::fields_endpoint(&self.base_url, object.as_str());
        self.post_json(&url, field).await
    }

    async fn create_pipeline(&self, pipeline: &PipelineSpec) -> ProvisioningResult {
        let url = constants::pipelines_endpoint(&self.base_url);
        self.post_json(&url, pipeline).await
    }
}
