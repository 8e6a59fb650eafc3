use std::time::Instant;

use crate::{
    backend::{normalize::unwrap_payload, traits::BrandVoiceBackend},
    config::WebhookConfig,
    error::{BrandVoiceError, Result},
    models::{GenerationRequest, GenerationResult},
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

/// Single-shot client for the brand voice webhook.
///
/// Each call is exactly one POST: no retries, no caching.
#[derive(Clone)]
pub struct WebhookClient {
    http: Client,
    config: WebhookConfig,
}

impl WebhookClient {
    pub fn new(config: WebhookConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                BrandVoiceError::Transport(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    async fn post(
        &self,
        endpoint: &str,
        request: &GenerationRequest,
        request_id: &Uuid,
    ) -> Result<String> {
        let response = self
            .http
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                // reqwest errors embed the full URL, which includes the webhook secret.
                let e = e.without_url();
                log::error!("[{}] Webhook request failed: {}", request_id, e);
                BrandVoiceError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            log::error!("[{}] Failed reading webhook response: {}", request_id, e);
            BrandVoiceError::from(e)
        })?;

        if status.as_u16() >= 400 {
            log::error!("[{}] Webhook returned HTTP {}", request_id, status.as_u16());
            return Err(BrandVoiceError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl BrandVoiceBackend for WebhookClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let endpoint = self.config.endpoint().ok_or_else(|| {
            log::error!("Webhook URL is not configured");
            BrandVoiceError::Config
        })?;

        let request_id = Uuid::new_v4();
        let started = Instant::now();

        log::info!(
            "[{}] Calling brand voice webhook at {}",
            request_id,
            self.config.redacted_endpoint()
        );
        log::debug!(
            "[{}] Webhook payload: {}",
            request_id,
            serde_json::to_string(request).unwrap_or_default()
        );

        let body = self.post(endpoint, request, &request_id).await?;

        let parsed: Value = serde_json::from_str(&body).map_err(|e| {
            log::error!("[{}] Webhook response was not JSON: {}", request_id, e);
            BrandVoiceError::MalformedResponse(e.to_string())
        })?;

        let result = GenerationResult::new(unwrap_payload(parsed));

        log::info!(
            "[{}] Brand voice generated in {}ms",
            request_id,
            started.elapsed().as_millis()
        );

        Ok(result)
    }
}
