use std::env;
use std::time::Duration;

use reqwest::Url;

/// Environment variable holding the webhook URL.
pub const WEBHOOK_URL_VAR: &str = "N8N_BRAND_VOICE_WEBHOOK_URL";

/// The workflow runs several model calls in sequence, so responses are slow.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub url: Option<String>,
    pub timeout: Duration,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        WebhookConfig {
            url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl WebhookConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let url = env::var(WEBHOOK_URL_VAR).ok();

        WebhookConfig {
            url,
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured URL, or `None` when it is unset or blank.
    pub fn endpoint(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Scheme, host and port only. Webhook paths, queries and credentials act
    /// as bearer secrets and stay out of logs.
    pub fn redacted_endpoint(&self) -> String {
        let Some(raw) = self.endpoint() else {
            return "<unset>".to_string();
        };

        match Url::parse(raw) {
            Ok(url) => match (url.host_str(), url.port()) {
                (Some(host), Some(port)) => format!("{}://{}:{}", url.scheme(), host, port),
                (Some(host), None) => format!("{}://{}", url.scheme(), host),
                (None, _) => "***".to_string(),
            },
            Err(_) => "***".to_string(),
        }
    }
}
