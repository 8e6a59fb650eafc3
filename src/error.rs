use thiserror::Error;

/// The single error type raised by the webhook adapter.
///
/// Every variant renders as one human-readable line, which is what the
/// front end shows to the user.
#[derive(Debug, Error)]
pub enum BrandVoiceError {
    #[error("N8N_BRAND_VOICE_WEBHOOK_URL is not set. Set it in your environment or .env file.")]
    Config,
    #[error("Error calling n8n webhook: {0}")]
    Transport(String),
    #[error("n8n returned HTTP {status}: {body}")]
    Remote { status: u16, body: String },
    #[error("n8n response was not valid JSON: {0}")]
    MalformedResponse(String),
}

impl BrandVoiceError {
    pub fn is_config(&self) -> bool {
        matches!(self, BrandVoiceError::Config)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, BrandVoiceError::Transport(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, BrandVoiceError::Remote { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, BrandVoiceError::MalformedResponse(_))
    }
}

impl From<reqwest::Error> for BrandVoiceError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest's own message is terse ("error sending request"); the cause is in the chain.
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        BrandVoiceError::Transport(message)
    }
}

pub type Result<T> = std::result::Result<T, BrandVoiceError>;
