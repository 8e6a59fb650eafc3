pub mod normalize;
pub mod traits;
pub mod webhook_client;

pub use normalize::{unwrap_payload, SENTINEL_KEY};
pub use traits::BrandVoiceBackend;
pub use webhook_client::WebhookClient;
