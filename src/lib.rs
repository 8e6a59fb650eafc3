//! Client for an n8n "brand voice generator" workflow.
//!
//! [`WebhookClient`] posts brand, audience and offer details to the webhook,
//! normalizes the reply into a [`GenerationResult`], and [`render`] turns that
//! into a markdown report.

pub mod backend;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod render;

pub use backend::{BrandVoiceBackend, WebhookClient};
pub use config::WebhookConfig;
pub use error::{BrandVoiceError, Result};
pub use models::*;
pub use render::{render_report, RenderOptions};
