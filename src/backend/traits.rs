use crate::{
    error::Result,
    models::{GenerationRequest, GenerationResult},
};
use async_trait::async_trait;

/// Anything that can turn a request into a brand voice result.
#[async_trait]
pub trait BrandVoiceBackend: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult>;

    async fn generate_brand_voice(
        &self,
        brand_name: &str,
        brand_info: &str,
        audience: &str,
        offer: &str,
    ) -> Result<GenerationResult> {
        let request = GenerationRequest::new(brand_name, brand_info, audience, offer);
        self.generate(&request).await
    }
}
