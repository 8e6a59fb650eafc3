use serde::Serialize;

/// The four fields the workflow expects, serialized with the webhook's key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    #[serde(rename = "brandName")]
    pub brand_name: String,
    #[serde(rename = "brandInfo")]
    pub brand_info: String,
    pub audience: String,
    pub offer: String,
}

impl GenerationRequest {
    pub fn new(
        brand_name: impl Into<String>,
        brand_info: impl Into<String>,
        audience: impl Into<String>,
        offer: impl Into<String>,
    ) -> Self {
        Self {
            brand_name: brand_name.into(),
            brand_info: brand_info.into(),
            audience: audience.into(),
            offer: offer.into(),
        }
    }

    /// True when every field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        [
            &self.brand_name,
            &self.brand_info,
            &self.audience,
            &self.offer,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}
