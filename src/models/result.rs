use serde::Serialize;
use serde_json::{Map, Value};

pub const DEFAULT_TONE: &str = "unknown";
pub const DEFAULT_VOICE_DESCRIPTION: &str = "No description returned.";
pub const DEFAULT_EMOTIONAL_ANGLE: &str = "Not specified.";
pub const EMPTY_LIST: &str = "_none_";
pub const MISSING_HEADLINE: &str = "[headline missing]";
pub const MISSING_SUBHEADLINE: &str = "_No subheadline returned._";
pub const MISSING_NEWSLETTER: &str = "No newsletter email returned from backend.";
pub const MISSING_VOICE_SCRIPT: &str = "No voice script returned from backend.";

/// Keys the workflow is known to return. Anything else is kept but only
/// reachable through [`GenerationResult::raw`].
pub const RECOGNIZED_KEYS: [&str; 15] = [
    "timestamp",
    "brandName",
    "audience",
    "offer",
    "tone",
    "voice_description",
    "keywords_to_use",
    "phrases_to_avoid",
    "emotional_angle",
    "selling_points",
    "website_headline",
    "website_subheadline",
    "website_bullets",
    "newsletter_email",
    "voice_script_for_sales_calls",
];

/// A list-typed field as the workflow actually sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    List(Vec<String>),
    /// The key held something other than an array; shown verbatim.
    Text(String),
}

impl Field {
    /// Markdown bullets, or `_none_` for an empty list.
    pub fn to_markdown(&self) -> String {
        match self {
            Field::List(items) if items.is_empty() => EMPTY_LIST.to_string(),
            Field::List(items) => bullets(items),
            Field::Text(text) => text.clone(),
        }
    }
}

pub(crate) fn bullets(items: &[String]) -> String {
    format!("- {}", items.join("\n- "))
}

/// The normalized webhook response.
///
/// The schema belongs to the remote workflow, so nothing here is enforced:
/// the accessors read defensively and fall back to fixed defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GenerationResult(Value);

impl GenerationResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.get(key).filter(|v| !v.is_null())
    }

    /// Keys present in the response that no accessor covers.
    pub fn extra_keys(&self) -> Vec<&str> {
        self.as_map()
            .map(|map| {
                map.keys()
                    .map(String::as_str)
                    .filter(|key| !RECOGNIZED_KEYS.contains(key))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(value_text)
    }

    /// Like [`text`](Self::text) but treats an empty string as absent.
    pub fn non_empty_text(&self, key: &str) -> Option<String> {
        self.text(key).filter(|s| !s.is_empty())
    }

    pub fn field(&self, key: &str) -> Field {
        match self.get(key) {
            None => Field::List(Vec::new()),
            Some(Value::Array(items)) => Field::List(items.iter().map(value_text).collect()),
            Some(other) => Field::Text(value_text(other)),
        }
    }

    pub fn timestamp(&self) -> Option<String> {
        self.text("timestamp")
    }

    pub fn brand_name(&self, fallback: &str) -> String {
        self.text("brandName").unwrap_or_else(|| fallback.to_string())
    }

    pub fn audience(&self, fallback: &str) -> String {
        self.text("audience").unwrap_or_else(|| fallback.to_string())
    }

    pub fn offer(&self, fallback: &str) -> String {
        self.text("offer").unwrap_or_else(|| fallback.to_string())
    }

    pub fn tone(&self) -> String {
        self.text("tone").unwrap_or_else(|| DEFAULT_TONE.to_string())
    }

    pub fn voice_description(&self) -> String {
        self.text("voice_description")
            .unwrap_or_else(|| DEFAULT_VOICE_DESCRIPTION.to_string())
    }

    pub fn emotional_angle(&self) -> String {
        self.text("emotional_angle")
            .unwrap_or_else(|| DEFAULT_EMOTIONAL_ANGLE.to_string())
    }

    pub fn keywords_to_use(&self) -> Field {
        self.field("keywords_to_use")
    }

    pub fn phrases_to_avoid(&self) -> Field {
        self.field("phrases_to_avoid")
    }

    pub fn selling_points(&self) -> Field {
        self.field("selling_points")
    }

    pub fn website_headline(&self) -> Option<String> {
        self.non_empty_text("website_headline")
    }

    pub fn website_subheadline(&self) -> Option<String> {
        self.non_empty_text("website_subheadline")
    }

    /// Only a non-empty array counts; any other shape yields nothing.
    pub fn website_bullets(&self) -> Vec<String> {
        match self.field("website_bullets") {
            Field::List(items) => items,
            Field::Text(_) => Vec::new(),
        }
    }

    pub fn newsletter_email(&self) -> Option<String> {
        self.non_empty_text("newsletter_email")
    }

    pub fn voice_script(&self) -> Option<String> {
        self.non_empty_text("voice_script_for_sales_calls")
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
