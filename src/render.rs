//! Markdown rendering of a generation result for the terminal.

use crate::models::{
    result::bullets, GenerationRequest, GenerationResult, MISSING_HEADLINE,
    MISSING_NEWSLETTER, MISSING_SUBHEADLINE, MISSING_VOICE_SCRIPT,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Append the full response as pretty JSON.
    pub include_raw: bool,
}

pub fn render_report(
    result: &GenerationResult,
    request: &GenerationRequest,
    options: RenderOptions,
) -> String {
    let mut sections = vec![
        voice_profile(result, request),
        website_copy(result),
        newsletter(result),
        voice_script(result),
    ];

    if options.include_raw {
        sections.push(raw_json(result));
    }

    sections.join("\n\n---\n\n")
}

fn voice_profile(result: &GenerationResult, request: &GenerationRequest) -> String {
    let mut out = String::from("## 1. Brand Voice Profile\n\n");

    out.push_str(&format!(
        "**Brand name:** {}\n\n",
        result.brand_name(&request.brand_name)
    ));
    out.push_str(&format!(
        "**Audience:** {}\n\n",
        result.audience(&request.audience)
    ));
    out.push_str(&format!("**Offer:** {}\n\n", result.offer(&request.offer)));
    out.push_str(&format!("**Tone label:** `{}`\n\n", result.tone()));
    out.push_str(&format!(
        "**Voice description:**\n{}\n\n",
        result.voice_description()
    ));
    out.push_str(&format!(
        "**Emotional angle:**\n{}\n\n",
        result.emotional_angle()
    ));
    out.push_str(&format!(
        "**Keywords to use:**\n{}\n\n",
        result.keywords_to_use().to_markdown()
    ));
    out.push_str(&format!(
        "**Phrases to avoid:**\n{}\n\n",
        result.phrases_to_avoid().to_markdown()
    ));
    out.push_str(&format!(
        "**Core selling points:**\n{}",
        result.selling_points().to_markdown()
    ));

    out
}

fn website_copy(result: &GenerationResult) -> String {
    let mut out = String::from("## 2. Website Hero Copy\n\n");

    let headline = result
        .website_headline()
        .unwrap_or_else(|| MISSING_HEADLINE.to_string());
    let subheadline = result
        .website_subheadline()
        .unwrap_or_else(|| MISSING_SUBHEADLINE.to_string());

    out.push_str(&format!("### {}\n\n{}", headline, subheadline));

    let value_props = result.website_bullets();
    if !value_props.is_empty() {
        out.push_str(&format!(
            "\n\n**Key value props:**\n{}",
            bullets(&value_props)
        ));
    }

    out
}

fn newsletter(result: &GenerationResult) -> String {
    let body = result
        .newsletter_email()
        .unwrap_or_else(|| MISSING_NEWSLETTER.to_string());
    format!("## 3. Newsletter Email\n\n{}", body)
}

fn voice_script(result: &GenerationResult) -> String {
    let body = result
        .voice_script()
        .unwrap_or_else(|| MISSING_VOICE_SCRIPT.to_string());
    format!("## 4. Voice Script for Sales Calls / Voice Agent\n\n{}", body)
}

fn raw_json(result: &GenerationResult) -> String {
    format!(
        "## 5. Raw JSON\n\n```json\n{}\n```",
        result.to_pretty_json()
    )
}
