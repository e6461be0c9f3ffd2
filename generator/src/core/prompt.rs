//! Prompt construction for blog title generation

use shared::GenerationRequest;

/// Build the instruction sent to the text provider
///
/// Field values are interpolated verbatim. Absent content or audience are
/// rendered as empty values so the rule set stays identical for every request.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let content = request.content.as_deref().unwrap_or_default();
    let audience = request.audience.as_deref().unwrap_or_default();

    format!(
        "
Generate {count} SEO-optimized blog titles.

Rules:
- Use main keyword
- 50-60 characters
- Include one question, one list, one how-to
- Mention target audience if provided
- Blog Type: {title_type}
- Search Intent: {search_intent}
- Language: {language}

Keywords: {keywords}
Content: {content}
Audience: {audience}

Return only the titles.
",
        count = request.count,
        title_type = request.title_type,
        search_intent = request.search_intent,
        language = request.language,
        keywords = request.keywords,
    )
}
