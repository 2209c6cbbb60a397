//! Prompt template for request drafting.

/// Drafting prompt. Placeholders: `{topic}`, `{examples}`.
pub const DRAFT_PROMPT: &str = r#"You are an expert in crafting public records requests.
Here are some recent successful requests on {topic}:

{examples}

Suggest a clearer, more effective FOIA request for a journalist who wants records on {topic}.

Omit any introduction, outtro, citations of laws, rationale, etc. Avoid naming any specific agencies as well.
Avoid splitting into a title and body."#;
