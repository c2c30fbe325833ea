// Chat-response payloads.
//
// The answer goes in the description. The question and a numbered list of
// retrieved context follow as sections, each capped at the field limit.
// Context entries are added whole or not at all; once the next entry would
// overflow, a "..." marker closes the list.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::Limits;
use crate::error::{check_similarity, PresentError};
use crate::models::{Category, ContextEntry, DisplayPayload, Section};
use crate::output::{char_len, code_block, format_relevance, truncate_chars};

pub const TITLE: &str = "💬 Chat Response";
pub const QUESTION_SECTION: &str = "Question";
pub const CONTEXT_SECTION: &str = "Relevant Context";
pub const NO_CONTEXT: &str = "No relevant context found";
pub const OVERFLOW_MARKER: &str = "...";

pub(crate) fn build(
    limits: &Limits,
    question: &str,
    response: &str,
    context: &[ContextEntry],
    timestamp: DateTime<Utc>,
) -> Result<DisplayPayload, PresentError> {
    for (i, entry) in context.iter().enumerate() {
        check_similarity("context entry", i + 1, entry.similarity)?;
    }

    let mut sections = vec![Section::new(
        QUESTION_SECTION,
        truncate_chars(question, limits.field_body),
    )];

    if !context.is_empty() {
        sections.push(Section::new(CONTEXT_SECTION, context_body(limits, context)));
    }

    Ok(DisplayPayload {
        title: TITLE.to_string(),
        description: Some(response.to_string()),
        sections,
        category: Category::Success,
        timestamp,
        footer: None,
    })
}

/// Render one numbered context entry.
pub fn format_entry(limits: &Limits, index: usize, entry: &ContextEntry) -> String {
    format!(
        "{index}. {} ({}% relevance)\n{}",
        entry.sender_label(),
        format_relevance(entry.similarity),
        code_block(truncate_chars(&entry.text, limits.snippet)),
    )
}

fn context_body(limits: &Limits, context: &[ContextEntry]) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut total_len = 0;

    for (i, entry) in context.iter().enumerate() {
        let rendered = format_entry(limits, i + 1, entry);
        let entry_len = char_len(&rendered);

        // +1 for the newline separator
        if total_len + entry_len + 1 > limits.field_body {
            debug!(
                kept = lines.len(),
                dropped = context.len() - i,
                "Context exceeds field limit, truncating"
            );
            if !lines.is_empty() {
                lines.push(OVERFLOW_MARKER.to_string());
            }
            break;
        }

        total_len += entry_len + 1;
        lines.push(rendered);
    }

    if lines.is_empty() {
        return NO_CONTEXT.to_string();
    }

    let body = lines.join("\n");
    // The per-entry check is approximate; this cut is the real bound.
    truncate_chars(&body, limits.field_body).to_string()
}
