// Search-results payloads.
//
// One section per hit, in ranked order. A single running total covers every
// section body in the payload; when the next hit would push it past the
// payload limit, a "Note" section replaces the rest.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::Limits;
use crate::error::{check_similarity, PresentError};
use crate::models::{Category, DisplayPayload, SearchResult, Section};
use crate::output::{char_len, code_block, format_relevance, truncate_chars};

pub const TITLE_PREFIX: &str = "🔍 Search Results for: ";
pub const NOTE_SECTION: &str = "Note";
pub const TRUNCATED_NOTE: &str = "Some results were truncated...";

pub(crate) fn build(
    limits: &Limits,
    results: &[SearchResult],
    query: &str,
    timestamp: DateTime<Utc>,
) -> Result<DisplayPayload, PresentError> {
    for (i, result) in results.iter().enumerate() {
        check_similarity("search result", i + 1, result.similarity)?;
    }

    let mut sections = Vec::with_capacity(results.len());
    let mut total_len = 0;

    for (i, result) in results.iter().enumerate() {
        let body = result_body(limits, result);
        let body_len = char_len(&body);

        if total_len + body_len > limits.payload_total {
            debug!(
                shown = i,
                total = results.len(),
                "Search results exceed payload limit, truncating"
            );
            sections.push(Section::new(NOTE_SECTION, TRUNCATED_NOTE));
            break;
        }

        sections.push(Section::new(
            format!("Result {} ({}% match)", i + 1, format_relevance(result.similarity)),
            body,
        ));
        total_len += body_len;
    }

    Ok(DisplayPayload {
        title: format!("{TITLE_PREFIX}{}", truncate_chars(query, limits.query_title)),
        description: None,
        sections,
        category: Category::Info,
        timestamp,
        // Counts every supplied result, including any dropped above.
        footer: Some(format!("Found {} results", results.len())),
    })
}

/// Render the body of one result section.
pub fn result_body(limits: &Limits, result: &SearchResult) -> String {
    format!(
        "From: {}\n{}",
        result.sender_label(),
        code_block(truncate_chars(&result.text, limits.snippet)),
    )
}
