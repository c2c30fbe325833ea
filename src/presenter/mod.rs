// Presenter — builds display payloads for chat answers, search hits and errors.
//
// Every builder is a pure function of its arguments and a timestamp. The
// `_at` variants take the timestamp explicitly; the plain variants stamp
// the payload with the current UTC time.

pub mod chat;
pub mod failure;
pub mod search;

use chrono::{DateTime, Utc};

use crate::error::PresentError;
use crate::models::{ContextEntry, DisplayPayload, SearchResult};

/// Platform length limits, all counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length of a single section body (default 1024)
    pub field_body: usize,
    /// Maximum combined length of all section bodies in a search payload (default 5000)
    pub payload_total: usize,
    /// Maximum length of each quoted context/search snippet (default 100)
    pub snippet: usize,
    /// Maximum length of the query echoed in the search title (default 100)
    pub query_title: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            field_body: 1024,
            payload_total: 5000,
            snippet: 100,
            query_title: 100,
        }
    }
}

/// Payload builder parameterized by platform limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presenter {
    pub limits: Limits,
}

impl Presenter {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Build a chat-response payload stamped with the current time.
    pub fn chat_payload(
        &self,
        question: &str,
        response: &str,
        context: &[ContextEntry],
    ) -> Result<DisplayPayload, PresentError> {
        self.chat_payload_at(question, response, context, Utc::now())
    }

    pub fn chat_payload_at(
        &self,
        question: &str,
        response: &str,
        context: &[ContextEntry],
        timestamp: DateTime<Utc>,
    ) -> Result<DisplayPayload, PresentError> {
        chat::build(&self.limits, question, response, context, timestamp)
    }

    /// Build a search-results payload stamped with the current time.
    pub fn search_payload(
        &self,
        results: &[SearchResult],
        query: &str,
    ) -> Result<DisplayPayload, PresentError> {
        self.search_payload_at(results, query, Utc::now())
    }

    pub fn search_payload_at(
        &self,
        results: &[SearchResult],
        query: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<DisplayPayload, PresentError> {
        search::build(&self.limits, results, query, timestamp)
    }

    /// Build an error payload stamped with the current time.
    pub fn error_payload(&self, error: &str) -> DisplayPayload {
        self.error_payload_at(error, Utc::now())
    }

    pub fn error_payload_at(&self, error: &str, timestamp: DateTime<Utc>) -> DisplayPayload {
        failure::build(error, timestamp)
    }
}

/// Build a chat-response payload with default limits.
pub fn build_chat_payload(
    question: &str,
    response: &str,
    context: &[ContextEntry],
) -> Result<DisplayPayload, PresentError> {
    Presenter::default().chat_payload(question, response, context)
}

/// Build a search-results payload with default limits.
pub fn build_search_payload(
    results: &[SearchResult],
    query: &str,
) -> Result<DisplayPayload, PresentError> {
    Presenter::default().search_payload(results, query)
}

/// Build an error payload.
pub fn build_error_payload(error: &str) -> DisplayPayload {
    Presenter::default().error_payload(error)
}
