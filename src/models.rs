// Data models — the payloads the presenter builds and the records it reads.
//
// Payloads are plain data. They carry a category, never a color: each
// renderer in `output` decides how a category looks on its client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visual category of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Info,
    Success,
    Error,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Success => "success",
            Category::Error => "error",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named block of text within a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub body: String,
    pub inline: bool,
}

impl Section {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            inline: false,
        }
    }
}

/// A finished display payload, ready to hand to a delivery client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPayload {
    pub title: String,
    pub description: Option<String>,
    pub sections: Vec<Section>,
    pub category: Category,
    pub timestamp: DateTime<Utc>,
    pub footer: Option<String>,
}

impl DisplayPayload {
    /// Look up a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Compare two payloads on every field except the timestamp.
    pub fn same_content(&self, other: &DisplayPayload) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.sections == other.sections
            && self.category == other.category
            && self.footer == other.footer
    }
}

/// A retrieved message shown as supporting context for a chat answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextEntry {
    pub text: String,
    /// Retrieval similarity, 0.0 to 1.0
    pub similarity: f64,
    pub sender_name: Option<String>,
    /// Whether the original message came from a bot account
    pub is_automated: bool,
}

impl ContextEntry {
    pub fn new(text: impl Into<String>, similarity: f64) -> Self {
        Self {
            text: text.into(),
            similarity,
            sender_name: None,
            is_automated: false,
        }
    }

    pub fn with_sender(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }

    pub fn automated(mut self) -> Self {
        self.is_automated = true;
        self
    }

    /// Sender label: the name if known, otherwise "Bot" or "User".
    pub fn sender_label(&self) -> &str {
        match &self.sender_name {
            Some(name) => name.as_str(),
            None if self.is_automated => "Bot",
            None => "User",
        }
    }
}

/// A single hit from a message search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    /// Retrieval similarity, 0.0 to 1.0
    pub similarity: f64,
    pub sender_name: Option<String>,
}

impl SearchResult {
    pub fn new(text: impl Into<String>, similarity: f64) -> Self {
        Self {
            text: text.into(),
            similarity,
            sender_name: None,
        }
    }

    pub fn with_sender(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }

    pub fn sender_label(&self) -> &str {
        self.sender_name.as_deref().unwrap_or("User")
    }
}
