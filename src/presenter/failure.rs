// Error payloads.
//
// The error text is shown verbatim in a code block. No length cap is
// applied; callers are expected to pass short messages.

use chrono::{DateTime, Utc};

use crate::models::{Category, DisplayPayload};
use crate::output::code_block;

pub const TITLE: &str = "Error Occurred";
pub const SUPPORT_FOOTER: &str = "Please try again or contact support if the issue persists";

pub(crate) fn build(error: &str, timestamp: DateTime<Utc>) -> DisplayPayload {
    DisplayPayload {
        title: TITLE.to_string(),
        description: Some(code_block(error)),
        sections: Vec::new(),
        category: Category::Error,
        timestamp,
        footer: Some(SUPPORT_FOOTER.to_string()),
    }
}
