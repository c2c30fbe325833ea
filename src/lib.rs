// embedfmt: field-limit-aware embed formatting for chat bots
//
// This is the library root. The presenter builds display payloads; the
// output module holds truncation helpers and the renderers that adapt
// payloads to a concrete client.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod presenter;
pub mod records;
