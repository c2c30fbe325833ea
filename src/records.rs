// Parsing of loosely-typed records from the retrieval component.
//
// Records arrive as JSON objects. Context records use `sim` (or
// `similarity`), `username` and `is_bot`; search records use `similarity`
// and `username`. Similarity may be a number or a numeric string.

use serde_json::{Map, Value};

use crate::error::{check_similarity, PresentError};
use crate::models::{ContextEntry, SearchResult};

const CONTEXT: &str = "context entry";
const RESULT: &str = "search result";

/// Parse a JSON array of context records.
pub fn parse_context(value: &Value) -> Result<Vec<ContextEntry>, PresentError> {
    let items = as_array(CONTEXT, value)?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| -> Result<ContextEntry, PresentError> {
            let index = i + 1;
            let obj = as_object(CONTEXT, index, item)?;
            let score = match obj.get("sim") {
                Some(_) => similarity(CONTEXT, index, obj, "sim")?,
                None => similarity(CONTEXT, index, obj, "similarity")?,
            };
            Ok(ContextEntry {
                text: text(CONTEXT, index, obj)?,
                similarity: score,
                sender_name: username(CONTEXT, index, obj)?,
                is_automated: match obj.get("is_bot") {
                    None | Some(Value::Null) => false,
                    Some(Value::Bool(b)) => *b,
                    Some(_) => {
                        return Err(PresentError::InvalidType {
                            record: CONTEXT,
                            index,
                            field: "is_bot",
                            expected: "a boolean",
                        })
                    }
                },
            })
        })
        .collect()
}

/// Parse a JSON array of search records.
pub fn parse_results(value: &Value) -> Result<Vec<SearchResult>, PresentError> {
    let items = as_array(RESULT, value)?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| -> Result<SearchResult, PresentError> {
            let index = i + 1;
            let obj = as_object(RESULT, index, item)?;
            Ok(SearchResult {
                text: text(RESULT, index, obj)?,
                similarity: similarity(RESULT, index, obj, "similarity")?,
                sender_name: username(RESULT, index, obj)?,
            })
        })
        .collect()
}

fn as_array<'a>(record: &'static str, value: &'a Value) -> Result<&'a Vec<Value>, PresentError> {
    value.as_array().ok_or(PresentError::InvalidType {
        record,
        index: 0,
        field: "records",
        expected: "an array",
    })
}

fn as_object<'a>(
    record: &'static str,
    index: usize,
    value: &'a Value,
) -> Result<&'a Map<String, Value>, PresentError> {
    value.as_object().ok_or(PresentError::InvalidType {
        record,
        index,
        field: "record",
        expected: "an object",
    })
}

fn text(
    record: &'static str,
    index: usize,
    obj: &Map<String, Value>,
) -> Result<String, PresentError> {
    match obj.get("text") {
        Some(Value::String(s)) => Ok(s.clone()),
        None | Some(Value::Null) => Err(PresentError::MissingField {
            record,
            index,
            field: "text",
        }),
        Some(_) => Err(PresentError::InvalidType {
            record,
            index,
            field: "text",
            expected: "a string",
        }),
    }
}

fn username(
    record: &'static str,
    index: usize,
    obj: &Map<String, Value>,
) -> Result<Option<String>, PresentError> {
    match obj.get("username") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(PresentError::InvalidType {
            record,
            index,
            field: "username",
            expected: "a string",
        }),
    }
}

fn similarity(
    record: &'static str,
    index: usize,
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, PresentError> {
    let invalid = PresentError::InvalidType {
        record,
        index,
        field,
        expected: "a number",
    };
    let value = match obj.get(field) {
        None | Some(Value::Null) => {
            return Err(PresentError::MissingField {
                record,
                index,
                field,
            })
        }
        Some(Value::Number(n)) => n.as_f64().ok_or(invalid)?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| invalid)?,
        Some(_) => return Err(invalid),
    };
    check_similarity(record, index, value)?;
    Ok(value)
}
