// Discord embed rendering.
//
// Maps a `DisplayPayload` onto the JSON shape of a Discord embed object.
// The category-to-color mapping lives here, on the client side.

use serde_json::{json, Value};

use crate::models::{Category, DisplayPayload};

pub const BLUE: u32 = 0x3498DB;
pub const GREEN: u32 = 0x2ECC71;
pub const RED: u32 = 0xE74C3C;

/// Embed color for a payload category.
pub fn color(category: Category) -> u32 {
    match category {
        Category::Info => BLUE,
        Category::Success => GREEN,
        Category::Error => RED,
    }
}

/// Build the embed object for a payload.
pub fn to_embed(payload: &DisplayPayload) -> Value {
    let fields: Vec<Value> = payload
        .sections
        .iter()
        .map(|s| json!({ "name": s.name, "value": s.body, "inline": s.inline }))
        .collect();

    let mut embed = json!({
        "title": payload.title,
        "color": color(payload.category),
        "fields": fields,
        "timestamp": payload.timestamp.to_rfc3339(),
    });

    if let Some(description) = &payload.description {
        embed["description"] = json!(description);
    }
    if let Some(footer) = &payload.footer {
        embed["footer"] = json!({ "text": footer });
    }

    embed
}
