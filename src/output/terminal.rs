// Colored terminal rendering of display payloads.
//
// Used by the CLI for a human-readable preview of what a chat client would
// show. `render_payload` builds the text; `display_payload` prints it.

use colored::Colorize;

use crate::models::{Category, DisplayPayload};

/// Render a payload as colored terminal text.
pub fn render_payload(payload: &DisplayPayload) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        colorize_category(payload.category),
        payload.title.bold()
    ));
    out.push_str(&format!(
        "  {}\n",
        payload.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
    ));

    if let Some(description) = &payload.description {
        out.push('\n');
        for line in description.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }

    for section in &payload.sections {
        out.push_str(&format!("\n  {}\n", section.name.underline()));
        for line in section.body.lines() {
            out.push_str(&format!("    {line}\n"));
        }
    }

    if let Some(footer) = &payload.footer {
        out.push_str(&format!("\n  {}\n", footer.dimmed()));
    }

    out
}

/// Print a payload to the terminal.
pub fn display_payload(payload: &DisplayPayload) {
    print!("{}", render_payload(payload));
}

/// Colorize a category tag.
fn colorize_category(category: Category) -> colored::ColoredString {
    let tag = format!("[{}]", category.as_str());
    match category {
        Category::Info => tag.blue().bold(),
        Category::Success => tag.green().bold(),
        Category::Error => tag.red().bold(),
    }
}
