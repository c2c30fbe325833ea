// Unit tests for the three payload builders.
//
// Covers the field caps on question and context, the context overflow
// marker, the search payload budget and footer count, the error payload,
// and validation of similarity scores.

use chrono::{DateTime, TimeZone, Utc};

use embedfmt::error::PresentError;
use embedfmt::models::{Category, ContextEntry, SearchResult};
use embedfmt::output::char_len;
use embedfmt::presenter::{
    build_chat_payload, build_error_payload, build_search_payload, Limits, Presenter,
};

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, 9, 26, 53).unwrap()
}

fn context_body(context: &[ContextEntry]) -> String {
    let payload = Presenter::default()
        .chat_payload_at("q", "a", context, at())
        .unwrap();
    payload.section("Relevant Context").unwrap().body.clone()
}

// ============================================================
// Chat payload — question section
// ============================================================

#[test]
fn chat_basic_example() {
    let context = vec![ContextEntry::new("X relates to Y because...", 0.92).with_sender("Alice")];
    let payload = build_chat_payload("What is X?", "X is Y.", &context).unwrap();

    assert_eq!(payload.category, Category::Success);
    assert_eq!(payload.description.as_deref(), Some("X is Y."));
    assert_eq!(payload.section("Question").unwrap().body, "What is X?");
    assert!(payload
        .section("Relevant Context")
        .unwrap()
        .body
        .starts_with("1. Alice (92.0% relevance)"));
    assert!(payload.sections.iter().all(|s| !s.inline));
}

#[test]
fn chat_question_is_hard_cut_at_field_limit() {
    let question = format!("{}{}", "a".repeat(1024), "b".repeat(500));
    let payload = build_chat_payload(&question, "r", &[]).unwrap();
    let body = &payload.section("Question").unwrap().body;
    assert_eq!(body.len(), 1024);
    assert_eq!(body, &"a".repeat(1024));
}

#[test]
fn chat_question_cut_counts_characters_not_bytes() {
    let question = "é".repeat(2000);
    let payload = build_chat_payload(&question, "r", &[]).unwrap();
    let body = &payload.section("Question").unwrap().body;
    assert_eq!(char_len(body), 1024);
    assert_eq!(body, &"é".repeat(1024));
}

#[test]
fn chat_response_is_not_truncated() {
    let response = "z".repeat(6000);
    let payload = build_chat_payload("q", &response, &[]).unwrap();
    assert_eq!(payload.description.as_deref(), Some(response.as_str()));
}

// ============================================================
// Chat payload — context section
// ============================================================

#[test]
fn chat_empty_context_has_no_context_section() {
    let payload = build_chat_payload("q", "a", &[]).unwrap();
    assert_eq!(payload.sections.len(), 1);
    assert!(payload.section("Relevant Context").is_none());
}

#[test]
fn chat_small_context_keeps_all_entries_in_order() {
    let context = vec![
        ContextEntry::new("first", 0.9).with_sender("Alice"),
        ContextEntry::new("second", 0.5).automated(),
        ContextEntry::new("third", 0.25),
    ];
    assert_eq!(
        context_body(&context),
        "1. Alice (90.0% relevance)\n```first```\n\
         2. Bot (50.0% relevance)\n```second```\n\
         3. User (25.0% relevance)\n```third```"
    );
}

#[test]
fn chat_named_bot_uses_its_name() {
    let context = vec![ContextEntry::new("hi", 0.1).with_sender("Helper").automated()];
    assert!(context_body(&context).starts_with("1. Helper (10.0% relevance)"));
}

#[test]
fn chat_overflowing_context_ends_with_marker_and_keeps_a_prefix() {
    let context: Vec<ContextEntry> = (1..=30)
        .map(|i| ContextEntry::new(format!("entry number {i} {}", "w".repeat(90)), 0.8))
        .collect();
    let body = context_body(&context);

    assert!(body.ends_with("\n..."));
    assert!(char_len(&body) <= 1024);

    let kept: Vec<&str> = body.split('\n').filter(|l| l.contains("% relevance")).collect();
    assert!(!kept.is_empty() && kept.len() < context.len());
    for (i, line) in kept.iter().enumerate() {
        assert!(line.starts_with(&format!("{}. User", i + 1)), "line was {line}");
    }
}

#[test]
fn chat_relevance_rounds_the_percentage_not_the_fraction() {
    let context = vec![ContextEntry::new("low", 0.0125).with_sender("A")];
    assert!(context_body(&context).starts_with("1. A (1.2% relevance)"));
}

#[test]
fn chat_context_snippets_are_capped_at_100_chars() {
    let context = vec![ContextEntry::new("s".repeat(500), 0.4)];
    let body = context_body(&context);
    assert!(body.contains(&format!("```{}```", "s".repeat(100))));
    assert!(!body.contains(&"s".repeat(101)));
}

#[test]
fn chat_no_entry_fits_gives_placeholder() {
    let context = vec![ContextEntry::new("text", 0.4).with_sender("n".repeat(2000))];
    assert_eq!(context_body(&context), "No relevant context found");
}

#[test]
fn chat_context_respects_custom_field_limit() {
    let presenter = Presenter::new(Limits {
        field_body: 100,
        ..Limits::default()
    });
    let context: Vec<ContextEntry> = (0..5).map(|_| ContextEntry::new("abc", 0.5)).collect();
    let payload = presenter.chat_payload_at("q", "a", &context, at()).unwrap();
    let body = &payload.section("Relevant Context").unwrap().body;
    assert!(char_len(body) <= 100);
    assert!(body.ends_with("..."));
}

// ============================================================
// Search payload
// ============================================================

#[test]
fn search_three_small_results() {
    let results = vec![
        SearchResult::new("alpha", 0.91).with_sender("Alice"),
        SearchResult::new("beta", 0.72),
        SearchResult::new("gamma", 0.5).with_sender("Carol"),
    ];
    let payload = build_search_payload(&results, "greek").unwrap();

    assert_eq!(payload.category, Category::Info);
    assert_eq!(payload.title, "🔍 Search Results for: greek");
    assert_eq!(payload.sections.len(), 3);
    assert_eq!(payload.sections[0].name, "Result 1 (91.0% match)");
    assert_eq!(payload.sections[0].body, "From: Alice\n```alpha```");
    assert_eq!(payload.sections[1].body, "From: User\n```beta```");
    assert_eq!(payload.sections[2].name, "Result 3 (50.0% match)");
    assert_eq!(payload.footer.as_deref(), Some("Found 3 results"));
    assert!(payload.section("Note").is_none());
}

#[test]
fn search_overflow_appends_note_and_reports_full_count() {
    // Each body: "From: User\n```" + 100 chars + "```" = 117 chars
    let results: Vec<SearchResult> = (0..60)
        .map(|i| SearchResult::new(format!("{i:03}{}", "r".repeat(200)), 0.6))
        .collect();
    let payload = Presenter::default()
        .search_payload_at(&results, "lots", at())
        .unwrap();

    let last = payload.sections.last().unwrap();
    assert_eq!(last.name, "Note");
    assert_eq!(last.body, "Some results were truncated...");
    // 5000 / 117 = 42 full results fit
    assert_eq!(payload.sections.len(), 43);
    assert_eq!(payload.footer.as_deref(), Some("Found 60 results"));

    let total: usize = payload.sections[..42].iter().map(|s| char_len(&s.body)).sum();
    assert!(total <= 5000);
}

// ============================================================
// Error payload
// ============================================================

#[test]
fn error_payload_wraps_message() {
    let payload = build_error_payload("boom");
    assert_eq!(payload.category, Category::Error);
    assert_eq!(payload.title, "Error Occurred");
    assert_eq!(payload.description.as_deref(), Some("```boom```"));
    assert!(payload.sections.is_empty());
    assert_eq!(
        payload.footer.as_deref(),
        Some("Please try again or contact support if the issue persists")
    );
}

// ============================================================
// Idempotence and validation
// ============================================================

#[test]
fn builders_are_idempotent_apart_from_timestamp() {
    let context = vec![ContextEntry::new("ctx", 0.33)];
    let results = vec![SearchResult::new("hit", 0.66)];

    let a = build_chat_payload("q", "a", &context).unwrap();
    let b = build_chat_payload("q", "a", &context).unwrap();
    assert!(a.same_content(&b));

    let a = build_search_payload(&results, "q").unwrap();
    let b = build_search_payload(&results, "q").unwrap();
    assert!(a.same_content(&b));

    assert!(build_error_payload("e").same_content(&build_error_payload("e")));

    let p = Presenter::default();
    assert_eq!(
        p.chat_payload_at("q", "a", &context, at()).unwrap(),
        p.chat_payload_at("q", "a", &context, at()).unwrap()
    );
}

#[test]
fn chat_rejects_out_of_range_similarity() {
    let context = vec![ContextEntry::new("ok", 0.5), ContextEntry::new("bad", 1.2)];
    let err = build_chat_payload("q", "a", &context).unwrap_err();
    assert_eq!(
        err,
        PresentError::InvalidRange {
            record: "context entry",
            index: 2,
            value: 1.2,
        }
    );
}

#[test]
fn search_rejects_negative_similarity() {
    let results = vec![SearchResult::new("bad", -0.1)];
    assert!(matches!(
        build_search_payload(&results, "q"),
        Err(PresentError::InvalidRange { index: 1, .. })
    ));
}
