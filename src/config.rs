use std::env;

use anyhow::{Context, Result};

use crate::presenter::Limits;

/// How the CLI prints a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Discord embed JSON on stdout (default)
    Json,
    /// Colored human-readable preview
    Terminal,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "terminal" => Ok(OutputFormat::Terminal),
            other => anyhow::bail!("Unknown output format '{other}' (expected json or terminal)"),
        }
    }
}

/// Configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Every setting has a
/// default matching Discord's embed limits.
#[derive(Debug, Clone)]
pub struct Config {
    pub limits: Limits,
    pub format: OutputFormat,
}

impl Config {
    pub fn load() -> Result<Self> {
        let defaults = Limits::default();
        let limits = Limits {
            field_body: limit_from_env("EMBEDFMT_FIELD_LIMIT", defaults.field_body)?,
            payload_total: limit_from_env("EMBEDFMT_TOTAL_LIMIT", defaults.payload_total)?,
            snippet: limit_from_env("EMBEDFMT_SNIPPET_LIMIT", defaults.snippet)?,
            query_title: limit_from_env("EMBEDFMT_QUERY_LIMIT", defaults.query_title)?,
        };

        let format = match env::var("EMBEDFMT_FORMAT") {
            Ok(raw) => OutputFormat::parse(&raw).context("Invalid EMBEDFMT_FORMAT")?,
            Err(_) => OutputFormat::Json,
        };

        Ok(Self { limits, format })
    }
}

fn limit_from_env(name: &str, default: usize) -> Result<usize> {
    match env::var(name) {
        Ok(raw) => parse_limit(name, &raw),
        Err(_) => Ok(default),
    }
}

/// Parse a positive character limit.
pub fn parse_limit(name: &str, raw: &str) -> Result<usize> {
    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("{name} must be a positive integer, got '{raw}'"))?;
    if value == 0 {
        anyhow::bail!("{name} must be greater than zero");
    }
    Ok(value)
}
