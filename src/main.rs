use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use embedfmt::config::{Config, OutputFormat};
use embedfmt::models::DisplayPayload;
use embedfmt::output::{discord, terminal};
use embedfmt::presenter::Presenter;
use embedfmt::records;

/// embedfmt: format chat bot answers, search hits and errors as embeds.
///
/// Reads records as JSON and prints the resulting payload as Discord embed
/// JSON or a terminal preview.
#[derive(Parser)]
#[command(name = "embedfmt", version, about)]
struct Cli {
    /// Output format (overrides EMBEDFMT_FORMAT)
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Terminal,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a chat answer with its supporting context
    Chat {
        /// The question that was asked
        #[arg(long)]
        question: String,

        /// The bot's answer
        #[arg(long)]
        response: String,

        /// JSON file with an array of context records
        #[arg(long)]
        context: Option<PathBuf>,
    },

    /// Format search results
    Search {
        /// The search query
        #[arg(long)]
        query: String,

        /// JSON file with an array of search records
        #[arg(long)]
        results: PathBuf,
    },

    /// Format an error message
    Error {
        /// The error text
        #[arg(long)]
        message: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("embedfmt=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let format = match cli.format {
        Some(FormatArg::Json) => OutputFormat::Json,
        Some(FormatArg::Terminal) => OutputFormat::Terminal,
        None => config.format,
    };
    let presenter = Presenter::new(config.limits);

    let payload = match cli.command {
        Commands::Chat {
            question,
            response,
            context,
        } => {
            let context = match context {
                Some(path) => records::parse_context(&read_json(&path)?)
                    .with_context(|| format!("Invalid context records in {}", path.display()))?,
                None => Vec::new(),
            };
            info!(entries = context.len(), "Building chat payload");
            presenter.chat_payload(&question, &response, &context)?
        }

        Commands::Search { query, results } => {
            let parsed = records::parse_results(&read_json(&results)?)
                .with_context(|| format!("Invalid search records in {}", results.display()))?;
            info!(results = parsed.len(), "Building search payload");
            presenter.search_payload(&parsed, &query)?
        }

        Commands::Error { message } => presenter.error_payload(&message),
    };

    print_payload(&payload, format)
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn print_payload(payload: &DisplayPayload, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&discord::to_embed(payload))?);
        }
        OutputFormat::Terminal => terminal::display_payload(payload),
    }
    Ok(())
}
