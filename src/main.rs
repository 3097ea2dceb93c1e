//! Main entry point for the command-line translator

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translator_cli::cli::output;
use translator_cli::{create_engine, EngineSettings, TranslationRequest, ENGINE_NAMES};

/// Translate text from the command line via one of several web services
#[derive(Parser, Debug)]
#[command(name = "translator", version, about, long_about = None)]
struct Args {
    /// Engine to query
    #[arg(long, default_value = "google")]
    engine: String,

    /// Source language (guessed when omitted)
    #[arg(long = "from", default_value = "auto")]
    source: String,

    /// Target language (guessed when omitted)
    #[arg(long = "to", default_value = "auto")]
    target: String,

    /// Configuration file (default: ~/.config/translator/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the raw result as JSON
    #[arg(long)]
    json: bool,

    /// Also print the phonetic transcription when available
    #[arg(long)]
    phonetic: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Text to translate; words are joined with spaces
    text: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("translator_cli={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if args.text.is_empty() {
        println!("usage: translator [--engine=xx] [--from=xx] [--to=xx] [--json] text");
        println!("engines: {}", ENGINE_NAMES.join(", "));
        return Ok(());
    }

    let request = TranslationRequest::new(
        &args.engine,
        &args.source,
        &args.target,
        args.text.join(" "),
    );

    let settings = EngineSettings::load(&request.engine, args.config.as_deref())?;
    let engine = create_engine(&request.engine, settings)?;
    let result = engine.translate(&request.source_lang, &request.target_lang, &request.text)?;

    if args.json {
        output::print_json(&result)?;
    } else {
        output::print_plain(&result, args.phonetic);
    }
    Ok(())
}
