//! Moodlens CLI
//!
//! Command-line interface for reflection analysis.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze a reflection
//! moodlens analyze --text "I feel nervous about my interview"
//!
//! # Pipe from stdin
//! cat journal.txt | moodlens analyze
//!
//! # JSON request body in, JSON result out
//! echo '{"text": "So excited for tomorrow"}' | moodlens analyze --json-request --format json
//!
//! # Show the lexicon
//! moodlens lexicon
//! moodlens lexicon sad
//! ```
//!
//! ## Exit Codes
//!
//! - 0: Analyzed
//! - 1: Input rejected
//! - 3: Error (with `--format json`, stdout carries `{"error": "Internal server error"}`)

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use moodlens_core::{
    analyze, lexicon, AnalyzeRequest, Classification, ClassifierConfig, ErrorBody, Strategy,
    DEFAULT_INSIGHTS, DEFAULT_POOL, LEXICON,
};

/// Moodlens: emotion guesses for free-text reflections
#[derive(Parser)]
#[command(name = "moodlens")]
#[command(version)]
#[command(about = "Guess the emotion behind a reflection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a reflection
    Analyze {
        /// Reflection text (reads --input or stdin if not provided)
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,

        /// Path to a file containing the reflection
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Treat the input as a JSON request body: {"text": "..."}
        #[arg(long)]
        json_request: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Matching strategy (overrides the config file)
        #[arg(short, long)]
        strategy: Option<StrategyArg>,

        /// Path to a classifier config (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show which keyword decided the result
        #[arg(long)]
        explain: bool,
    },

    /// Show the emotion lexicon
    Lexicon {
        /// Show a single emotion's keywords and insight
        emotion: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    FirstMatch,
    Scored,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::FirstMatch => Strategy::FirstMatch,
            StrategyArg::Scored => Strategy::Scored,
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let format = cli.command.output_format();

    match run(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Command failed");
            match failure_body(format) {
                Some(body) => println!("{}", body),
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::from(3)
        }
    }
}

impl Commands {
    fn output_format(&self) -> OutputFormat {
        match self {
            Commands::Analyze { format, .. } => *format,
            Commands::Lexicon { .. } => OutputFormat::Text,
        }
    }
}

/// Body printed to stdout for an unexpected failure.
///
/// JSON output gets the generic error body; internal detail only goes to the
/// log. Text output has no body and reports the error on stderr.
fn failure_body(format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Json => {
            let body = ErrorBody::internal();
            Some(serde_json::to_string_pretty(&body).unwrap_or(body.error))
        }
        OutputFormat::Text => None,
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Analyze {
            text,
            input,
            json_request,
            format,
            strategy,
            config,
            explain,
        } => analyze_command(text, input, json_request, format, strategy, config, explain),

        Commands::Lexicon { emotion } => lexicon_command(emotion),
    }
}

fn analyze_command(
    text: Option<String>,
    input_path: Option<PathBuf>,
    json_request: bool,
    format: OutputFormat,
    strategy: Option<StrategyArg>,
    config_path: Option<PathBuf>,
    explain: bool,
) -> Result<ExitCode> {
    // Load config
    let mut config = match config_path {
        Some(path) => ClassifierConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => ClassifierConfig::default(),
    };
    if let Some(strategy) = strategy {
        config.strategy = strategy.into();
    }
    tracing::debug!(strategy = %config.strategy, min_chars = config.min_reflection_chars, "Config loaded");

    // Load input
    let content = match (text, input_path) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read reflection from {:?}", path))?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    let request = parse_request(content, json_request)?;

    let classifier = config.classifier();
    let classification = match analyze(&request, classifier.as_ref(), config.min_reflection_chars) {
        Ok(classification) => classification,
        Err(e) => return Ok(print_rejection(&e.to_body(), format)),
    };

    // Output results
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&classification.result)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print_text_result(&classification, config.strategy, explain);
        }
    }

    Ok(ExitCode::from(0))
}

fn parse_request(content: String, json_request: bool) -> Result<AnalyzeRequest> {
    if json_request {
        AnalyzeRequest::from_json(&content).context("Failed to parse request body")
    } else {
        Ok(AnalyzeRequest::new(content))
    }
}

fn print_rejection(body: &ErrorBody, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(body) {
            Ok(json) => println!("{}", json),
            Err(_) => println!("{}", body.error),
        },
        OutputFormat::Text => eprintln!("{}", body.error),
    }
    ExitCode::from(1)
}

fn print_text_result(classification: &Classification, strategy: Strategy, explain: bool) {
    let result = &classification.result;

    println!("{}", result.emotion.to_uppercase());
    println!();
    println!("{}", result.insights);
    println!();
    println!("Confidence: {:.0}%", result.confidence * 100.0);

    if explain {
        println!();
        println!("--- Explanation ---");
        println!();
        println!("Strategy: {}", strategy);
        match classification.matched_keyword {
            Some(keyword) => println!("Matched keyword: {:?}", keyword),
            None => println!("No keyword matched; guessed from the default pool"),
        }
    }
}

fn lexicon_command(emotion: Option<String>) -> Result<ExitCode> {
    match emotion {
        Some(name) => {
            let Some(entry) = lexicon::entry(&name) else {
                let known: Vec<&str> = lexicon::emotions().collect();
                bail!("Unknown emotion {:?}. Known emotions: {}", name, known.join(", "));
            };

            println!("Emotion: {}", entry.emotion);
            println!();
            println!("Keywords:");
            for kw in entry.keywords {
                println!("  - {}", kw);
            }
            println!();
            println!("Insight: {}", entry.insights);
        }
        None => {
            for (i, entry) in LEXICON.iter().enumerate() {
                println!("{}. {}: {}", i + 1, entry.emotion, entry.keywords.join(", "));
            }
            println!();
            println!("Default pool: {}", DEFAULT_POOL.join(", "));
            println!("Default insight: {}", DEFAULT_INSIGHTS);
        }
    }

    Ok(ExitCode::from(0))
}
