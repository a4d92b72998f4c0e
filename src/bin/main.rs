//! colspec CLI - Parse column sort and grouping annotations
//!
//! Usage:
//!   colspec sort [TEXT] [--format <format>]
//!   colspec group [TEXT] [--format <format>]
//!
//! TEXT is read from stdin when omitted.
//!
//! Examples:
//!   colspec sort "LastName, FirstName desc"
//!   colspec group "(Region), (LastName, FirstName desc)" --format json
//!   echo "(A) (B)" | colspec group

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use clap::{Parser, Subcommand, ValueEnum};
use colspec::config::{OutputFormat, Settings};
use colspec::dsl::{self, ParseError};
use colspec::model::{format_grouping_levels, format_sort_level};
use serde::Serialize;
use std::fmt::Debug;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "colspec")]
#[command(about = "colspec - Parse column sort and grouping annotations")]
#[command(version)]
struct Cli {
    /// Path to a colspec.toml settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the settings file)
    #[arg(short, long, global = true)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a flat sort level, e.g. "A, B desc"
    Sort {
        /// Annotation text (read from stdin if not given)
        text: Option<String>,
    },

    /// Parse grouping levels, e.g. "(A, B desc), (C)"
    Group {
        /// Annotation text (read from stdin if not given)
        text: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Debug,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Debug => OutputFormat::Debug,
        }
    }
}

/// Enable with `RUST_LOG=colspec=debug` or `RUST_LOG=colspec=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let settings = resolve_settings(&cli);

    match cli.command {
        Commands::Sort { text } => {
            let Some(text) = read_text(text) else {
                return ExitCode::FAILURE;
            };
            match dsl::parse_sort_level(text.as_str()) {
                Ok(level) => print_result(&settings, &level, || format_sort_level(&level)),
                Err(e) => report_error(&settings, &text, &e),
            }
        }
        Commands::Group { text } => {
            let Some(text) = read_text(text) else {
                return ExitCode::FAILURE;
            };
            match dsl::parse_grouping_levels(text.as_str()) {
                Ok(levels) => print_result(&settings, &levels, || format_grouping_levels(&levels)),
                Err(e) => report_error(&settings, &text, &e),
            }
        }
    }
}

/// Settings from `--config` (or the default lookup), then `--format` on top.
fn resolve_settings(cli: &Cli) -> Settings {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Warning: {}; using default settings", e);
        Settings::default()
    });

    if let Some(format) = cli.format {
        settings.output.format = format.into();
    }
    settings
}

fn read_text(text: Option<String>) -> Option<String> {
    if let Some(text) = text {
        return Some(text);
    }

    let mut buffer = String::new();
    match io::stdin().read_to_string(&mut buffer) {
        Ok(_) => Some(buffer),
        Err(e) => {
            eprintln!("Error reading stdin: {}", e);
            None
        }
    }
}

fn print_result<T: Serialize + Debug>(
    settings: &Settings,
    value: &T,
    canonical: impl FnOnce() -> String,
) -> ExitCode {
    match settings.output.format {
        OutputFormat::Text => println!("{}", canonical()),
        OutputFormat::Debug => println!("{:#?}", value),
        OutputFormat::Json => {
            let json = if settings.output.pretty {
                serde_json::to_string_pretty(value)
            } else {
                serde_json::to_string(value)
            };
            match json {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing result: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }
    ExitCode::SUCCESS
}

fn report_error(settings: &Settings, text: &str, error: &ParseError) -> ExitCode {
    let name = settings.diagnostics.source_name.as_str();
    let span = error.span();

    let label = match error {
        ParseError::UnrecognizedCharacter { .. } => "not valid in an annotation".to_string(),
        ParseError::UnexpectedToken { found, .. } => format!("found {}", found),
        ParseError::DuplicateField { .. } => "already used".to_string(),
    };

    let rendered = Report::build(ReportKind::Error, (name, span.clone()))
        .with_config(
            Config::default()
                .with_color(settings.diagnostics.color)
                .with_index_type(IndexType::Byte),
        )
        .with_message(error.message())
        .with_label(
            Label::new((name, span))
                .with_message(label)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((name, Source::from(text)));

    if rendered.is_err() {
        eprintln!("error: {}", error);
    }

    ExitCode::FAILURE
}
