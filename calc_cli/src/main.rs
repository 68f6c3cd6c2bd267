//! # Calcora CLI
//!
//! Command-line front end for the calculator engine.
//!
//! ```bash
//! calc_cli list --category health
//! calc_cli run bmi --input '{"weight": 70, "height": 175}'
//! calc_cli messages ru --dir messages
//! calc_cli search "loan" --locale de
//! calc_cli pdf loan --input '{"principal": 100000, "annual_rate": 12, "term_months": 12}' --output loan.pdf
//! calc_cli docs --output CALCULATORS.md
//! ```
//!
//! Output is pretty JSON. Calculator errors are printed as the same error
//! JSON the web API returns, and the process exits with status 1.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use calc_core::catalog::generate_catalog_markdown;
use calc_core::i18n::{resolve_messages, FsMessageSource};
use calc_core::pdf::{render_calculation_pdf, CalculationReport};
use calc_core::{CalcError, CalculationRequest, CalculatorId, Category, Locale, MessageStore, SearchIndex};

#[derive(Parser)]
#[command(name = "calc_cli")]
#[command(version)]
#[command(about = "Calcora calculators from the command line")]
struct Cli {
    /// Directory with translation dictionaries
    #[arg(long, global = true, default_value = "messages")]
    messages_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List calculators
    List {
        /// Only this category (math, converters, health, finance, datetime, everyday)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Run a calculator on JSON input
    Run {
        /// Calculator slug
        #[arg(value_name = "SLUG")]
        slug: String,

        /// Input JSON
        #[arg(short, long, conflicts_with = "file")]
        input: Option<String>,

        /// File containing input JSON
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the merged translation tree of a locale
    Messages {
        #[arg(value_name = "LOCALE")]
        locale: String,

        /// Dictionary directory (defaults to --messages-dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Search the localised catalogue
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        #[arg(short, long, default_value = "en")]
        locale: String,

        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Run a calculator and write a PDF report
    Pdf {
        #[arg(value_name = "SLUG")]
        slug: String,

        /// Input JSON
        #[arg(short, long)]
        input: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// Write CALCULATORS.md
    Docs {
        #[arg(short, long, default_value = "CALCULATORS.md")]
        output: PathBuf,
    },
}

/// Outcome of a command that did not fail outright.
enum Outcome {
    Json(Value),
    Message(String),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "calc_core=debug,info" } else { "calc_core=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn error_json(err: &CalcError) -> Value {
    let mut body = json!({
        "success": false,
        "error": err.to_string(),
        "code": err.error_code(),
    });
    if let (Some(field), Some(map)) = (err.field(), body.as_object_mut()) {
        map.insert("field".to_string(), Value::String(field.to_string()));
    }
    body
}

fn parse_input(input: Option<&str>, file: Option<&Path>) -> Result<Value> {
    let text = match (input, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => "{}".to_string(),
    };
    serde_json::from_str(&text).context("Input is not valid JSON")
}

fn load_store(dir: &Path) -> MessageStore {
    MessageStore::load(&FsMessageSource::new(dir))
}

fn list(category: Option<&str>) -> std::result::Result<Value, CalcError> {
    let ids = match category {
        Some(slug) => {
            let category = Category::from_slug(slug).ok_or_else(|| {
                let expected: Vec<&str> = Category::ALL.iter().map(|c| c.slug()).collect();
                CalcError::unknown_value("category", slug, &expected)
            })?;
            CalculatorId::in_category(category)
        }
        None => CalculatorId::ALL.to_vec(),
    };

    Ok(Value::Array(
        ids.into_iter()
            .map(|id| {
                let meta = id.metadata();
                json!({
                    "slug": meta.slug,
                    "category": meta.category.slug(),
                    "name": meta.name,
                    "formula": meta.formula_plain,
                })
            })
            .collect(),
    ))
}

fn execute(cli: &Cli) -> Result<std::result::Result<Outcome, CalcError>> {
    let outcome = match &cli.command {
        Commands::List { category } => list(category.as_deref()).map(Outcome::Json),

        Commands::Run { slug, input, file } => {
            let body = parse_input(input.as_deref(), file.as_deref())?;
            calc_core::run_calculator(slug, body).map(Outcome::Json)
        }

        Commands::Messages { locale, dir } => {
            let dir = dir.as_ref().unwrap_or(&cli.messages_dir);
            let source = FsMessageSource::new(dir);
            Ok(Outcome::Json(resolve_messages(&source, locale)))
        }

        Commands::Search { query, locale, limit } => {
            let index = SearchIndex::build(&load_store(&cli.messages_dir));
            let hits = index.search(query, Locale::resolve(locale), *limit);
            Ok(Outcome::Json(serde_json::to_value(hits)?))
        }

        Commands::Pdf { slug, input, output, locale } => {
            let body = parse_input(Some(input), None)?;
            let rendered = CalculationRequest::from_json(slug, body).and_then(|request| {
                let result = request.evaluate()?;
                let store = load_store(&cli.messages_dir);
                let locale = Locale::resolve(locale);
                let title = store
                    .get_str(locale, &format!("calculators.{}.title", request.id().slug()))
                    .unwrap_or(request.id().metadata().name)
                    .to_string();
                let report = CalculationReport::from_evaluation(&request, &result, title)?
                    .with_locale(locale, &store);
                render_calculation_pdf(&report)
            });
            match rendered {
                Ok(bytes) => {
                    fs::write(output, &bytes)
                        .with_context(|| format!("Failed to write {}", output.display()))?;
                    Ok(Outcome::Message(format!(
                        "Wrote {} bytes to {}",
                        bytes.len(),
                        output.display()
                    )))
                }
                Err(e) => Err(e),
            }
        }

        Commands::Docs { output } => {
            let markdown = generate_catalog_markdown();
            fs::write(output, &markdown)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            Ok(Outcome::Message(format!(
                "Wrote {} bytes to {}",
                markdown.len(),
                output.display()
            )))
        }
    };
    Ok(outcome)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli)? {
        Ok(Outcome::Json(value)) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Ok(Outcome::Message(message)) => println!("{}", message),
        Err(e) => {
            eprintln!("{}", serde_json::to_string_pretty(&error_json(&e))?);
            std::process::exit(1);
        }
    }
    Ok(())
}
