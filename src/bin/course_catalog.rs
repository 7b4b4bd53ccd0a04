//! Load the course catalog and walk through the standard report.
//!
//! Usage:
//!   course-catalog
//!   course-catalog --input data/courses.txt --remove "cms:intermediate"
//!   course-catalog --skip-invalid --format json
//!
//! Prints the catalog, the oldest course, removes the requested
//! `(category, level)` pairs and prints the catalog again.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use course_catalog::{Level, Loader, ParsePolicy, parse_removal, report, resolve_input_path};
use std::env;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_REMOVALS: [&str; 2] = ["bases de datos:advanced", "cms:intermediate"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "course-catalog")]
#[command(about = "Report on a catalog of online courses grouped by category")]
struct Cli {
    /// Course file; falls back to COURSE_CATALOG_INPUT, then data/courses.txt.
    #[arg(long)]
    input: Option<PathBuf>,
    /// CATEGORY:LEVEL pair to remove; repeat for several. Defaults to the demo pairs.
    #[arg(long = "remove", value_name = "CATEGORY:LEVEL")]
    removals: Vec<String>,
    /// Log and skip malformed records instead of aborting the load.
    #[arg(long)]
    skip_invalid: bool,
    /// Format of the final report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let removals = removal_requests(&cli.removals)?;

    let cwd = env::current_dir().context("reading current directory")?;
    let input = resolve_input_path(cli.input, &cwd)?;
    let policy = if cli.skip_invalid {
        ParsePolicy::Skip
    } else {
        ParsePolicy::Abort
    };
    let mut catalog = Loader::new(policy)
        .load_path(&input)
        .with_context(|| format!("loading courses from {}", input.display()))?;
    if catalog.is_empty() {
        warn!(path = %input.display(), "no courses loaded");
    }

    println!("{catalog}");
    println!("Oldest course: {}\n", catalog.oldest());

    println!("------------------");
    for (category, level) in &removals {
        println!(
            "Removing courses of {} with level {level}",
            category.to_uppercase()
        );
        let removed = catalog
            .remove_by_level(category, *level)
            .with_context(|| format!("removing {level} courses"))?;
        println!("Removed = {}\n", report::format_removed(&removed));
    }
    println!("------------------\n");

    match cli.format {
        OutputFormat::Text => {
            println!("After removal ....");
            println!("{catalog}");
        }
        OutputFormat::Json => {
            println!("{}", report::to_json(&catalog).context("serializing catalog")?);
        }
    }
    Ok(())
}

fn removal_requests(raw: &[String]) -> Result<Vec<(String, Level)>> {
    if raw.is_empty() {
        return DEFAULT_REMOVALS.iter().map(|pair| parse_removal(pair)).collect();
    }
    raw.iter()
        .map(|pair| parse_removal(pair).with_context(|| format!("invalid --remove {pair}")))
        .collect()
}
