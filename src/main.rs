//! cmddoc — look up commands in a pipe-delimited documentation catalog.
//!
//! - `cmddoc --catalog commands.txt find DrawRect`
//! - `cmddoc --root /opt/bmx list --has-description -f json`
//! - `cmddoc --root /opt/bmx rebuild`

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cmddoc::{render, CommandIndex, Config, Filter};

#[derive(Parser)]
#[command(
    name = "cmddoc",
    about = "Query a flat-file command documentation catalog"
)]
struct Cli {
    /// Catalog file to read
    #[arg(short = 'c', long, env = "CMDDOC_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Installation root; the catalog and rebuild tool are located under it
    #[arg(short = 'r', long, env = "CMDDOC_ROOT", global = true)]
    root: Option<PathBuf>,

    /// Log level (RUST_LOG overrides)
    #[arg(long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every command with the given name (case-insensitive)
    Find {
        name: String,

        #[command(flatten)]
        query: QueryArgs,
    },
    /// Show every command in the catalog
    List {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Regenerate the catalog with an external tool
    Rebuild {
        /// Program and arguments to run instead of the tool under --root
        #[arg(last = true)]
        argv: Vec<String>,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// Only commands with a description
    #[arg(long)]
    has_description: bool,

    /// Only commands with at least one parameter
    #[arg(long)]
    has_parameters: bool,

    /// Only commands with a markdown help block
    #[arg(long)]
    has_markdown: bool,

    /// Output format: text (default), markdown, json, snippet
    #[arg(short = 'f', long, default_value = "text")]
    format: String,
}

impl QueryArgs {
    fn filter(&self) -> Filter {
        Filter {
            has_description: self.has_description,
            has_markdown: self.has_markdown,
            has_parameters: self.has_parameters,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn initialize_tracing(level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_directive()));

    // Logs go to stderr; stdout carries lookup results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let config = Config::new(cli.catalog.clone(), cli.root.clone());

    match cli.command {
        Commands::Find { ref name, ref query } => query_mode(&config, Some(name.as_str()), query),
        Commands::List { ref query } => query_mode(&config, None, query),
        Commands::Rebuild { ref argv } => rebuild_mode(&config, argv),
    }
}

/// find/list: load the index, look up, render to stdout.
fn query_mode(config: &Config, name: Option<&str>, query: &QueryArgs) -> Result<()> {
    // Fail on a bad format before touching the catalog
    let renderer = render::create_renderer(&query.format)?;
    let catalog = config.catalog_path()?;

    let mut index = CommandIndex::from_path(&catalog);
    index.ensure_populated(true);

    let matches = index.find(name, &query.filter());
    if let Some(name) = name {
        if matches.is_empty() {
            anyhow::bail!("no command named {}", name);
        }
    }

    print!("{}", renderer.render(&matches)?);
    Ok(())
}

/// rebuild: run the regeneration tool, then reload to report the new size.
fn rebuild_mode(config: &Config, argv: &[String]) -> Result<()> {
    let rebuild = config.rebuild_command(argv)?;
    let catalog = config.catalog_path().ok();

    let mut index = match catalog {
        Some(ref path) => CommandIndex::from_path(path),
        None => {
            cmddoc::rebuild::regenerate(&rebuild).context("catalog rebuild failed")?;
            return Ok(());
        }
    };

    index.rebuild(&rebuild).context("catalog rebuild failed")?;
    if index.ensure_populated(true) {
        eprintln!("indexed {} commands", index.len());
    }
    Ok(())
}
