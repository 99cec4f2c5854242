//! book-paginator - Page and sheet numbering for scanned image sequences
//!
//! CLI entry point

use anyhow::{Context, Result};
use book_paginator::{
    exit_codes, generate_labels, Cli, Commands, Config, LabelsArgs, PaginationError,
    PaginatorMode, PaginatorType,
};
use clap::Parser;
use tracing::{info, warn, Level};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Labels(args) => run_labels(args),
        Commands::Initializer(args) => run_initializer(args),
        Commands::Modes => run_modes(),
    };

    std::process::exit(match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if e.downcast_ref::<PaginationError>().is_some() {
                exit_codes::INVALID_INITIALIZER
            } else {
                exit_codes::GENERAL_ERROR
            }
        }
    });
}

/// Log to stderr so labels on stdout stay clean
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

// ============ Labels Command ============

fn run_labels(args: &LabelsArgs) -> Result<()> {
    let (initializer, count) = resolve(args)?;
    let labels = generate_labels(&initializer, count)
        .with_context(|| format!("cannot paginate with initializer \"{}\"", initializer))?;
    info!(count = labels.len(), "Labels generated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&labels)?);
    } else {
        for label in &labels {
            println!("{}", label);
        }
    }
    Ok(())
}

// ============ Initializer Command ============

fn run_initializer(args: &LabelsArgs) -> Result<()> {
    let (initializer, _) = resolve(args)?;
    println!("{}", initializer);
    Ok(())
}

// ============ Modes Command ============

fn run_modes() -> Result<()> {
    println!("Types:");
    for kind in PaginatorType::ALL {
        println!("  {:>2}  {}", kind.code(), kind);
    }
    println!();
    println!("Modes:");
    for mode in PaginatorMode::ALL {
        println!("  {:>2}  {}", mode.code(), mode);
    }
    Ok(())
}

// ============ Helper Functions ============

/// Work out the initializer and label count from config and arguments
fn resolve(args: &LabelsArgs) -> Result<(String, usize)> {
    let file_config = match &args.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            warn!("Failed to load config file: {}", e);
            Config::default()
        }),
    };
    let settings = file_config.merge_with_cli(&args.overrides());

    let initializer = match (&args.initializer, &args.value) {
        (Some(raw), _) => raw.clone(),
        (None, Some(value)) => settings
            .request(value.as_str())
            .initializer()
            .with_context(|| format!("cannot build {} initializer from \"{}\"", settings.kind, value))?,
        (None, None) => anyhow::bail!("either a seed value or --initializer is required"),
    };
    Ok((initializer, settings.count))
}
