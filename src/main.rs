//! pdfsplit CLI
//!
//! Usage:
//!   pdfsplit <INPUT_PDF> [--pages-per-chunk N] [--output-dir DIR] [--dry-run] [--quiet]

use anyhow::Result;
use clap::Parser;
use colored::*;
use pdfsplit::{Config, ProgressTracker, SplitOptions, Splitter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pdfsplit")]
#[command(about = "Split large PDFs into smaller chunks for easier processing")]
#[command(version)]
struct Cli {
    /// Path to the PDF file to split
    input_pdf: PathBuf,

    /// Number of pages per chunk (default: 10, or the saved default)
    #[arg(short, long)]
    pages_per_chunk: Option<usize>,

    /// Directory to write the parts into (default: beside the input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Show the planned parts without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Remember --pages-per-chunk as the default for future runs
    #[arg(long, requires = "pages_per_chunk")]
    set_default: bool,

    /// Suppress status output
    #[arg(short, long)]
    quiet: bool,
}

fn load_config(quiet: bool) -> Config {
    match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            if !quiet {
                println!("{} {:#} (using defaults)", "Warning:".yellow(), e);
            }
            Config::default()
        }
    }
}

fn save_default(config: &Config, pages_per_chunk: usize) -> Result<()> {
    let updated = Config {
        pages_per_chunk,
        ..config.clone()
    };
    updated.save()
}

/// Line to print after `--set-default`; nothing when quiet
fn save_default_message(saved: &Result<()>, pages_per_chunk: usize, quiet: bool) -> Option<String> {
    if quiet {
        return None;
    }
    Some(match saved {
        Ok(()) => format!("Saved {} pages per chunk as the default.", pages_per_chunk),
        Err(e) => format!("{} failed to save default: {:#}", "Warning:".yellow(), e),
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = load_config(cli.quiet);
    let pages_per_chunk = config.resolve_pages_per_chunk(cli.pages_per_chunk);

    let splitter = Splitter::new(SplitOptions {
        pages_per_chunk,
        output_dir: cli.output_dir,
        dry_run: cli.dry_run,
    });
    let mut progress = if cli.quiet {
        ProgressTracker::quiet()
    } else {
        ProgressTracker::new(config.show_next_steps)
    };

    if let Err(e) = splitter.split_with_progress(&cli.input_pdf, &mut progress) {
        progress.fail(&e.to_string());
        return ExitCode::FAILURE;
    }

    if cli.set_default {
        let saved = save_default(&config, pages_per_chunk);
        if let Some(message) = save_default_message(&saved, pages_per_chunk, cli.quiet) {
            println!("{}", message);
        }
    }

    ExitCode::SUCCESS
}
