//! Progress Tracker for splitting
//!
//! Prints status lines to stdout and drives a progress bar while parts are written.

use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::IsTerminal;
use std::path::Path;

use crate::chunking::ChunkSpec;

/// Tracks and displays progress during a split
pub struct ProgressTracker {
    /// Number of parts planned
    total_chunks: usize,
    /// Number of parts written so far
    written_chunks: usize,
    /// Progress bar (hidden when quiet or not attached to a terminal)
    bar: ProgressBar,
    /// Whether to show output (false for tests/quiet mode)
    show_output: bool,
    /// Whether to print the "Next steps" hint after a successful split
    show_next_steps: bool,
}

impl ProgressTracker {
    /// Create a tracker that prints to stdout
    pub fn new(show_next_steps: bool) -> Self {
        Self {
            total_chunks: 0,
            written_chunks: 0,
            bar: ProgressBar::hidden(),
            show_output: true,
            show_next_steps,
        }
    }

    /// Create a quiet progress tracker (no output)
    pub fn quiet() -> Self {
        Self {
            total_chunks: 0,
            written_chunks: 0,
            bar: ProgressBar::hidden(),
            show_output: false,
            show_next_steps: false,
        }
    }

    /// Announce the document and the plan; starts the bar
    pub fn start(&mut self, file_name: &str, total_pages: usize, pages_per_chunk: usize, total_chunks: usize) {
        self.total_chunks = total_chunks;
        self.written_chunks = 0;

        if !self.show_output {
            return;
        }

        println!("Processing '{}' with {} pages...", file_name, total_pages);
        println!("Splitting into chunks of {} pages each...", pages_per_chunk);

        if std::io::stdout().is_terminal() && total_chunks > 1 {
            self.bar = chunk_bar(total_chunks);
        }
    }

    /// Record a written part
    pub fn chunk_written(&mut self, chunk: &ChunkSpec, path: &Path) {
        self.written_chunks += 1;

        if !self.show_output {
            return;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let line = format!(
            "✅ Created: {} (pages {})",
            name.green(),
            chunk.page_range_label()
        );

        // println through the bar keeps it from tearing; a hidden bar drops the line
        if self.bar.is_hidden() {
            println!("{}", line);
        } else {
            self.bar.println(line);
            self.bar.inc(1);
        }
    }

    /// Show a planned part without writing it
    pub fn chunk_planned(&self, chunk: &ChunkSpec, path: &Path) {
        if self.show_output {
            println!(
                "  {} {} (pages {})",
                "would create".dimmed(),
                path.display(),
                chunk.page_range_label()
            );
        }
    }

    /// Display final completion message
    pub fn complete(&self, file_name: &str) {
        self.bar.finish_and_clear();

        if !self.show_output {
            return;
        }

        println!(
            "\n🎉 {} '{}' into {} parts!",
            "Successfully split".green().bold(),
            file_name,
            self.written_chunks
        );

        if self.show_next_steps {
            println!("\nNext steps:");
            println!("1. Upload each part separately to your chatbot");
            println!("2. The parts will be processed individually");
            println!("3. Delete the original large PDF if desired");
        }
    }

    /// Display the summary of a dry run
    pub fn complete_dry_run(&self, file_name: &str) {
        if self.show_output {
            println!(
                "\n{} '{}' would be split into {} parts (nothing written).",
                "Dry run:".yellow().bold(),
                file_name,
                self.total_chunks
            );
        }
    }

    /// Report a failure; stops the bar first
    pub fn fail(&self, message: &str) {
        self.bar.abandon();
        if self.show_output {
            println!("{}", message.red());
        }
    }
}

/// Progress bar over parts, drawn on stdout alongside the status lines
fn chunk_bar(total_chunks: usize) -> ProgressBar {
    let bar = ProgressBar::with_draw_target(Some(total_chunks as u64), ProgressDrawTarget::stdout());
    if let Ok(style) = ProgressStyle::with_template("  [{bar:30.green}] {pos}/{len} parts") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}
