//! Split pipeline
//!
//! Validates the input, loads it once, then builds and writes each part in
//! order. A failure stops the run; parts already written stay on disk.

pub mod progress;
pub mod writer;

pub use progress::ProgressTracker;
pub use writer::ChunkWriter;

use crate::chunking::{plan_chunks, ChunkSpec, SourcePdf, DEFAULT_PAGES_PER_CHUNK};
use crate::error::SplitError;
use std::path::{Path, PathBuf};

/// Options for a split run
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Pages per output part
    pub pages_per_chunk: usize,
    /// Where parts go; `None` means beside the input
    pub output_dir: Option<PathBuf>,
    /// Plan and report only, write nothing
    pub dry_run: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            pages_per_chunk: DEFAULT_PAGES_PER_CHUNK,
            output_dir: None,
            dry_run: false,
        }
    }
}

impl SplitOptions {
    pub fn with_pages_per_chunk(pages_per_chunk: usize) -> Self {
        Self {
            pages_per_chunk,
            ..Self::default()
        }
    }
}

/// One part produced by a split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenChunk {
    pub spec: ChunkSpec,
    pub path: PathBuf,
}

/// Outcome of a successful split
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Input document
    pub source: PathBuf,
    /// Page count of the input
    pub total_pages: usize,
    /// Parts in order; planned-only paths on a dry run
    pub chunks: Vec<WrittenChunk>,
    pub dry_run: bool,
}

impl SplitReport {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// Splits one PDF into fixed-size parts
pub struct Splitter {
    options: SplitOptions,
}

impl Splitter {
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    /// Check the input before touching the codec: existence, extension, chunk size
    pub fn validate(&self, input: &Path) -> Result<(), SplitError> {
        if !input.exists() {
            return Err(SplitError::NotFound {
                path: input.to_path_buf(),
            });
        }

        let is_pdf = input
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            return Err(SplitError::NotPdf {
                path: input.to_path_buf(),
            });
        }

        if self.options.pages_per_chunk == 0 {
            return Err(SplitError::InvalidChunkSize(self.options.pages_per_chunk));
        }

        Ok(())
    }

    /// Split `input`, reporting through `progress`
    pub fn split_with_progress(
        &self,
        input: &Path,
        progress: &mut ProgressTracker,
    ) -> Result<SplitReport, SplitError> {
        self.validate(input)?;

        let source = SourcePdf::open(input)?;
        let total_pages = source.page_count();
        let plan = plan_chunks(total_pages, self.options.pages_per_chunk)?;

        let file_name = display_name(input);
        let writer = ChunkWriter::for_input(input, self.options.output_dir.as_deref());

        progress.start(&file_name, total_pages, self.options.pages_per_chunk, plan.len());

        let mut chunks = Vec::with_capacity(plan.len());

        if self.options.dry_run {
            for spec in plan {
                let path = writer.path_for(&spec);
                progress.chunk_planned(&spec, &path);
                chunks.push(WrittenChunk { spec, path });
            }
            progress.complete_dry_run(&file_name);
        } else {
            if let Some(dir) = &self.options.output_dir {
                std::fs::create_dir_all(dir).map_err(|source| SplitError::Io {
                    path: dir.clone(),
                    source,
                })?;
            }

            for spec in plan {
                let mut doc = source.extract(&spec)?;
                let path = writer.write(&mut doc, &spec)?;
                progress.chunk_written(&spec, &path);
                chunks.push(WrittenChunk { spec, path });
            }
            progress.complete(&file_name);
        }

        Ok(SplitReport {
            source: input.to_path_buf(),
            total_pages,
            chunks,
            dry_run: self.options.dry_run,
        })
    }

    /// Split `input` without printing anything
    pub fn split(&self, input: &Path) -> Result<SplitReport, SplitError> {
        self.split_with_progress(input, &mut ProgressTracker::quiet())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Split `input` into parts of `pages_per_chunk` pages beside it.
///
/// Prints status to stdout and returns false on any failure; never panics
/// on a bad or unreadable document.
pub fn split_pdf(input: impl AsRef<Path>, pages_per_chunk: usize) -> bool {
    let splitter = Splitter::new(SplitOptions::with_pages_per_chunk(pages_per_chunk));
    let mut progress = ProgressTracker::new(true);

    match splitter.split_with_progress(input.as_ref(), &mut progress) {
        Ok(_) => true,
        Err(e) => {
            progress.fail(&e.to_string());
            false
        }
    }
}
