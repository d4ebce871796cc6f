//! Chunk planning
//!
//! Partitions a document's pages into contiguous, fixed-size ranges.
//! The last range holds whatever is left over.

pub mod pdf;

pub use pdf::SourcePdf;

use crate::error::SplitError;

/// Default number of pages per output part
pub const DEFAULT_PAGES_PER_CHUNK: usize = 10;

/// A half-open page range `[start, end)` with its 1-based part number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpec {
    /// 1-based part number
    pub index: usize,
    /// First page, 0-based inclusive
    pub start: usize,
    /// Last page, 0-based exclusive
    pub end: usize,
}

impl ChunkSpec {
    /// Number of pages in this chunk
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Human-readable 1-based range, e.g. "11-20"
    pub fn page_range_label(&self) -> String {
        format!("{}-{}", self.start + 1, self.end)
    }

    /// Output file name for this part, e.g. "report - Part 2.pdf"
    pub fn file_name(&self, stem: &str) -> String {
        format!("{} - Part {}.pdf", stem, self.index)
    }
}

/// Number of chunks needed to cover `total_pages`
pub fn chunk_count(total_pages: usize, pages_per_chunk: usize) -> usize {
    if pages_per_chunk == 0 {
        return 0;
    }
    total_pages.div_ceil(pages_per_chunk)
}

/// Compute the chunk ranges for a document of `total_pages` pages.
///
/// Ranges are returned in increasing order and cover every page exactly once.
/// An empty document yields an empty plan.
pub fn plan_chunks(total_pages: usize, pages_per_chunk: usize) -> Result<Vec<ChunkSpec>, SplitError> {
    if pages_per_chunk == 0 {
        return Err(SplitError::InvalidChunkSize(pages_per_chunk));
    }

    let plan = (0..chunk_count(total_pages, pages_per_chunk))
        .map(|i| {
            let start = i * pages_per_chunk;
            ChunkSpec {
                index: i + 1,
                start,
                end: (start + pages_per_chunk).min(total_pages),
            }
        })
        .collect();

    Ok(plan)
}
