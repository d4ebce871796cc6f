//! pdfsplit: split large PDFs into fixed-size page-range parts
//!
//! Parts are written as `{stem} - Part {n}.pdf`, by default beside the input.

pub mod chunking;
pub mod config;
pub mod error;
pub mod pipeline;

#[cfg(test)]
mod testing;

pub use chunking::{chunk_count, plan_chunks, ChunkSpec, SourcePdf, DEFAULT_PAGES_PER_CHUNK};
pub use config::Config;
pub use error::{CodecStage, SplitError};
pub use pipeline::{
    split_pdf, ChunkWriter, ProgressTracker, SplitOptions, SplitReport, Splitter, WrittenChunk,
};
