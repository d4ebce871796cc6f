//! Error types for PDF splitting

use std::path::PathBuf;
use thiserror::Error;

/// Which codec step a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecStage {
    Open,
    Extract,
    Write,
}

impl CodecStage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Extract => "extract",
            Self::Write => "write",
        }
    }
}

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Error: File '{}' not found.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error: File '{}' is not a PDF.", .path.display())]
    NotPdf { path: PathBuf },

    #[error("Error: Pages per chunk must be at least 1 (got {0}).")]
    InvalidChunkSize(usize),

    #[error("Error processing PDF: {message}")]
    Codec { stage: CodecStage, message: String },

    #[error("Error preparing output directory '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SplitError {
    pub(crate) fn codec(stage: CodecStage, err: impl std::fmt::Display) -> Self {
        Self::Codec {
            stage,
            message: err.to_string(),
        }
    }

    /// True for failures detected before the document is touched
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::NotPdf { .. } | Self::InvalidChunkSize(_)
        )
    }
}
