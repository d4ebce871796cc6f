//! Chunk Writer
//!
//! Names output parts and serializes them to disk. Each part is written
//! through its own buffered file handle, closed before the next part starts.

use crate::chunking::ChunkSpec;
use crate::error::{CodecStage, SplitError};
use lopdf::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes parts as `{stem} - Part {n}.pdf` into one directory
pub struct ChunkWriter {
    /// Directory parts are written into
    output_dir: PathBuf,
    /// File stem of the source document
    stem: String,
}

impl ChunkWriter {
    pub fn new(output_dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            stem: stem.into(),
        }
    }

    /// Writer for parts of `input`, placed beside it unless `output_dir` is given
    pub fn for_input(input: &Path, output_dir: Option<&Path>) -> Self {
        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(dir, stem)
    }

    /// Target path for a part
    pub fn path_for(&self, chunk: &ChunkSpec) -> PathBuf {
        self.output_dir.join(chunk.file_name(&self.stem))
    }

    /// Serialize `doc` as the file for `chunk`, returning the written path
    pub fn write(&self, doc: &mut Document, chunk: &ChunkSpec) -> Result<PathBuf, SplitError> {
        let path = self.path_for(chunk);

        let file = File::create(&path).map_err(|e| write_error(&path, e))?;
        let mut out = BufWriter::new(file);
        doc.save_to(&mut out).map_err(|e| write_error(&path, e))?;
        out.flush().map_err(|e| write_error(&path, e))?;

        Ok(path)
    }
}

fn write_error(path: &Path, err: impl std::fmt::Display) -> SplitError {
    SplitError::codec(CodecStage::Write, format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{build_test_pdf, page_labels_at};
    use tempfile::tempdir;

    #[test]
    fn test_parts_land_beside_input() {
        let writer = ChunkWriter::for_input(Path::new("/data/reports/Annual Report.pdf"), None);
        let chunk = ChunkSpec { index: 2, start: 10, end: 20 };

        assert_eq!(
            writer.path_for(&chunk),
            PathBuf::from("/data/reports/Annual Report - Part 2.pdf")
        );
    }

    #[test]
    fn test_output_dir_override() {
        let writer = ChunkWriter::for_input(Path::new("/data/book.PDF"), Some(Path::new("/tmp/out")));
        let chunk = ChunkSpec { index: 1, start: 0, end: 3 };
        assert_eq!(writer.path_for(&chunk), PathBuf::from("/tmp/out/book - Part 1.pdf"));
    }

    #[test]
    fn test_bare_file_name_uses_current_dir() {
        let writer = ChunkWriter::for_input(Path::new("book.pdf"), None);
        let chunk = ChunkSpec { index: 1, start: 0, end: 1 };
        assert_eq!(writer.path_for(&chunk), PathBuf::from("book - Part 1.pdf"));
    }

    #[test]
    fn test_write_creates_readable_pdf() {
        let dir = tempdir().unwrap();
        let writer = ChunkWriter::new(dir.path(), "sample");
        let chunk = ChunkSpec { index: 1, start: 0, end: 4 };

        let mut doc = build_test_pdf(4);
        let path = writer.write(&mut doc, &chunk).unwrap();

        assert_eq!(path, dir.path().join("sample - Part 1.pdf"));
        assert_eq!(page_labels_at(&path), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let writer = ChunkWriter::new(dir.path().join("nope"), "sample");
        let chunk = ChunkSpec { index: 1, start: 0, end: 1 };

        let err = writer.write(&mut build_test_pdf(1), &chunk).unwrap_err();
        assert!(matches!(
            err,
            SplitError::Codec {
                stage: CodecStage::Write,
                ..
            }
        ));
    }
}
