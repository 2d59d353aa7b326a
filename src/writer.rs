//! Persisting generated files.
//!
//! The output layout is flat: every page, the landing page and the
//! stylesheet are siblings in one directory. Existing files are overwritten;
//! nothing else in the directory is touched.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("writing {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// A file to be written, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub filename: String,
    pub contents: String,
}

impl OutputFile {
    pub fn new(filename: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}

/// Writes output files into one directory.
#[derive(Debug, Clone)]
pub struct SiteWriter {
    output_dir: PathBuf,
}

impl SiteWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Create the output directory and any missing parents.
    pub fn prepare(&self) -> Result<(), WriteError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| WriteError {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Write one file verbatim.
    pub fn write(&self, file: &OutputFile) -> Result<PathBuf, WriteError> {
        let path = self.output_dir.join(&file.filename);
        fs::write(&path, &file.contents).map_err(|source| WriteError {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Prepare the directory, then write `files` in order. Stops at the first
    /// failure; files already written stay on disk.
    pub fn write_all(&self, files: &[OutputFile]) -> Result<Vec<PathBuf>, WriteError> {
        self.prepare()?;
        files.iter().map(|file| self.write(file)).collect()
    }
}
