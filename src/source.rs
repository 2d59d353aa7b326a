//! Markdown source providers.
//!
//! The pipeline only ever asks for a source by filename. [`DirSource`] reads
//! from a directory on disk; [`MemorySource`] serves fixed contents and backs
//! most tests.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("source not found: {filename}")]
    NotFound { filename: String },
    #[error("reading {filename}: {source}")]
    Io {
        filename: String,
        #[source]
        source: io::Error,
    },
}

/// Supplies raw markdown bytes for a named document.
pub trait SourceProvider {
    /// Fetch the raw contents of `filename`.
    fn fetch(&self, filename: &str) -> Result<Vec<u8>, SourceError>;

    /// Filenames with the given extension that this provider could serve.
    ///
    /// Used by `check` to find sources no document references. Providers that
    /// cannot enumerate return an empty list.
    fn list(&self, _extension: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Reads sources from a directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceProvider for DirSource {
    fn fetch(&self, filename: &str) -> Result<Vec<u8>, SourceError> {
        let path = self.root.join(filename);
        fs::read(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound {
                filename: filename.to_string(),
            },
            _ => SourceError::Io {
                filename: filename.to_string(),
                source,
            },
        })
    }

    fn list(&self, extension: &str) -> Vec<String> {
        let mut names: Vec<String> = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == extension))
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Serves sources from memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a source, builder style.
    pub fn with(mut self, filename: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(filename, contents);
        self
    }

    pub fn insert(&mut self, filename: &str, contents: impl Into<Vec<u8>>) {
        self.files.insert(filename.to_string(), contents.into());
    }
}

impl SourceProvider for MemorySource {
    fn fetch(&self, filename: &str) -> Result<Vec<u8>, SourceError> {
        self.files
            .get(filename)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                filename: filename.to_string(),
            })
    }

    fn list(&self, extension: &str) -> Vec<String> {
        let suffix = format!(".{extension}");
        self.files
            .keys()
            .filter(|name| name.ends_with(&suffix))
            .cloned()
            .collect()
    }
}
