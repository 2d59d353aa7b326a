//! Shared test utilities for the workshop-site test suite.
//!
//! Provides a synthetic document list (`NN-doc.md`, titled `Doc N`), a config
//! built around it, matching in-memory sources, and an on-disk fixture
//! workshop.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = test_config(3);
//! let source = memory_sources(3);
//! let report = generate(&config, &source, &PulldownConverter::new(), tmp.path()).unwrap();
//! assert_eq!(report.pages.len(), 3);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::{DocumentConfig, SiteConfig, SiteSettings};
use crate::source::MemorySource;
use crate::types::DocumentDescriptor;

// =========================================================================
// Synthetic documents
// =========================================================================

fn source_name(n: usize) -> String {
    format!("{n:02}-doc.md")
}

/// `n` document configs: `00-doc.md` … titled `Doc 0` ….
pub fn document_configs(n: usize) -> Vec<DocumentConfig> {
    (0..n)
        .map(|i| DocumentConfig {
            source: source_name(i),
            title: format!("Doc {i}"),
            marker: "*".to_string(),
            description: format!("About doc {i}"),
        })
        .collect()
}

/// A config with `n` synthetic documents and default output settings.
pub fn test_config(n: usize) -> SiteConfig {
    SiteConfig {
        site: SiteSettings {
            title: "A Test Workshop".to_string(),
            short_title: "Test Workshop".to_string(),
            footer: "Test Workshop".to_string(),
            ..SiteSettings::default()
        },
        documents: document_configs(n),
        ..SiteConfig::default()
    }
}

/// Descriptors for [`test_config`]`(n)`.
pub fn descriptors(n: usize) -> Vec<DocumentDescriptor> {
    test_config(n).descriptors()
}

/// Sources for every document of [`test_config`]`(n)`. Each document has a
/// heading and links to the next one.
pub fn memory_sources(n: usize) -> MemorySource {
    (0..n).fold(MemorySource::new(), |source, i| {
        let body = if i + 1 < n {
            format!("# Doc {i}\n\nContinue with [the next one]({}).\n", source_name(i + 1))
        } else {
            format!("# Doc {i}\n\nBack to the [overview](../README.md).\n")
        };
        source.with(&source_name(i), body)
    })
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/workshop/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/workshop");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceProvider;

    #[test]
    fn memory_sources_match_config() {
        let config = test_config(2);
        let source = memory_sources(2);
        for doc in config.descriptors() {
            assert!(source.fetch(&doc.source).is_ok());
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn fixtures_contain_config_and_sources() {
        let tmp = setup_fixtures();
        assert!(tmp.path().join("site.toml").is_file());
        assert!(tmp.path().join("00-getting-started.md").is_file());
    }
}
