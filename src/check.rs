//! Consistency checks over a workshop without writing anything.
//!
//! `check` runs the collecting stage, so a missing or unconvertible source
//! fails exactly like `build` would. On top of that it reports problems that
//! do not stop generation but usually mean the document list and the source
//! directory have drifted apart:
//!
//! - a rewritten link that points at a page this run would not produce
//! - a markdown file in the source directory that no document references
//! - a `NN-` filename number that differs from the document's position

use crate::config::SiteConfig;
use crate::convert::MarkdownConverter;
use crate::generate::{self, GenerateError};
use crate::naming;
use crate::source::SourceProvider;
use std::collections::BTreeSet;
use std::fmt;

/// A problem that does not prevent generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckWarning {
    /// `document` links to `target`, which no document produces.
    DanglingLink { document: String, target: String },
    /// A source file no document or intro references.
    UnlistedSource { filename: String },
    /// The filename number disagrees with the list position.
    NumberMismatch {
        source: String,
        id: usize,
        number: u32,
    },
}

impl fmt::Display for CheckWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckWarning::DanglingLink { document, target } => {
                write!(f, "{document}: link to {target} has no matching page")
            }
            CheckWarning::UnlistedSource { filename } => {
                write!(f, "{filename}: not listed in documents")
            }
            CheckWarning::NumberMismatch { source, id, number } => {
                write!(f, "{source}: numbered {number} but listed at position {id}")
            }
        }
    }
}

/// Result of a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// `(source, output)` for every configured document, in id order.
    pub documents: Vec<(String, String)>,
    pub warnings: Vec<CheckWarning>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Collect every document and report warnings. Writes nothing.
pub fn check(
    config: &SiteConfig,
    source: &dyn SourceProvider,
    converter: &dyn MarkdownConverter,
) -> Result<CheckReport, GenerateError> {
    let documents = config.descriptors();
    let collected = generate::collect(config, &documents, source, converter)?;

    let produced: BTreeSet<&str> = documents
        .iter()
        .map(|d| d.output.as_str())
        .chain([config.output.index.as_str(), config.output.stylesheet.as_str()])
        .collect();

    let mut warnings = Vec::new();

    let linked = collected
        .converted
        .iter()
        .map(|c| (c.descriptor.source.as_str(), &c.links))
        .chain(config.site.intro.as_deref().map(|intro| (intro, &collected.intro_links)));
    for (document, links) in linked {
        for target in links {
            if !produced.contains(target.as_str()) {
                warnings.push(CheckWarning::DanglingLink {
                    document: document.to_string(),
                    target: target.clone(),
                });
            }
        }
    }

    let referenced: BTreeSet<&str> = documents
        .iter()
        .map(|d| d.source.as_str())
        .chain(config.site.intro.as_deref())
        .collect();
    for filename in source.list(&config.output.source_extension) {
        if !referenced.contains(filename.as_str()) {
            warnings.push(CheckWarning::UnlistedSource { filename });
        }
    }

    for doc in &documents {
        let stem = naming::strip_extension(&doc.source, &config.output.source_extension)
            .unwrap_or(&doc.source);
        if let Some(number) = naming::parse_document_name(stem).number
            && number as usize != doc.id
        {
            warnings.push(CheckWarning::NumberMismatch {
                source: doc.source.clone(),
                id: doc.id,
                number,
            });
        }
    }

    tracing::debug!(
        "Checked {} documents, {} warnings",
        documents.len(),
        warnings.len()
    );

    Ok(CheckReport {
        documents: documents.into_iter().map(|d| (d.source, d.output)).collect(),
        warnings,
    })
}
