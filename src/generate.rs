//! Site generation pipeline.
//!
//! A run moves through three stages, strictly in order:
//!
//! ```text
//! 1. Collecting   fetch + convert + rewrite links for every document
//! 2. Composing    wrap each document in a page, build the landing page
//! 3. Writing      pages, landing page, stylesheet → output directory
//! ```
//!
//! A failure stops the run in the stage it happens in. Every source is read
//! and converted before anything is written, so a missing or unconvertible
//! source leaves the output directory as it was. A write failure leaves the
//! files written before it in place.
//!
//! ## Output Structure
//!
//! ```text
//! website/
//! ├── index.html
//! ├── style.css
//! ├── 00-introduction-setup.html
//! ├── 01-compile-go-unchanged.html
//! └── ...
//! ```
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time; color custom properties
//! from the config are prepended to it.

use crate::compose::{self, Layout};
use crate::config::{self, SiteConfig};
use crate::convert::{ConvertError, MarkdownConverter};
use crate::links::LinkRewriter;
use crate::source::{SourceError, SourceProvider};
use crate::types::{ConvertedDocument, DocumentDescriptor, IndexPage, RenderedPage};
use crate::writer::{OutputFile, SiteWriter, WriteError};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Pipeline stage a run is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Collecting,
    Composing,
    Writing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Collecting => "collecting",
            Stage::Composing => "composing",
            Stage::Writing => "writing",
        })
    }
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("collecting: {0}")]
    Source(#[from] SourceError),
    #[error("collecting: converting {filename}: {source}")]
    Conversion {
        filename: String,
        #[source]
        source: ConvertError,
    },
    /// The message already starts with "writing".
    #[error("{0}")]
    Write(#[from] WriteError),
}

impl GenerateError {
    /// The stage the run failed in.
    pub fn stage(&self) -> Stage {
        match self {
            GenerateError::Source(_) | GenerateError::Conversion { .. } => Stage::Collecting,
            GenerateError::Write(_) => Stage::Writing,
        }
    }
}

/// Output of the collecting stage.
#[derive(Debug)]
pub struct Collected<'a> {
    pub converted: Vec<ConvertedDocument<'a>>,
    /// Converted landing page intro, when one is configured.
    pub intro: Option<String>,
    /// Output filenames the intro links to.
    pub intro_links: Vec<String>,
}

/// Output of the composing stage.
#[derive(Debug)]
pub struct Composed<'a> {
    pub pages: Vec<RenderedPage<'a>>,
    pub index: IndexPage,
    pub stylesheet: String,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// `(document, output filename)` in id order.
    pub pages: Vec<(DocumentDescriptor, String)>,
    pub index: String,
    pub stylesheet: String,
}

impl GenerateReport {
    /// Every filename the run wrote, pages first.
    pub fn filenames(&self) -> Vec<&str> {
        self.pages
            .iter()
            .map(|(_, output)| output.as_str())
            .chain([self.index.as_str(), self.stylesheet.as_str()])
            .collect()
    }
}

/// Fetch, convert and link-rewrite one markdown source.
fn convert_source(
    filename: &str,
    source: &dyn SourceProvider,
    converter: &dyn MarkdownConverter,
    rewriter: &LinkRewriter,
) -> Result<(String, Vec<String>), GenerateError> {
    let raw = source.fetch(filename)?;
    let html = converter
        .convert(&raw)
        .map_err(|source| GenerateError::Conversion {
            filename: filename.to_string(),
            source,
        })?;
    let links = rewriter.rewritten_targets(&html);
    Ok((rewriter.rewrite(&html), links))
}

/// Stage 1: fetch, convert and rewrite every document, then the intro.
///
/// Stops at the first document that fails.
pub fn collect<'a>(
    config: &SiteConfig,
    documents: &'a [DocumentDescriptor],
    source: &dyn SourceProvider,
    converter: &dyn MarkdownConverter,
) -> Result<Collected<'a>, GenerateError> {
    let rewriter = LinkRewriter::for_site(config);
    let mut converted = Vec::with_capacity(documents.len());
    for descriptor in documents {
        let (fragment, links) = convert_source(&descriptor.source, source, converter, &rewriter)?;
        tracing::debug!(
            "Converted {} ({} bytes, {} document links)",
            descriptor.source,
            fragment.len(),
            links.len()
        );
        converted.push(ConvertedDocument {
            descriptor,
            fragment,
            links,
        });
    }

    let (intro, intro_links) = match &config.site.intro {
        Some(filename) => {
            let (fragment, links) = convert_source(filename, source, converter, &rewriter)?;
            tracing::debug!("Converted intro {}", filename);
            (Some(fragment), links)
        }
        None => (None, Vec::new()),
    };

    Ok(Collected {
        converted,
        intro,
        intro_links,
    })
}

/// The stylesheet: config colors followed by the embedded base styles.
pub fn stylesheet(config: &SiteConfig) -> String {
    format!("{}\n\n{}", config::generate_color_css(&config.colors), CSS_STATIC)
}

/// Stage 2: compose every page and the landing page. Pure.
pub fn compose<'a>(
    config: &SiteConfig,
    documents: &'a [DocumentDescriptor],
    collected: &Collected<'a>,
) -> Composed<'a> {
    let layout = Layout::new(config);
    let pages = collected
        .converted
        .iter()
        .enumerate()
        .map(|(position, converted)| compose::compose_page(&layout, documents, position, converted))
        .collect();
    let index = compose::compose_index(&layout, documents, collected.intro.as_deref());
    Composed {
        pages,
        index,
        stylesheet: stylesheet(config),
    }
}

/// Stage 3: write pages, then the landing page, then the stylesheet.
pub fn write(
    config: &SiteConfig,
    writer: &SiteWriter,
    composed: &Composed<'_>,
) -> Result<Vec<PathBuf>, GenerateError> {
    let mut files: Vec<OutputFile> = composed
        .pages
        .iter()
        .map(|page| OutputFile::new(page.descriptor.output.clone(), page.html.clone()))
        .collect();
    files.push(OutputFile::new(
        config.output.index.clone(),
        composed.index.html.clone(),
    ));
    files.push(OutputFile::new(
        config.output.stylesheet.clone(),
        composed.stylesheet.clone(),
    ));
    Ok(writer.write_all(&files)?)
}

/// Run the whole pipeline into `output_dir`.
pub fn generate(
    config: &SiteConfig,
    source: &dyn SourceProvider,
    converter: &dyn MarkdownConverter,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let documents = config.descriptors();

    tracing::info!("{}: {} documents", Stage::Collecting, documents.len());
    let collected = collect(config, &documents, source, converter)?;

    tracing::info!("{}: {} pages and {}", Stage::Composing, collected.converted.len(), config.output.index);
    let composed = compose(config, &documents, &collected);

    tracing::info!("{}: {}", Stage::Writing, output_dir.display());
    let writer = SiteWriter::new(output_dir);
    let written = write(config, &writer, &composed)?;
    tracing::debug!("Wrote {} files", written.len());

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        pages: composed
            .pages
            .iter()
            .map(|page| (page.descriptor.clone(), page.descriptor.output.clone()))
            .collect(),
        index: config.output.index.clone(),
        stylesheet: config.output.stylesheet.clone(),
    })
}

// ============================================================================
// Tests
// ============================================================================
