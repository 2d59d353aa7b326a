//! Shared types passed between pipeline stages.
//!
//! Descriptors are built once from the configured document list and are never
//! mutated. Everything derived from them (navigation targets, composed pages)
//! is computed into new values.

/// Static metadata for one source document and its position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDescriptor {
    /// Zero-based position in the configured list. Determines navigation and
    /// index order.
    pub id: usize,
    pub title: String,
    pub description: String,
    /// Decorative emoji shown next to the title.
    pub marker: String,
    /// Source filename, relative to the source directory.
    pub source: String,
    /// Output filename, relative to the output directory.
    pub output: String,
}

/// Previous/next targets for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Output filename of the preceding document, or the landing page for the
    /// first document.
    pub previous: String,
    /// Output filename of the following document; `None` for the last one.
    pub next: Option<String>,
}

impl Navigation {
    /// Compute navigation for the descriptor at `position` in `documents`.
    ///
    /// `documents` must be ordered by id.
    pub fn for_position(documents: &[DocumentDescriptor], position: usize, index: &str) -> Self {
        let previous = position
            .checked_sub(1)
            .and_then(|p| documents.get(p))
            .map(|d| d.output.clone())
            .unwrap_or_else(|| index.to_string());
        let next = documents.get(position + 1).map(|d| d.output.clone());
        Self { previous, next }
    }

    /// Whether the previous control points back at the landing page.
    pub fn previous_is_index(&self, index: &str) -> bool {
        self.previous == index
    }
}

/// Converted and link-rewritten body of one document.
#[derive(Debug, Clone)]
pub struct ConvertedDocument<'a> {
    pub descriptor: &'a DocumentDescriptor,
    /// HTML fragment, not a full page. Document links already rewritten.
    pub fragment: String,
    /// Output filenames the document links to, in document order.
    pub links: Vec<String>,
}

/// A fully composed document page, ready to be written.
#[derive(Debug, Clone)]
pub struct RenderedPage<'a> {
    pub descriptor: &'a DocumentDescriptor,
    pub navigation: Navigation,
    pub html: String,
}

/// One card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub id: usize,
    pub title: String,
    pub output: String,
}

/// The composed landing page.
#[derive(Debug, Clone)]
pub struct IndexPage {
    /// Entries in display order.
    pub entries: Vec<IndexEntry>,
    pub html: String,
}
