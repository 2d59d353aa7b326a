//! Filename conventions for workshop documents.
//!
//! Documents are named `NN-slug.md`: a two-digit sequence number, a dash, and
//! a slug. The sequence number is informational only. Ordering comes from the
//! configured document list, but `check` warns when the two disagree.
//!
//! Output filenames are the source filename with its extension swapped:
//! - `03-parser-multiple-go.md` → `03-parser-multiple-go.html`
//! - `notes.md` → `notes.html`
//! - `LICENSE` → `LICENSE.html` (no source extension, output extension appended)

/// Result of parsing a document stem like `03-parser-multiple-go`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present (e.g., `3` from `03-parser-multiple-go`)
    pub number: Option<u32>,
    /// Slug after `NN-`. For unnumbered names this is the full input.
    pub slug: String,
}

/// Parse a document stem following the `NN-slug` convention.
///
/// - `"03-parser-multiple-go"` → number=Some(3), slug="parser-multiple-go"
/// - `"10"` → number=Some(10), slug=""
/// - `"notes"` → number=None, slug="notes"
/// - `"wip-drafts"` → number=None, slug="wip-drafts"
pub fn parse_document_name(stem: &str) -> ParsedName {
    if let Some((prefix, rest)) = stem.split_once('-')
        && let Ok(num) = prefix.parse::<u32>()
    {
        return ParsedName {
            number: Some(num),
            slug: rest.to_string(),
        };
    }
    if let Ok(num) = stem.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            slug: String::new(),
        };
    }
    ParsedName {
        number: None,
        slug: stem.to_string(),
    }
}

/// Strip `.{extension}` from the end of `filename`, if present.
pub fn strip_extension<'a>(filename: &'a str, extension: &str) -> Option<&'a str> {
    filename
        .strip_suffix(extension)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|stem| !stem.is_empty())
}

/// Derive the output filename for a source filename.
pub fn output_filename(source: &str, source_ext: &str, output_ext: &str) -> String {
    let stem = strip_extension(source, source_ext).unwrap_or(source);
    format!("{stem}.{output_ext}")
}
