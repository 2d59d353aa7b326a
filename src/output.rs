//! CLI output formatting for `build` and `check`.
//!
//! Output is **information-centric, not file-centric**: every document is
//! shown by its position and title first, with filenames as indented context.
//! That makes the output read as a table of contents for the workshop while
//! still letting users trace each page back to its source.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 000 Introduction and Setup → 00-introduction-setup.html
//!     Source: 00-introduction-setup.md
//! 001 Compile Go Without Changes → 01-compile-go-unchanged.html
//!     Source: 01-compile-go-unchanged.md
//! Stylesheet → style.css
//!
//! Generated 2 pages + index page in website
//! ```
//!
//! ## Check
//!
//! ```text
//! 000 00-introduction-setup.md → 00-introduction-setup.html
//! 001 01-compile-go-unchanged.md → 01-compile-go-unchanged.html
//!
//! Warnings
//!     01-compile-go-unchanged.md: link to 05-missing.html has no matching page
//!
//! Checked 2 documents, 1 warning
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure.

use crate::check::CheckReport;
use crate::generate::GenerateReport;

/// Format a document id as 3-digit zero-padded.
fn format_index(id: usize) -> String {
    format!("{:0>3}", id)
}

/// `"1 warning"`, `"2 warnings"`
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec![format!("Home \u{2192} {}", report.index)];

    for (doc, output) in &report.pages {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(doc.id),
            doc.title,
            output
        ));
        lines.push(format!("    Source: {}", doc.source));
        if !doc.description.is_empty() {
            lines.push(format!("    Description: {}", truncate_desc(&doc.description, 60)));
        }
    }
    lines.push(format!("Stylesheet \u{2192} {}", report.stylesheet));

    lines.push(String::new());
    lines.push(format!(
        "Generated {} + index page in {}",
        plural(report.pages.len(), "page"),
        report.output_dir.display()
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .documents
        .iter()
        .enumerate()
        .map(|(id, (source, output))| {
            format!("{} {} \u{2192} {}", format_index(id), source, output)
        })
        .collect();

    if !report.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in &report.warnings {
            lines.push(format!("    {}", warning));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Checked {}, {}",
        plural(report.documents.len(), "document"),
        plural(report.warnings.len(), "warning")
    ));
    lines
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}
