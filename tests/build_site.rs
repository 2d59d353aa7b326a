//! End-to-end site generation through the library API, using the fixture
//! workshop in `fixtures/workshop/`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use workshop_site::config::{self, DocumentConfig};
use workshop_site::convert::PulldownConverter;
use workshop_site::generate::{self, Stage};
use workshop_site::source::DirSource;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/workshop")
}

fn build_into(source: &Path, output: &Path) -> generate::GenerateReport {
    let site = config::load_config(source, None).unwrap();
    generate::generate(&site, &DirSource::new(source), &PulldownConverter::new(), output).unwrap()
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("reading {name}: {e}"))
}

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// Output set
// ---------------------------------------------------------------------------

#[test]
fn writes_one_page_per_document_plus_index_and_stylesheet() {
    let out = TempDir::new().unwrap();
    let report = build_into(&fixtures_dir(), out.path());

    assert_eq!(
        sorted_names(out.path()),
        vec![
            "00-getting-started.html",
            "01-first-steps.html",
            "02-wrap-up.html",
            "index.html",
            "style.css",
        ]
    );
    assert_eq!(report.pages.len(), 3);
}

#[test]
fn regeneration_is_byte_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    build_into(&fixtures_dir(), first.path());
    build_into(&fixtures_dir(), second.path());

    for name in sorted_names(first.path()) {
        assert_eq!(
            fs::read(first.path().join(&name)).unwrap(),
            fs::read(second.path().join(&name)).unwrap(),
            "{name} differs between runs"
        );
    }
}

#[test]
fn rebuilding_over_existing_output_overwrites() {
    let out = TempDir::new().unwrap();
    fs::write(out.path().join("index.html"), "stale").unwrap();
    fs::write(out.path().join("keep.txt"), "untouched").unwrap();
    build_into(&fixtures_dir(), out.path());

    assert!(read(out.path(), "index.html").starts_with("<!DOCTYPE html>"));
    assert_eq!(read(out.path(), "keep.txt"), "untouched");
}

// ---------------------------------------------------------------------------
// Navigation and links
// ---------------------------------------------------------------------------

#[test]
fn navigation_chains_pages_in_list_order() {
    let out = TempDir::new().unwrap();
    build_into(&fixtures_dir(), out.path());

    let first = read(out.path(), "00-getting-started.html");
    assert!(first.contains(r#"<a class="nav-button" href="index.html">← Home</a>"#));
    assert!(first.contains(r#"href="01-first-steps.html">Next: Exercise 1 →</a>"#));

    let middle = read(out.path(), "01-first-steps.html");
    assert!(middle.contains(r#"<a class="nav-button" href="00-getting-started.html">← Previous</a>"#));
    assert!(middle.contains(r#"href="02-wrap-up.html">Next: Exercise 2 →</a>"#));

    let last = read(out.path(), "02-wrap-up.html");
    assert!(last.contains(r#"href="01-first-steps.html">← Previous</a>"#));
    assert!(!last.contains("Next:"));
}

#[test]
fn document_links_point_at_generated_pages() {
    let out = TempDir::new().unwrap();
    build_into(&fixtures_dir(), out.path());

    let first = read(out.path(), "00-getting-started.html");
    assert!(first.contains(r#"<a href="index.html">overview</a>"#));
    assert!(first.contains(r#"<a href="01-first-steps.html">first steps</a>"#));

    let middle = read(out.path(), "01-first-steps.html");
    assert!(middle.contains(r#"<a href="02-wrap-up.html#summary">wrap up</a>"#));
    assert!(middle.contains(r#"<a href="https://example.com/docs">https://example.com/docs</a>"#));

    for name in sorted_names(out.path()) {
        if name.ends_with(".html") {
            assert!(!read(out.path(), &name).contains(r#".md""#), "{name} still links a .md file");
        }
    }
}

#[test]
fn markdown_extensions_are_rendered() {
    let out = TempDir::new().unwrap();
    build_into(&fixtures_dir(), out.path());

    let middle = read(out.path(), "01-first-steps.html");
    assert!(middle.contains("<table>"));
    assert!(middle.contains(r#"type="checkbox""#));
    let last = read(out.path(), "02-wrap-up.html");
    assert!(last.contains("<del>broke</del>"));
    let first = read(out.path(), "00-getting-started.html");
    assert!(first.contains(r#"<code class="language-sh">"#));
}

#[test]
fn index_lists_documents_and_intro() {
    let out = TempDir::new().unwrap();
    build_into(&fixtures_dir(), out.path());
    let index = read(out.path(), "index.html");

    let positions: Vec<usize> = ["Getting Started", "First Steps", "Wrap Up"]
        .iter()
        .map(|title| index.find(title).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(index.contains("<h2>Prerequisites</h2>"));
    assert!(index.contains(r#"<a class="cta-button" href="00-getting-started.html">"#));
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[test]
fn missing_source_leaves_output_untouched() {
    let source = TempDir::new().unwrap();
    for name in sorted_names(&fixtures_dir()) {
        fs::copy(fixtures_dir().join(&name), source.path().join(&name)).unwrap();
    }
    fs::remove_file(source.path().join("01-first-steps.md")).unwrap();

    let out = TempDir::new().unwrap();
    let site = config::load_config(source.path(), None).unwrap();
    let err = generate::generate(
        &site,
        &DirSource::new(source.path()),
        &PulldownConverter::new(),
        out.path(),
    )
    .unwrap_err();

    assert_eq!(err.stage(), Stage::Collecting);
    assert!(err.to_string().contains("01-first-steps.md"));
    assert!(sorted_names(out.path()).is_empty());
}

#[test]
fn reordering_the_list_reorders_navigation() {
    let mut site = config::load_config(&fixtures_dir(), None).unwrap();
    site.documents.swap(1, 2);
    site.documents.push(DocumentConfig {
        source: "intro.md".to_string(),
        title: "Appendix".to_string(),
        marker: String::new(),
        description: String::new(),
    });
    site.site.intro = None;

    let out = TempDir::new().unwrap();
    generate::generate(
        &site,
        &DirSource::new(fixtures_dir()),
        &PulldownConverter::new(),
        out.path(),
    )
    .unwrap();

    let first = read(out.path(), "00-getting-started.html");
    assert!(first.contains(r#"href="02-wrap-up.html">Next: Exercise 1 →</a>"#));
    let appendix = read(out.path(), "intro.html");
    assert!(appendix.contains(r#"href="01-first-steps.html">← Previous</a>"#));
    assert!(appendix.contains("<title>Exercise 3: Appendix - Fixture</title>"));
}
