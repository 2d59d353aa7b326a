//! Page and landing-page composition.
//!
//! Everything here is a pure function from typed inputs to markup. HTML is
//! generated with [maud](https://maud.lambda.xyz/): interpolated text is
//! escaped, converted document bodies are inserted pre-escaped.
//!
//! ## Generated Pages
//!
//! - **Document pages** (`NN-slug.html`): navbar, the converted document, a
//!   previous/next strip and a footer.
//! - **Landing page** (`index.html`): hero, optional intro, one card per
//!   document in order, and a link to the first document.

use crate::config::{HighlightConfig, SiteConfig, SiteSettings};
use crate::types::{ConvertedDocument, DocumentDescriptor, IndexEntry, IndexPage, Navigation, RenderedPage};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const COPY_JS: &str = include_str!("../static/copy.js");

/// Site-wide settings every page is rendered with.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    pub site: &'a SiteSettings,
    pub highlight: &'a HighlightConfig,
    /// Landing page filename.
    pub index: &'a str,
    /// Stylesheet filename.
    pub stylesheet: &'a str,
}

impl<'a> Layout<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            site: &config.site,
            highlight: &config.highlight,
            index: &config.output.index,
            stylesheet: &config.output.stylesheet,
        }
    }

    /// `"Exercise 3"`
    fn ordinal(&self, id: usize) -> String {
        format!("{} {}", self.site.entry_label, id)
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(layout: &Layout, title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(layout.stylesheet);
                @if layout.highlight.enabled {
                    link rel="stylesheet" href=(layout.highlight.theme_url());
                    @for src in layout.highlight.script_urls() {
                        script src=(src) {}
                    }
                    script { (PreEscaped("document.addEventListener('DOMContentLoaded', function () { hljs.highlightAll(); });")) }
                }
                script { (PreEscaped(COPY_JS)) }
            }
            body class=[body_class] {
                (site_header(layout))
                div.container {
                    (content)
                }
                (site_footer(layout))
            }
        }
    }
}

/// Renders the top navbar linking back to the landing page
fn site_header(layout: &Layout) -> Markup {
    html! {
        nav.navbar {
            div.container {
                a.nav-home href=(layout.index) {
                    @if !layout.site.marker.is_empty() {
                        (layout.site.marker) " "
                    }
                    (layout.site.short_title)
                }
                div.nav-links {
                    a href=(layout.index) { "Home" }
                }
            }
        }
    }
}

fn site_footer(layout: &Layout) -> Markup {
    html! {
        footer {
            div.container {
                p {
                    @if !layout.site.marker.is_empty() {
                        (layout.site.marker) " "
                    }
                    (layout.site.footer)
                }
            }
        }
    }
}

/// Renders the previous/next strip at the bottom of a document page.
///
/// The previous control is always present; it reads "Home" when it leads
/// back to the landing page.
pub fn render_page_nav(layout: &Layout, id: usize, navigation: &Navigation) -> Markup {
    html! {
        nav.page-nav {
            a.nav-button href=(navigation.previous) {
                @if navigation.previous_is_index(layout.index) {
                    "\u{2190} Home"
                } @else {
                    "\u{2190} Previous"
                }
            }
            @if let Some(next) = &navigation.next {
                a.nav-button.nav-next href=(next) {
                    "Next: " (layout.ordinal(id + 1)) " \u{2192}"
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders one document page around an already converted body fragment.
pub fn render_page(
    layout: &Layout,
    descriptor: &DocumentDescriptor,
    fragment: &str,
    navigation: &Navigation,
) -> Markup {
    let title = format!(
        "{}: {} - {}",
        layout.ordinal(descriptor.id),
        descriptor.title,
        layout.site.short_title
    );

    let content = html! {
        article.document-content {
            (PreEscaped(fragment))
        }
        (render_page_nav(layout, descriptor.id, navigation))
    };

    base_document(layout, &title, Some("document-page"), content)
}

/// Renders the landing page listing every document in order.
pub fn render_index(layout: &Layout, documents: &[DocumentDescriptor], intro: Option<&str>) -> Markup {
    let count = documents.len();
    let noun = if count == 1 {
        layout.site.entry_label.to_lowercase()
    } else {
        format!("{}s", layout.site.entry_label.to_lowercase())
    };

    let content = html! {
        header.hero {
            h1 {
                @if !layout.site.marker.is_empty() {
                    (layout.site.marker) " "
                }
                (layout.site.title)
            }
            p.lead { (layout.site.lead) }
        }
        @if let Some(intro) = intro {
            section.intro {
                (PreEscaped(intro))
            }
        }
        section.overview {
            h2 { "Overview" }
            p { "This workshop consists of " (count) " " (noun) "." }
            div.entries-grid {
                @for doc in documents {
                    div.entry-card {
                        div.entry-number { (layout.ordinal(doc.id)) }
                        h3 {
                            @if !doc.marker.is_empty() {
                                (doc.marker) " "
                            }
                            a href=(doc.output) { (doc.title) }
                        }
                        @if !doc.description.is_empty() {
                            p { (doc.description) }
                        }
                    }
                }
            }
        }
        @if let Some(first) = documents.first() {
            div.cta {
                a.cta-button href=(first.output) {
                    "Start with " (layout.ordinal(first.id)) " \u{2192}"
                }
            }
        }
    };

    base_document(layout, &layout.site.title, Some("index-page"), content)
}

// ============================================================================
// Composition
// ============================================================================

/// Compose the page for the document at `position` in `documents`.
pub fn compose_page<'a>(
    layout: &Layout,
    documents: &'a [DocumentDescriptor],
    position: usize,
    converted: &ConvertedDocument<'a>,
) -> RenderedPage<'a> {
    let navigation = Navigation::for_position(documents, position, layout.index);
    let html = render_page(layout, converted.descriptor, &converted.fragment, &navigation);
    RenderedPage {
        descriptor: converted.descriptor,
        navigation,
        html: html.into_string(),
    }
}

/// Compose the landing page. `documents` must be ordered by id.
pub fn compose_index(layout: &Layout, documents: &[DocumentDescriptor], intro: Option<&str>) -> IndexPage {
    let entries = documents
        .iter()
        .map(|d| IndexEntry {
            id: d.id,
            title: d.title.clone(),
            output: d.output.clone(),
        })
        .collect();
    IndexPage {
        entries,
        html: render_index(layout, documents, intro).into_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{descriptors, test_config};

    #[test]
    fn page_has_doctype_and_title() {
        let config = test_config(3);
        let layout = Layout::new(&config);
        let docs = config.descriptors();
        let nav = Navigation::for_position(&docs, 1, "index.html");
        let html = render_page(&layout, &docs[1], "<p>body</p>", &nav).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Exercise 1: Doc 1 - Test Workshop</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="style.css">"#));
    }

    #[test]
    fn page_inserts_body_unescaped() {
        let config = test_config(1);
        let layout = Layout::new(&config);
        let docs = config.descriptors();
        let nav = Navigation::for_position(&docs, 0, "index.html");
        let html = render_page(&layout, &docs[0], "<h1>Hi</h1>", &nav).into_string();
        assert!(html.contains(r#"<article class="document-content"><h1>Hi</h1></article>"#));
    }

    #[test]
    fn first_page_links_home_and_next() {
        let config = test_config(3);
        let layout = Layout::new(&config);
        let docs = config.descriptors();
        let nav = Navigation::for_position(&docs, 0, "index.html");
        let html = render_page_nav(&layout, 0, &nav).into_string();

        assert!(html.contains(r#"<a class="nav-button" href="index.html">← Home</a>"#));
        assert!(html.contains(r#"href="01-doc.html">Next: Exercise 1 →</a>"#));
    }

    #[test]
    fn interior_page_links_previous() {
        let config = test_config(3);
        let layout = Layout::new(&config);
        let docs = config.descriptors();
        let nav = Navigation::for_position(&docs, 1, "index.html");
        let html = render_page_nav(&layout, 1, &nav).into_string();

        assert!(html.contains(r#"href="00-doc.html">← Previous</a>"#));
        assert!(html.contains(r#"href="02-doc.html">Next: Exercise 2 →</a>"#));
    }

    #[test]
    fn last_page_has_no_next() {
        let config = test_config(3);
        let layout = Layout::new(&config);
        let docs = config.descriptors();
        let nav = Navigation::for_position(&docs, 2, "index.html");
        let html = render_page_nav(&layout, 2, &nav).into_string();

        assert!(html.contains(r#"href="01-doc.html">← Previous</a>"#));
        assert!(!html.contains("Next:"));
    }

    #[test]
    fn page_has_exactly_one_nav_strip() {
        let config = test_config(3);
        let layout = Layout::new(&config);
        let docs = config.descriptors();
        let nav = Navigation::for_position(&docs, 1, "index.html");
        let html = render_page(&layout, &docs[1], "<p>x</p>", &nav).into_string();
        assert_eq!(html.matches(r#"class="page-nav""#).count(), 1);
    }

    #[test]
    fn highlight_assets_follow_config() {
        let mut config = test_config(1);
        let docs = config.descriptors();
        let nav = Navigation::for_position(&docs, 0, "index.html");

        let html = render_page(&Layout::new(&config), &docs[0], "", &nav).into_string();
        assert!(html.contains("highlight.min.js"));
        assert!(html.contains("hljs.highlightAll()"));

        config.highlight.enabled = false;
        let html = render_page(&Layout::new(&config), &docs[0], "", &nav).into_string();
        assert!(!html.contains("highlight.min.js"));
        // Copy buttons do not depend on highlighting
        assert!(html.contains("copy-button"));
    }

    #[test]
    fn titles_are_escaped() {
        let config = test_config(1);
        let layout = Layout::new(&config);
        let mut docs = config.descriptors();
        docs[0].title = "<script>alert('xss')</script>".to_string();
        let nav = Navigation::for_position(&docs, 0, "index.html");

        let page = render_page(&layout, &docs[0], "", &nav).into_string();
        assert!(!page.contains("<script>alert"));
        let index = render_index(&layout, &docs, None).into_string();
        assert!(!index.contains("<script>alert"));
        assert!(index.contains("&lt;script&gt;"));
    }

    // =========================================================================
    // Landing page
    // =========================================================================

    #[test]
    fn index_lists_entries_in_id_order() {
        let config = test_config(3);
        let layout = Layout::new(&config);
        let docs = config.descriptors();
        let index = compose_index(&layout, &docs, None);

        let ids: Vec<usize> = index.entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        let positions: Vec<usize> = docs
            .iter()
            .map(|d| index.html.find(&format!(r#"href="{}""#, d.output)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn index_has_one_card_per_document() {
        let config = test_config(4);
        let layout = Layout::new(&config);
        let docs = config.descriptors();
        let index = compose_index(&layout, &docs, None);

        assert_eq!(index.entries.len(), 4);
        assert_eq!(index.html.matches(r#"class="entry-card""#).count(), 4);
        assert!(index.html.contains("This workshop consists of 4 exercises."));
    }

    #[test]
    fn index_card_shows_marker_and_description() {
        let config = test_config(1);
        let layout = Layout::new(&config);
        let docs = config.descriptors();
        let html = render_index(&layout, &docs, None).into_string();

        assert!(html.contains(r#"<div class="entry-number">Exercise 0</div>"#));
        assert!(html.contains(r#"<h3>* <a href="00-doc.html">Doc 0</a></h3>"#));
        assert!(html.contains("<p>About doc 0</p>"));
        assert!(html.contains("This workshop consists of 1 exercise."));
    }

    #[test]
    fn index_links_first_document() {
        let config = test_config(2);
        let layout = Layout::new(&config);
        let docs = config.descriptors();
        let html = render_index(&layout, &docs, None).into_string();
        assert!(html.contains(r#"<a class="cta-button" href="00-doc.html">Start with Exercise 0 →</a>"#));
    }

    #[test]
    fn empty_index_has_no_call_to_action() {
        let config = test_config(1);
        let layout = Layout::new(&config);
        let index = compose_index(&layout, &[], None);
        assert!(index.entries.is_empty());
        assert!(!index.html.contains("cta-button"));
    }

    #[test]
    fn index_renders_intro() {
        let config = test_config(1);
        let layout = Layout::new(&config);
        let docs = descriptors(1);
        let html = render_index(&layout, &docs, Some("<h2>Prerequisites</h2>")).into_string();
        assert!(html.contains(r#"<section class="intro"><h2>Prerequisites</h2></section>"#));
    }

    #[test]
    fn compose_page_carries_navigation() {
        let config = test_config(2);
        let layout = Layout::new(&config);
        let docs = config.descriptors();
        let converted = ConvertedDocument {
            descriptor: &docs[1],
            fragment: "<p>x</p>".to_string(),
            links: vec![],
        };
        let page = compose_page(&layout, &docs, 1, &converted);
        assert_eq!(page.navigation.previous, "00-doc.html");
        assert_eq!(page.navigation.next, None);
        assert!(page.html.contains("<p>x</p>"));
    }
}
