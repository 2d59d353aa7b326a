//! Rewriting of intra-repository document links.
//!
//! Documents link to each other the way they read on a code host: `03-x.md`
//! for a sibling, `../exercises/03-x.md` from the project root, `../README.md`
//! for the overview. On the generated site those become `03-x.html` and the
//! landing page.
//!
//! Each `href="…"` value in a fragment is offered to a list of [`LinkRule`]s
//! in order. The first rule that matches produces the new value; values no
//! rule matches are kept as they are. Rewritten values never end in the source
//! extension, so rewriting is idempotent.

use crate::config::SiteConfig;
use crate::naming;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"href="([^"]*)""#).unwrap());

/// One recognised reference shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkRule {
    /// An exact path (the overview document) mapped to a fixed target, keeping
    /// any `#fragment`.
    Overview { path: String, target: String },
    /// `{prefix}{name}.{source_ext}` mapped to `{name}.{output_ext}`.
    SourceDir {
        prefix: String,
        source_ext: String,
        output_ext: String,
    },
    /// `{name}.{source_ext}` with no directory or scheme, mapped to
    /// `{name}.{output_ext}`.
    Sibling {
        source_ext: String,
        output_ext: String,
    },
}

impl LinkRule {
    /// Rewrite `href` if this rule matches it.
    pub fn apply(&self, href: &str) -> Option<String> {
        match self {
            LinkRule::Overview { path, target } => match href.split_once('#') {
                Some((head, fragment)) if head == path => Some(format!("{target}#{fragment}")),
                None if href == path => Some(target.clone()),
                _ => None,
            },
            LinkRule::SourceDir {
                prefix,
                source_ext,
                output_ext,
            } => {
                let rest = href.strip_prefix(prefix.as_str())?;
                swap_document_extension(rest, source_ext, output_ext)
            }
            LinkRule::Sibling {
                source_ext,
                output_ext,
            } => swap_document_extension(href, source_ext, output_ext),
        }
    }
}

/// Swap the extension of a bare document reference, keeping any `#fragment`.
fn swap_document_extension(href: &str, source_ext: &str, output_ext: &str) -> Option<String> {
    let (path, fragment) = match href.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (href, None),
    };
    if path.contains(['/', '\\', ':', '?']) {
        return None;
    }
    let stem = naming::strip_extension(path, source_ext)?;
    Some(match fragment {
        Some(fragment) => format!("{stem}.{output_ext}#{fragment}"),
        None => format!("{stem}.{output_ext}"),
    })
}

/// Rewrites document references inside HTML fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRewriter {
    rules: Vec<LinkRule>,
}

impl LinkRewriter {
    pub fn new(rules: Vec<LinkRule>) -> Self {
        Self { rules }
    }

    /// Rules for a site: overview, then source directory, then siblings.
    pub fn for_site(config: &SiteConfig) -> Self {
        let source_ext = config.output.source_extension.clone();
        let output_ext = config.output.output_extension.clone();
        Self::new(vec![
            LinkRule::Overview {
                path: config.links.overview.clone(),
                target: config.output.index.clone(),
            },
            LinkRule::SourceDir {
                prefix: config.links.source_dir_prefix.clone(),
                source_ext: source_ext.clone(),
                output_ext: output_ext.clone(),
            },
            LinkRule::Sibling {
                source_ext,
                output_ext,
            },
        ])
    }

    /// Rewrite a single href value. Returns `None` when no rule matches.
    pub fn rewrite_href(&self, href: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.apply(href))
    }

    /// Rewrite every matching `href` in `html`.
    pub fn rewrite(&self, html: &str) -> String {
        HREF_RE
            .replace_all(html, |caps: &Captures| match self.rewrite_href(&caps[1]) {
                Some(target) => format!(r#"href="{target}""#),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Targets of every href in `html` that a rule would rewrite, without the
    /// `#fragment`, in document order.
    pub fn rewritten_targets(&self, html: &str) -> Vec<String> {
        HREF_RE
            .captures_iter(html)
            .filter_map(|caps| self.rewrite_href(&caps[1]))
            .map(|target| match target.split_once('#') {
                Some((path, _)) => path.to_string(),
                None => target,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, SiteConfig};

    fn rewriter() -> LinkRewriter {
        let config = SiteConfig {
            documents: config::default_documents(),
            ..SiteConfig::default()
        };
        LinkRewriter::for_site(&config)
    }

    #[test]
    fn overview_link_goes_to_index() {
        let html = rewriter().rewrite(r#"<a href="../README.md">back</a>"#);
        assert_eq!(html, r#"<a href="index.html">back</a>"#);
    }

    #[test]
    fn sibling_link_swaps_extension() {
        let html = rewriter().rewrite(r#"<a href="03-topic.md">next</a>"#);
        assert_eq!(html, r#"<a href="03-topic.html">next</a>"#);
    }

    #[test]
    fn source_dir_link_becomes_sibling() {
        let html = rewriter().rewrite(r#"<a href="../exercises/04-inline.md">x</a>"#);
        assert_eq!(html, r#"<a href="04-inline.html">x</a>"#);
    }

    #[test]
    fn external_links_unchanged() {
        let input = r#"<a href="https://example.com">x</a> <a href="https://example.com/a.md">y</a>"#;
        assert_eq!(rewriter().rewrite(input), input);
    }

    #[test]
    fn anchors_and_other_paths_unchanged() {
        let input = concat!(
            r##"<a href="#setup">a</a>"##,
            r#"<a href="../docs/guide.md">b</a>"#,
            r#"<a href="image.png">c</a>"#,
            r#"<a href="">d</a>"#,
        );
        assert_eq!(rewriter().rewrite(input), input);
    }

    #[test]
    fn fragment_is_preserved() {
        let html = rewriter().rewrite(r#"<a href="03-topic.md#step-2">x</a>"#);
        assert_eq!(html, r#"<a href="03-topic.html#step-2">x</a>"#);
    }

    #[test]
    fn overview_fragment_is_preserved() {
        let rw = rewriter();
        let html = rw.rewrite(r#"<a href="../README.md#exercises">x</a>"#);
        assert_eq!(html, r#"<a href="index.html#exercises">x</a>"#);
        assert_eq!(rw.rewrite(&html), html);
        assert_eq!(rw.rewritten_targets(&html), Vec::<String>::new());
        assert_eq!(
            rw.rewritten_targets(r#"<a href="../README.md#exercises">x</a>"#),
            vec!["index.html"]
        );
    }

    #[test]
    fn rewrites_every_occurrence() {
        let html = rewriter().rewrite(
            r#"<p><a href="00-a.md">a</a> and <a href="../README.md">home</a> and <a href="01-b.md">b</a></p>"#,
        );
        assert_eq!(
            html,
            r#"<p><a href="00-a.html">a</a> and <a href="index.html">home</a> and <a href="01-b.html">b</a></p>"#
        );
    }

    #[test]
    fn rewrite_is_idempotent() {
        let rw = rewriter();
        let input = concat!(
            r#"<a href="../README.md">a</a>"#,
            r#"<a href="03-topic.md">b</a>"#,
            r#"<a href="../exercises/05-x.md#y">c</a>"#,
            r#"<a href="https://example.com">d</a>"#,
        );
        let once = rw.rewrite(input);
        assert_eq!(rw.rewrite(&once), once);
    }

    #[test]
    fn first_matching_rule_wins() {
        let rw = LinkRewriter::new(vec![
            LinkRule::Overview {
                path: "README.md".to_string(),
                target: "index.html".to_string(),
            },
            LinkRule::Sibling {
                source_ext: "md".to_string(),
                output_ext: "html".to_string(),
            },
        ]);
        assert_eq!(rw.rewrite_href("README.md").as_deref(), Some("index.html"));
        assert_eq!(rw.rewrite_href("NOTES.md").as_deref(), Some("NOTES.html"));
    }

    #[test]
    fn no_rules_means_no_change() {
        let input = r#"<a href="03-topic.md">x</a>"#;
        assert_eq!(LinkRewriter::new(vec![]).rewrite(input), input);
    }

    #[test]
    fn rewritten_targets_strip_fragments() {
        let targets = rewriter().rewritten_targets(
            r##"<a href="03-topic.md#a">x</a><a href="#top">t</a><a href="../README.md">r</a>"##,
        );
        assert_eq!(targets, vec!["03-topic.html", "index.html"]);
    }
}
