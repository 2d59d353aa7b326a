//! Markdown to HTML conversion.
//!
//! [`PulldownConverter`] runs `pulldown-cmark` with tables, strikethrough and
//! task lists enabled (fenced code is core CommonMark), then turns bare
//! `http(s)://` URLs in running text into links. URLs inside code, existing
//! links (markdown or raw `<a>` tags) and image alt text are left alone.

use pulldown_cmark::{CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, html};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static BARE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"']+"#).unwrap());
static RAW_ANCHOR_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<a[\s>]").unwrap());
static RAW_ANCHOR_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</a\s*>").unwrap());

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("source is not valid UTF-8 (first bad byte at offset {offset})")]
    InvalidUtf8 { offset: usize },
}

/// Converts a markdown document into an HTML fragment.
pub trait MarkdownConverter {
    fn convert(&self, markdown: &[u8]) -> Result<String, ConvertError>;
}

/// `pulldown-cmark` backed converter.
#[derive(Debug, Clone)]
pub struct PulldownConverter {
    options: Options,
}

impl Default for PulldownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownConverter {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);
        Self { options }
    }
}

impl MarkdownConverter for PulldownConverter {
    fn convert(&self, markdown: &[u8]) -> Result<String, ConvertError> {
        let text = std::str::from_utf8(markdown).map_err(|e| ConvertError::InvalidUtf8 {
            offset: e.valid_up_to(),
        })?;
        let events = autolink(Parser::new_ext(text, self.options));
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, events.into_iter());
        Ok(out)
    }
}

/// Wrap bare URLs in running text with autolink events.
fn autolink<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut out = Vec::new();
    // Depth of enclosing links, images and code blocks
    let mut opaque = 0usize;
    let mut pending = String::new();

    for event in events {
        if let Event::Text(text) = &event
            && opaque == 0
        {
            pending.push_str(text);
            continue;
        }
        flush_text(&mut pending, &mut out);
        match &event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. } | Tag::CodeBlock(_)) => opaque += 1,
            Event::End(TagEnd::Link | TagEnd::Image | TagEnd::CodeBlock) => {
                opaque = opaque.saturating_sub(1)
            }
            // Raw `<a …>…</a>` written as HTML in the markdown
            Event::InlineHtml(raw) | Event::Html(raw) => {
                opaque += RAW_ANCHOR_OPEN_RE.find_iter(raw).count();
                opaque = opaque.saturating_sub(RAW_ANCHOR_CLOSE_RE.find_iter(raw).count());
            }
            _ => {}
        }
        out.push(event);
    }
    flush_text(&mut pending, &mut out);
    out
}

fn flush_text<'a>(pending: &mut String, out: &mut Vec<Event<'a>>) {
    if pending.is_empty() {
        return;
    }
    let text = std::mem::take(pending);
    let mut last = 0;
    for m in BARE_URL_RE.find_iter(&text) {
        let url = trim_url(m.as_str());
        if url.is_empty() {
            continue;
        }
        if m.start() > last {
            out.push(Event::Text(CowStr::from(text[last..m.start()].to_string())));
        }
        let url = url.to_string();
        out.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: CowStr::from(url.clone()),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        out.push(Event::Text(CowStr::from(url.clone())));
        out.push(Event::End(TagEnd::Link));
        last = m.start() + url.len();
    }
    if last < text.len() {
        out.push(Event::Text(CowStr::from(text[last..].to_string())));
    }
}

/// Drop trailing sentence punctuation and an unbalanced closing paren.
fn trim_url(url: &str) -> &str {
    let mut url = url.trim_end_matches(['.', ',', ';', ':', '!', '?']);
    if url.ends_with(')') && !url.contains('(') {
        url = url[..url.len() - 1].trim_end_matches(['.', ',', ';', ':', '!', '?']);
    }
    // A scheme alone is not a link
    if url.ends_with("://") { "" } else { url }
}
