//! # Workshop Site
//!
//! A static site generator for sequential markdown workshops. An ordered list
//! of exercise documents becomes a browsable website: one page per exercise
//! with previous/next navigation, a landing page listing every exercise, and
//! one shared stylesheet.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Collecting   exercises/*.md  →  converted, link-rewritten fragments
//! 2. Composing    fragments       →  full pages + landing page (pure)
//! 3. Writing      pages           →  website/
//! ```
//!
//! Every source is read and converted before the first file is written. A
//! missing exercise aborts the run with the output directory untouched.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`source`] | `SourceProvider` trait; directory and in-memory providers |
//! | [`convert`] | `MarkdownConverter` trait; pulldown-cmark implementation with bare-URL autolinks |
//! | [`links`] | Rewrites `.md` references between documents to their `.html` pages |
//! | [`compose`] | Renders document pages and the landing page using Maud |
//! | [`writer`] | Writes the flat output directory |
//! | [`generate`] | Runs the three stages in order and reports which stage failed |
//! | [`check`] | Collecting stage only, plus consistency warnings |
//! | [`config`] | `site.toml` loading, validation, stock defaults, and CSS color generation |
//! | [`types`] | Descriptors, navigation and page values passed between stages |
//! | [`naming`] | `NN-slug.md` filename convention |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## The Document List Is the Order
//!
//! Exercises are ordered by their position in `[[documents]]`, not by the
//! number in their filename. The list also carries titles, markers and
//! descriptions, which markdown files alone don't provide. `check` warns when
//! a filename number and a list position disagree.
//!
//! ## Links Written for a Code Host
//!
//! Authors write `03-x.md` and `../README.md` so the documents read correctly
//! in a repository browser. [`links`] maps those references onto the
//! generated site, leaving every other link alone.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Interpolated
//! titles and descriptions are escaped; converted markdown is inserted as-is.
//!
//! ## Client-Side Highlighting
//!
//! Code blocks are emitted as `<pre><code class="language-x">` and highlighted
//! in the browser by highlight.js loaded from a CDN. Pages work without it.

pub mod check;
pub mod compose;
pub mod config;
pub mod convert;
pub mod generate;
pub mod links;
pub mod naming;
pub mod output;
pub mod source;
pub mod types;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_helpers;
