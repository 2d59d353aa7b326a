//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. Stock defaults
//! describe the Go source code workshop; a `site.toml` in the source directory
//! (or the file passed with `--config`) overrides any subset of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Having Fun with the Go Source Code Workshop"
//! short_title = "Go Source Code Workshop"   # Navbar and <title> suffix
//! marker = "🚀"
//! lead = "Welcome to an interactive workshop ..."
//! footer = "Having Fun with the Go Source Code Workshop"
//! entry_label = "Exercise"                  # "Exercise 3", "Next: Exercise 4 →"
//! # intro = "intro.md"                      # Markdown rendered on the landing page
//!
//! [output]
//! index = "index.html"
//! stylesheet = "style.css"
//! source_extension = "md"
//! output_extension = "html"
//!
//! [links]
//! overview = "../README.md"                 # Rewritten to the landing page
//! source_dir_prefix = "../exercises/"       # ../exercises/X.md → X.html
//!
//! [highlight]
//! enabled = true
//! version = "11.9.0"
//! theme = "atom-one-dark"
//! languages = ["go"]
//!
//! [colors.light]
//! background = "#ffffff"
//! ...
//!
//! [[documents]]
//! source = "00-introduction-setup.md"
//! title = "Introduction and Setup"
//! marker = "🌱"
//! description = "Get started by cloning and setting up the Go source code environment."
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Tables merge key by key; arrays replace. A
//! `[[documents]]` list in `site.toml` therefore replaces the whole stock
//! list, which is what a different workshop wants.
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming;
use crate::types::DocumentDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the source directory.
pub const CONFIG_FILENAME: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Titles and prose shown on every page.
    pub site: SiteSettings,
    /// Output filenames and extensions.
    pub output: OutputConfig,
    /// Link rewriting rules.
    pub links: LinksConfig,
    /// Client-side syntax highlighting.
    pub highlight: HighlightConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Ordered document list. Position in this list is the document id.
    pub documents: Vec<DocumentConfig>,
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.documents.is_empty() {
            return Err(ConfigError::Validation(
                "documents must not be empty".into(),
            ));
        }
        if self.output.source_extension.is_empty() || self.output.output_extension.is_empty() {
            return Err(ConfigError::Validation(
                "output.source_extension and output.output_extension must not be empty".into(),
            ));
        }
        if self.output.index == self.output.stylesheet {
            return Err(ConfigError::Validation(
                "output.index and output.stylesheet must differ".into(),
            ));
        }

        for (key, name) in [
            ("output.index", &self.output.index),
            ("output.stylesheet", &self.output.stylesheet),
        ] {
            if !is_flat_filename(name) {
                return Err(ConfigError::Validation(format!(
                    "{key} {name} must be a plain filename"
                )));
            }
        }
        if let Some(intro) = &self.site.intro
            && !is_flat_filename(intro)
        {
            return Err(ConfigError::Validation(format!(
                "site.intro {intro} must be a filename in the source directory"
            )));
        }

        let mut sources = HashSet::new();
        let mut outputs = HashSet::new();
        for doc in self.descriptors() {
            if doc.source.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "document {} has an empty source filename",
                    doc.id
                )));
            }
            if !is_flat_filename(&doc.source) {
                return Err(ConfigError::Validation(format!(
                    "document {} source {} must be a filename in the source directory",
                    doc.id, doc.source
                )));
            }
            if !sources.insert(doc.source.clone()) {
                return Err(ConfigError::Validation(format!(
                    "document source {} is listed more than once",
                    doc.source
                )));
            }
            if doc.output == self.output.index || doc.output == self.output.stylesheet {
                return Err(ConfigError::Validation(format!(
                    "document {} would overwrite {}",
                    doc.source, doc.output
                )));
            }
            if !outputs.insert(doc.output.clone()) {
                return Err(ConfigError::Validation(format!(
                    "output filename {} is produced by more than one document",
                    doc.output
                )));
            }
        }
        Ok(())
    }

    /// Build the ordered descriptor list from `documents`.
    pub fn descriptors(&self) -> Vec<DocumentDescriptor> {
        self.documents
            .iter()
            .enumerate()
            .map(|(id, doc)| DocumentDescriptor {
                id,
                title: doc.title.clone(),
                description: doc.description.clone(),
                marker: doc.marker.clone(),
                source: doc.source.clone(),
                output: naming::output_filename(
                    &doc.source,
                    &self.output.source_extension,
                    &self.output.output_extension,
                ),
            })
            .collect()
    }
}

/// Output pages are siblings in one directory, so every configured filename
/// must be a single path component.
fn is_flat_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}

/// Titles and prose shown on every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Full title, used on the landing page.
    pub title: String,
    /// Short title, used in the navbar and as the `<title>` suffix.
    pub short_title: String,
    /// Decorative emoji shown before the site name.
    pub marker: String,
    /// Lead paragraph on the landing page.
    pub lead: String,
    /// Footer line on every page.
    pub footer: String,
    /// Word placed before a document's number ("Exercise 3").
    pub entry_label: String,
    /// Optional markdown file, relative to the source directory, rendered on
    /// the landing page below the lead paragraph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Having Fun with the Go Source Code Workshop".to_string(),
            short_title: "Go Source Code Workshop".to_string(),
            marker: "\u{1f680}".to_string(),
            lead: "Welcome to an interactive workshop where you'll learn how to modify and \
                   experiment with the Go programming language source code!"
                .to_string(),
            footer: "Having Fun with the Go Source Code Workshop".to_string(),
            entry_label: "Exercise".to_string(),
            intro: None,
        }
    }
}

/// Output filenames and extensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Landing page filename.
    pub index: String,
    /// Shared stylesheet filename.
    pub stylesheet: String,
    /// Extension of source documents, without the dot.
    pub source_extension: String,
    /// Extension of generated pages, without the dot.
    pub output_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            index: "index.html".to_string(),
            stylesheet: "style.css".to_string(),
            source_extension: "md".to_string(),
            output_extension: "html".to_string(),
        }
    }
}

/// Link rewriting rules.
///
/// Both paths assume documents live one directory below the project root and
/// the overview document sits at the root. Change them together with the
/// directory layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// Relative path of the top-level overview document, as written in a
    /// document. Rewritten to the landing page.
    pub overview: String,
    /// Prefix of references into the source directory from one level up.
    pub source_dir_prefix: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            overview: "../README.md".to_string(),
            source_dir_prefix: "../exercises/".to_string(),
        }
    }
}

/// Client-side syntax highlighting via highlight.js.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    pub enabled: bool,
    /// highlight.js release served from cdnjs.
    pub version: String,
    /// highlight.js style name.
    pub theme: String,
    /// Extra language packs to load.
    pub languages: Vec<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            version: "11.9.0".to_string(),
            theme: "atom-one-dark".to_string(),
            languages: vec!["go".to_string()],
        }
    }
}

impl HighlightConfig {
    fn cdn_base(&self) -> String {
        format!(
            "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/{}",
            self.version
        )
    }

    /// Stylesheet URL for the configured theme.
    pub fn theme_url(&self) -> String {
        format!("{}/styles/{}.min.css", self.cdn_base(), self.theme)
    }

    /// Script URLs: the core bundle followed by each language pack.
    pub fn script_urls(&self) -> Vec<String> {
        let base = self.cdn_base();
        std::iter::once(format!("{base}/highlight.min.js"))
            .chain(
                self.languages
                    .iter()
                    .map(|lang| format!("{base}/languages/{lang}.min.js")),
            )
            .collect()
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary text (card numbers, footer).
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
    /// Navbar, buttons and card accents.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#1f2328".to_string(),
            text_muted: "#656d76".to_string(),
            border: "#d0d7de".to_string(),
            link: "#0969da".to_string(),
            link_hover: "#0550ae".to_string(),
            accent: "#00add8".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0d1117".to_string(),
            text: "#e6edf3".to_string(),
            text_muted: "#8d96a0".to_string(),
            border: "#30363d".to_string(),
            link: "#4493f8".to_string(),
            link_hover: "#79b8ff".to_string(),
            accent: "#00add8".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

/// One entry of the ordered document list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentConfig {
    /// Source filename, relative to the source directory.
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub marker: String,
    #[serde(default)]
    pub description: String,
}

impl DocumentConfig {
    fn new(source: &str, title: &str, marker: &str, description: &str) -> Self {
        Self {
            source: source.to_string(),
            title: title.to_string(),
            marker: marker.to_string(),
            description: description.to_string(),
        }
    }
}

/// The workshop's exercises, in order.
pub fn default_documents() -> Vec<DocumentConfig> {
    vec![
        DocumentConfig::new(
            "00-introduction-setup.md",
            "Introduction and Setup",
            "\u{1f331}",
            "Get started by cloning and setting up the Go source code environment.",
        ),
        DocumentConfig::new(
            "01-compile-go-unchanged.md",
            "Compiling Go Without Changes",
            "\u{1f528}",
            "Learn to build the Go toolchain from source without any modifications.",
        ),
        DocumentConfig::new(
            "02-scanner-arrow-operator.md",
            "Adding the \"=>\" Arrow Operator for Goroutines",
            "\u{26a1}",
            "Learn scanner/lexer modification by adding \"=>\" as an alternative syntax for \
             starting goroutines.",
        ),
        DocumentConfig::new(
            "03-parser-multiple-go.md",
            "Multiple \"go\" Keywords - Parser Enhancement",
            "\u{1f504}",
            "Learn parser modification by enabling multiple consecutive \"go\" keywords \
             (go go go myFunction).",
        ),
        DocumentConfig::new(
            "04-compiler-inlining-parameters.md",
            "Inline Parameters - Function Inlining Experiments",
            "\u{2699}\u{fe0f}",
            "Explore the inliner behavior by modifying function inlining parameters.",
        ),
        DocumentConfig::new(
            "05-gofmt-ast-transformation.md",
            "gofmt Transformation - \"hello\" to \"helo\"",
            "\u{1f3a8}",
            "Learn about Go's tools by modifying gofmt to modify \"hello\" to \"helo\" in code.",
        ),
        DocumentConfig::new(
            "06-ssa-power-of-two-detector.md",
            "SSA Pass - Detecting Division by Powers of Two",
            "\u{1f50d}",
            "Create a custom SSA compiler pass that detects division operations by powers of \
             two that could be optimized to bit shifts.",
        ),
        DocumentConfig::new(
            "07-runtime-patient-go.md",
            "Patient Go - Making Go Wait for Goroutines",
            "\u{1f570}\u{fe0f}",
            "Modify the Go runtime to wait for all goroutines to complete before program \
             termination.",
        ),
        DocumentConfig::new(
            "08-goroutine-sleep-detective.md",
            "Goroutine Sleep Detective - Runtime State Monitoring",
            "\u{1f575}\u{fe0f}\u{200d}\u{2642}\u{fe0f}",
            "Add logging to the Go scheduler to monitor goroutines going to sleep.",
        ),
        DocumentConfig::new(
            "09-predictable-select.md",
            "Predictable Select - Removing Randomness from Go's Select Statement",
            "\u{1f3af}",
            "Modify Go's select statement implementation to be deterministic instead of random.",
        ),
        DocumentConfig::new(
            "10-java-style-stack-traces.md",
            "Java-Style Stack Traces - Making Go Panics Look Familiar",
            "\u{2615}",
            "Transform Go's verbose stack traces into Java-style formatting.",
        ),
    ]
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    let config = SiteConfig {
        documents: default_documents(),
        ..SiteConfig::default()
    };
    Ok(toml::Value::try_from(config)?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    read_toml(path).map(Some)
}

fn read_toml(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the site config.
///
/// An explicit `config_path` must exist. Without one, `site.toml` in
/// `source_dir` is used when present, and the stock defaults otherwise.
pub fn load_config(source_dir: &Path, config_path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let (path, overlay) = match config_path {
        Some(path) => (path.to_path_buf(), Some(read_toml(path)?)),
        None => {
            let path = source_dir.join(CONFIG_FILENAME);
            let overlay = load_raw_config(&path)?;
            (path, overlay)
        }
    };
    let from_file = overlay.is_some();
    resolve_config(stock_defaults_value()?, overlay).map_err(|e| match e {
        // Unknown keys and wrong types only surface once merged
        ConfigError::Toml(source) if from_file => ConfigError::Parse { path, source },
        other => other,
    })
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Workshop Site Configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Place this file at <source>/site.toml or pass it with --config.
#
# Tables merge key by key with the defaults. Arrays replace them, so a
# [[documents]] list here replaces the whole stock document list.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site text
# ---------------------------------------------------------------------------
[site]
title = "Having Fun with the Go Source Code Workshop"
# Used in the navbar and as the suffix of every page <title>.
short_title = "Go Source Code Workshop"
marker = "\U0001F680"
lead = "Welcome to an interactive workshop where you'll learn how to modify and experiment with the Go programming language source code!"
footer = "Having Fun with the Go Source Code Workshop"
# Word placed before a document's number: "Exercise 3".
entry_label = "Exercise"
# Markdown file (relative to the source directory) rendered on the landing page.
# intro = "intro.md"

# ---------------------------------------------------------------------------
# Output layout
# ---------------------------------------------------------------------------
[output]
index = "index.html"
stylesheet = "style.css"
source_extension = "md"
output_extension = "html"

# ---------------------------------------------------------------------------
# Link rewriting
# ---------------------------------------------------------------------------
# Both paths assume documents live one directory below the project root.
[links]
# Links to this path are rewritten to the landing page.
overview = "../README.md"
# Links like ../exercises/03-x.md are rewritten to 03-x.html.
source_dir_prefix = "../exercises/"

# ---------------------------------------------------------------------------
# Syntax highlighting (highlight.js from cdnjs)
# ---------------------------------------------------------------------------
[highlight]
enabled = true
version = "11.9.0"
theme = "atom-one-dark"
languages = ["go"]

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#1f2328"
text_muted = "#656d76"
border = "#d0d7de"
link = "#0969da"
link_hover = "#0550ae"
accent = "#00add8"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0d1117"
text = "#e6edf3"
text_muted = "#8d96a0"
border = "#30363d"
link = "#4493f8"
link_hover = "#79b8ff"
accent = "#00add8"

# ---------------------------------------------------------------------------
# Documents, in reading order. The first entry is document 0.
# ---------------------------------------------------------------------------
[[documents]]
source = "00-introduction-setup.md"
title = "Introduction and Setup"
marker = "\U0001F331"
description = "Get started by cloning and setting up the Go source code environment."

[[documents]]
source = "01-compile-go-unchanged.md"
title = "Compiling Go Without Changes"
marker = "\U0001F528"
description = "Learn to build the Go toolchain from source without any modifications."

[[documents]]
source = "02-scanner-arrow-operator.md"
title = 'Adding the "=>" Arrow Operator for Goroutines'
marker = "\u26A1"
description = 'Learn scanner/lexer modification by adding "=>" as an alternative syntax for starting goroutines.'

[[documents]]
source = "03-parser-multiple-go.md"
title = 'Multiple "go" Keywords - Parser Enhancement'
marker = "\U0001F504"
description = 'Learn parser modification by enabling multiple consecutive "go" keywords (go go go myFunction).'

[[documents]]
source = "04-compiler-inlining-parameters.md"
title = "Inline Parameters - Function Inlining Experiments"
marker = "\u2699\uFE0F"
description = "Explore the inliner behavior by modifying function inlining parameters."

[[documents]]
source = "05-gofmt-ast-transformation.md"
title = 'gofmt Transformation - "hello" to "helo"'
marker = "\U0001F3A8"
description = "Learn about Go's tools by modifying gofmt to modify \"hello\" to \"helo\" in code."

[[documents]]
source = "06-ssa-power-of-two-detector.md"
title = "SSA Pass - Detecting Division by Powers of Two"
marker = "\U0001F50D"
description = "Create a custom SSA compiler pass that detects division operations by powers of two that could be optimized to bit shifts."

[[documents]]
source = "07-runtime-patient-go.md"
title = "Patient Go - Making Go Wait for Goroutines"
marker = "\U0001F570\uFE0F"
description = "Modify the Go runtime to wait for all goroutines to complete before program termination."

[[documents]]
source = "08-goroutine-sleep-detective.md"
title = "Goroutine Sleep Detective - Runtime State Monitoring"
marker = "\U0001F575\uFE0F\u200D\u2642\uFE0F"
description = "Add logging to the Go scheduler to monitor goroutines going to sleep."

[[documents]]
source = "09-predictable-select.md"
title = "Predictable Select - Removing Randomness from Go's Select Statement"
marker = "\U0001F3AF"
description = "Modify Go's select statement implementation to be deterministic instead of random."

[[documents]]
source = "10-java-style-stack-traces.md"
title = "Java-Style Stack Traces - Making Go Panics Look Familiar"
marker = "\u2615"
description = "Transform Go's verbose stack traces into Java-style formatting."
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
    --color-link-hover: {light_link_hover};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
        --color-link-hover: {dark_link_hover};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        light_link_hover = colors.light.link_hover,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
        dark_link_hover = colors.dark.link_hover,
        dark_accent = colors.dark.accent,
    )
}
