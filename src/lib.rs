//! # extractcontent
//!
//! Extracts the main text and the title of an HTML page without building a
//! DOM.
//!
//! The document is cut into blocks at container tags. Every block is scored
//! on its non-link text length and punctuation, decayed by its position and
//! weighted by whether it directly follows another good block. Consecutive
//! good blocks form clusters; the best-scoring cluster is the article body.
//!
//! ## Quick Start
//!
//! ```rust
//! use extractcontent::analyze;
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><div><a href="/">Home</a></div>
//! <div>The main content of the article goes here. It is long enough to be
//! scored, and it has punctuation, which helps it stand out from menus.</div></body></html>"#;
//!
//! let result = analyze(html);
//! assert_eq!(result.title, "My Article");
//! assert!(result.content_text.starts_with("The main content"));
//! ```
//!
//! ## Behaviour
//!
//! - **Never fails**: malformed markup degrades to empty output.
//! - **Framesets and redirects**: only the title is returned.
//! - **AdSense section targeting**: marked sections take precedence.
//! - **Configurable**: thresholds and patterns via [`Options`].

mod error;
mod extract;
mod options;
mod result;

/// Compiled regex patterns shared by all stages.
pub mod patterns;

/// Tag stripping, entity decoding and title extraction.
pub mod normalize;

/// Preprocessing of raw markup before segmentation.
pub mod html_processing;

/// Block segmentation.
pub mod segment;

/// Link removal and link-list detection.
pub mod link_density;

/// Per-block scoring.
pub mod scoring;

/// Cluster accumulation and selection.
pub mod cluster;

/// Character encoding detection and lossy decoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{OptionOverrides, Options};
pub use result::ExtractResult;

/// Extracts the body text and title from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// let result = extractcontent::analyze("<html><body>short</body></html>");
/// assert_eq!(result.content_text, "");
/// ```
#[must_use]
pub fn analyze(html: &str) -> ExtractResult {
    analyze_with_options(html, &Options::default())
}

/// Extracts the body text and title from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use extractcontent::{analyze_with_options, Options};
///
/// let options = Options {
///     min_length: 10,
///     threshold: 10.0,
///     ..Options::default()
/// };
/// let result = analyze_with_options("<div>Short but accepted.</div>", &options);
/// assert_eq!(result.content_text, "Short but accepted.");
/// ```
#[must_use]
pub fn analyze_with_options(html: &str, options: &Options) -> ExtractResult {
    extract::extract_content(html, options)
}

/// Extracts from raw bytes, decoding with the declared charset or lossy UTF-8.
///
/// # Example
///
/// ```rust
/// use extractcontent::analyze_bytes;
///
/// let html = b"<html><head><title>Caf\xE9</title><meta charset=\"ISO-8859-1\"></head></html>";
/// assert_eq!(analyze_bytes(html).title, "Café");
/// ```
#[must_use]
pub fn analyze_bytes(html: &[u8]) -> ExtractResult {
    analyze(&encoding::transcode_to_utf8(html))
}

/// An extractor carrying its own default options.
///
/// Changing the defaults of one extractor never affects another, and
/// per-call overrides never change the extractor's defaults.
///
/// # Example
///
/// ```rust
/// use extractcontent::{ContentExtractor, OptionOverrides};
///
/// let mut extractor = ContentExtractor::new(None);
/// extractor.set_defaults(&OptionOverrides {
///     min_length: Some(10),
///     threshold: Some(10.0),
///     ..OptionOverrides::default()
/// });
///
/// let (body, title) = extractor
///     .analyze("<title>T</title><div>Short but accepted.</div>", None)
///     .into_parts();
/// assert_eq!(body, "Short but accepted.");
/// assert_eq!(title, "T");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentExtractor {
    defaults: Options,
}

impl ContentExtractor {
    /// Creates an extractor whose defaults are the built-in ones with `overrides` applied.
    #[must_use]
    pub fn new(overrides: Option<&OptionOverrides>) -> Self {
        let defaults = Options::default();
        Self {
            defaults: overrides.map_or(defaults.clone(), |o| o.apply_to(&defaults)),
        }
    }

    /// Creates an extractor with explicit default options.
    #[must_use]
    pub fn with_options(defaults: Options) -> Self {
        Self { defaults }
    }

    /// This extractor's default options.
    #[must_use]
    pub fn defaults(&self) -> &Options {
        &self.defaults
    }

    /// Layers `overrides` onto this extractor's defaults.
    pub fn set_defaults(&mut self, overrides: &OptionOverrides) {
        self.defaults = overrides.apply_to(&self.defaults);
    }

    /// Analyses `html` with this extractor's defaults and optional per-call overrides.
    #[must_use]
    pub fn analyze(&self, html: &str, overrides: Option<&OptionOverrides>) -> ExtractResult {
        match overrides {
            Some(overrides) if !overrides.is_empty() => {
                analyze_with_options(html, &overrides.apply_to(&self.defaults))
            }
            _ => analyze_with_options(html, &self.defaults),
        }
    }

    /// Like [`ContentExtractor::analyze`], decoding raw bytes first.
    #[must_use]
    pub fn analyze_bytes(
        &self,
        html: &[u8],
        overrides: Option<&OptionOverrides>,
    ) -> ExtractResult {
        self.analyze(&encoding::transcode_to_utf8(html), overrides)
    }
}
