//! Result type for extraction output.

use serde::{Deserialize, Serialize};

/// Result of content extraction from an HTML document.
///
/// Both fields are always present; a page without a detectable body or
/// title yields empty strings rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Main content as plain text.
    pub content_text: String,

    /// Page title from the `<title>` element.
    pub title: String,
}

impl ExtractResult {
    /// Splits the result into `(body, title)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.content_text, self.title)
    }

    /// True if no body text was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content_text.is_empty()
    }
}
