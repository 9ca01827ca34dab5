use serde::{Deserialize, Serialize};

/// Structural signals extracted from a single page
///
/// Every string field uses the empty string when the element is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedPage {
    /// Normalized URL that was fetched
    pub url: String,

    /// Document title
    pub title: String,

    /// Text of the first H1
    pub h1: String,

    /// Non-empty H2 texts in document order
    pub h2_list: Vec<String>,

    /// Content of the first description meta tag
    pub meta_description: String,

    /// Button-like element labels in document order
    pub cta_texts: Vec<String>,

    /// Visible body text with whitespace collapsed
    pub main_text: String,
}

impl ScrapedPage {
    /// Return the same record tagged with the URL it came from
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}
