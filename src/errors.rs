use thiserror::Error;

/// Failures raised while fetching a page
///
/// Extraction never fails, so every variant here comes from URL validation or
/// the network stage.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("failed to scrape {url}: website not found or unreachable, please check the URL")]
    UnreachableHost { url: String },

    #[error(
        "failed to scrape {url}: connection timed out after {attempts} attempts, the website took too long to respond"
    )]
    Timeout { url: String, attempts: usize },

    #[error("failed to scrape {url}: {message}")]
    ScrapeFailed { url: String, message: String },

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

impl ScrapeError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ScrapeError::Timeout { .. })
    }

    /// True when the problem lies with the URL the caller supplied
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            ScrapeError::InvalidUrl(_) | ScrapeError::UnreachableHost { .. }
        )
    }

    /// URL the failure relates to, when one was resolved
    pub fn url(&self) -> Option<&str> {
        match self {
            ScrapeError::UnreachableHost { url }
            | ScrapeError::Timeout { url, .. }
            | ScrapeError::ScrapeFailed { url, .. } => Some(url),
            ScrapeError::InvalidUrl(_) | ScrapeError::Client(_) => None,
        }
    }
}

/// Failures raised by an analyzer
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analyzer returned invalid JSON format: {0}")]
    InvalidReport(String),

    #[error("analysis failed upstream: {0}")]
    Upstream(String),
}
