//! Fetch a web page and reduce it to a small, bounded record of conversion
//! signals: title, headline, subheadings, meta description, call-to-action
//! labels and body text.
//!
//! ```no_run
//! # async fn demo() -> Result<(), page_signals::ScrapeError> {
//! let scraper = page_signals::Scraper::new(Default::default())?;
//! let page = scraper.scrape("example.com").await?;
//! println!("{}", page.h1);
//! # Ok(()) }
//! ```

pub mod analysis;
pub mod config;
pub mod crawlers;
pub mod errors;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ExtractConfig, FetchConfig, ScraperConfig};
pub use errors::{AnalysisError, ScrapeError};
pub use results::ScrapedPage;

use crawlers::{FetchedPage, Fetcher};

/// Fetch-then-extract pipeline
///
/// Cheap to clone; clones share one HTTP connection pool. Calls are independent
/// of each other.
#[derive(Debug, Clone)]
pub struct Scraper {
    fetcher: Fetcher,
    limits: ExtractConfig,
}

impl Scraper {
    /// Create a scraper from configuration
    pub fn new(config: ScraperConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher: Fetcher::new(config.fetch)?,
            limits: config.extract,
        })
    }

    /// Load configuration from a JSON file and create a scraper
    pub fn from_config_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ScraperConfig::from_file(path)?;
        Ok(Self::new(config)?)
    }

    /// Fetch only, returning the raw markup
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, ScrapeError> {
        self.fetcher.fetch(url).await
    }

    /// Extract only, from markup already in hand
    pub fn extract(&self, html: &str) -> ScrapedPage {
        parsers::extract_with_limits(html, &self.limits)
    }

    /// Fetch `url` and extract its signals
    pub async fn scrape(&self, url: &str) -> Result<ScrapedPage, ScrapeError> {
        let fetched = self.fetch(url).await?;
        let page = self.extract(&fetched.body).with_url(fetched.url);
        ::log::info!(
            "Scraped {}: h1={:?}, {} CTAs",
            page.url,
            page.h1,
            page.cta_texts.len()
        );
        Ok(page)
    }
}
