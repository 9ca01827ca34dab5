use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Per-attempt request timeout, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Extra attempts after the first one, for timeouts only
pub const DEFAULT_MAX_RETRIES: usize = 2;

/// Fixed pause between attempts, in milliseconds
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Identifies the crawler honestly so sites can recognise (or block) it
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; ConversionBot/1.0)";

pub const DEFAULT_MAX_H2: usize = 5;
pub const DEFAULT_MAX_CTAS: usize = 10;
pub const DEFAULT_MAX_MAIN_TEXT_CHARS: usize = 3000;

/// Settings for the network side of a scrape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Timeout for a single attempt
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries on timeout (total attempts = max_retries + 1)
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Delay between attempts
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Maximum number of redirect hops to follow
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Truncation limits applied while building a `ScrapedPage`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default = "default_max_h2")]
    pub max_h2: usize,

    #[serde(default = "default_max_ctas")]
    pub max_ctas: usize,

    /// Limit in characters, not bytes
    #[serde(default = "default_max_main_text_chars")]
    pub max_main_text_chars: usize,
}

/// Top-level configuration for the scraper pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScraperConfig {
    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub extract: ExtractConfig,
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Total number of attempts a single fetch may make
    pub fn max_attempts(&self) -> usize {
        self.max_retries.saturating_add(1)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_h2: default_max_h2(),
            max_ctas: default_max_ctas(),
            max_main_text_chars: default_max_main_text_chars(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_max_retries() -> usize {
    DEFAULT_MAX_RETRIES
}

fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY_MS
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_h2() -> usize {
    DEFAULT_MAX_H2
}

fn default_max_ctas() -> usize {
    DEFAULT_MAX_CTAS
}

fn default_max_main_text_chars() -> usize {
    DEFAULT_MAX_MAIN_TEXT_CHARS
}
