use clap::Parser;
use page_signals::ScraperConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-signals")]
#[command(about = "Fetch a web page and print its conversion signals as JSON")]
#[command(version)]
pub struct Args {
    /// Website to scrape (https:// is assumed when no scheme is given)
    pub url: String,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the per-attempt timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Override the number of retries on timeout
    #[arg(short, long)]
    pub retries: Option<usize>,

    /// Override the User-Agent header
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Also run the rule-based preview analysis
    #[arg(long)]
    pub preview: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, mut config: ScraperConfig) -> ScraperConfig {
        if let Some(secs) = self.timeout {
            config.fetch.timeout_ms = secs.saturating_mul(1000);
        }
        if let Some(retries) = self.retries {
            config.fetch.max_retries = retries;
        }
        if let Some(ua) = &self.user_agent {
            config.fetch.user_agent = ua.clone();
        }
        config
    }
}
