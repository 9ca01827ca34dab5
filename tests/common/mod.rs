use page_signals::{FetchConfig, ScraperConfig};

pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Short timeouts so retry paths finish quickly
pub fn fast_config() -> ScraperConfig {
    ScraperConfig {
        fetch: FetchConfig {
            timeout_ms: 300,
            retry_delay_ms: 50,
            ..FetchConfig::default()
        },
        ..ScraperConfig::default()
    }
}
