use crate::config::FetchConfig;
use crate::errors::ScrapeError;
use crate::utils::{normalize_url, validate_url};
use reqwest::{Client, redirect::Policy};
use std::error::Error as StdError;
use std::io::ErrorKind;
use url::Url;

/// Raw response body for a fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Normalized URL that was requested
    pub url: String,

    /// HTTP status of the final response
    pub status: u16,

    /// Response body decoded as text
    pub body: String,
}

/// How a single attempt failed
#[derive(Debug)]
enum AttemptFailure {
    Timeout,
    Unreachable,
    Failed(String),
}

/// Fetches pages over HTTP with a per-attempt timeout and retry on timeout
///
/// Holds no per-request state, so one instance can be cloned and shared
/// between concurrent tasks.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    /// Build a fetcher and its underlying HTTP client
    pub fn new(config: FetchConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| ScrapeError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Fetch the page at `input`, adding `https://` when no scheme is given
    pub async fn fetch(&self, input: &str) -> Result<FetchedPage, ScrapeError> {
        let target = validate_url(input)?;
        let url = normalize_url(input);
        let max_attempts = self.config.max_attempts();

        ::log::info!("Fetching {}", url);

        let mut attempt = 1;
        loop {
            ::log::debug!("Attempt {}/{} for {}", attempt, max_attempts, url);

            match self.attempt(&target).await {
                Ok((status, body)) => {
                    ::log::debug!("Fetched {} bytes from {} ({})", body.len(), url, status);
                    return Ok(FetchedPage { url, status, body });
                }
                Err(AttemptFailure::Timeout) if attempt < max_attempts => {
                    ::log::warn!(
                        "Timed out fetching {}, retrying ({}/{})",
                        url,
                        attempt,
                        self.config.max_retries
                    );
                    tokio::time::sleep(self.config.retry_delay()).await;
                    attempt += 1;
                }
                Err(failure) => {
                    let err = into_scrape_error(failure, url, attempt);
                    ::log::error!("{}", err);
                    return Err(err);
                }
            }
        }
    }

    /// One GET request, status check and body read
    async fn attempt(&self, target: &Url) -> Result<(u16, String), AttemptFailure> {
        let response = self
            .client
            .get(target.clone())
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptFailure::Failed(format!("HTTP status {}", status)));
        }

        let body = response.text().await.map_err(classify)?;
        Ok((status.as_u16(), body))
    }
}

fn into_scrape_error(failure: AttemptFailure, url: String, attempts: usize) -> ScrapeError {
    match failure {
        AttemptFailure::Timeout => ScrapeError::Timeout { url, attempts },
        AttemptFailure::Unreachable => ScrapeError::UnreachableHost { url },
        AttemptFailure::Failed(message) => ScrapeError::ScrapeFailed { url, message },
    }
}

/// Sorts a transport error into timeout, unreachable host, or anything else
fn classify(err: reqwest::Error) -> AttemptFailure {
    if err.is_timeout() {
        AttemptFailure::Timeout
    } else if err.is_connect() && is_unreachable(&err) {
        AttemptFailure::Unreachable
    } else {
        AttemptFailure::Failed(describe(&err))
    }
}

/// True for DNS resolution failures and refused or unroutable connections.
/// TLS handshake errors are also connect errors but are not matched here.
fn is_unreachable(err: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if matches!(
                io.kind(),
                ErrorKind::ConnectionRefused
                    | ErrorKind::HostUnreachable
                    | ErrorKind::NetworkUnreachable
                    | ErrorKind::AddrNotAvailable
            ) {
                return true;
            }
        }

        // Resolver failures only surface as text: hyper-util's "dns error",
        // getaddrinfo's "failed to lookup address information: Name or
        // service not known", and "no such host" from Windows resolvers
        let msg = cause.to_string().to_ascii_lowercase();
        if msg.contains("dns error")
            || msg.contains("failed to lookup address")
            || msg.contains("name or service not known")
            || msg.contains("no such host")
        {
            return true;
        }

        source = cause.source();
    }
    false
}

/// Error text including its causes, for diagnostics
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
