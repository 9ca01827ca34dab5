use crate::errors::ScrapeError;
use url::Url;

/// Shortest input accepted as a website address
pub const MIN_URL_LEN: usize = 3;

/// Prefix `https://` unless the input already carries an http(s) scheme
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

fn has_http_scheme(s: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        s.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Normalize a user-supplied address and check that it names a host
pub fn validate_url(input: &str) -> Result<Url, ScrapeError> {
    let trimmed = input.trim();
    if trimmed.chars().count() < MIN_URL_LEN {
        return Err(ScrapeError::InvalidUrl(format!(
            "'{}' is too short to be a URL",
            trimmed
        )));
    }

    let normalized = normalize_url(trimmed);
    let url = Url::parse(&normalized)
        .map_err(|e| ScrapeError::InvalidUrl(format!("{}: {}", normalized, e)))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(ScrapeError::InvalidUrl(format!("{} has no host", normalized))),
    }
}
