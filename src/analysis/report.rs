use crate::analysis::AuditReport;
use crate::errors::AnalysisError;
use regex::Regex;
use std::sync::LazyLock;

static CONTROL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{0000}-\x{001F}\x{007F}-\x{009F}]").expect("control character pattern")
});

/// Recover an `AuditReport` from generated text
///
/// Generators wrap JSON in markdown fences, add chatter around it, or emit raw
/// control characters inside strings. Each of those is peeled off in turn
/// before giving up.
pub fn parse_report(text: &str) -> Result<AuditReport, AnalysisError> {
    let cleaned = strip_code_fence(text.trim());

    let first_err = match serde_json::from_str::<AuditReport>(cleaned) {
        Ok(report) => return Ok(report),
        Err(e) => e,
    };

    let Some(sliced) = outer_object(cleaned) else {
        ::log::error!("Report is not JSON: {}", first_err);
        return Err(AnalysisError::InvalidReport(first_err.to_string()));
    };

    if let Ok(report) = serde_json::from_str::<AuditReport>(sliced) {
        ::log::debug!("Recovered report by slicing the outer JSON object");
        return Ok(report);
    }

    let stripped = CONTROL_CHARS.replace_all(sliced, "");
    serde_json::from_str::<AuditReport>(&stripped).map_err(|e| {
        ::log::error!("Report JSON could not be recovered: {}", e);
        AnalysisError::InvalidReport(e.to_string())
    })
}

/// Contents of the first fenced block, preferring a ```json fence
fn strip_code_fence(text: &str) -> &str {
    let body = if let Some((_, rest)) = text.split_once("```json") {
        rest
    } else if let Some((_, rest)) = text.split_once("```") {
        rest
    } else {
        return text;
    };

    body.split("```").next().unwrap_or(body).trim()
}

/// Slice from the first `{` to the last `}`
fn outer_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}
