//! Contract between the scraper and whatever scores its output.
//!
//! - `Analyzer` is implemented by scorers (the LLM-backed one lives outside
//!   this crate)
//! - `report` recovers an `AuditReport` from loosely formatted generated text
//! - `preview` is a cheap rule-based analyzer that needs no network access

pub mod preview;
pub mod report;

use crate::errors::AnalysisError;
use crate::results::ScrapedPage;
use serde::{Deserialize, Serialize};
use std::future::Future;

pub use preview::{Impact, Preview, PreviewAnalyzer, PreviewIssue};
pub use report::parse_report;

/// Turns scraped signals into a report
pub trait Analyzer {
    fn analyze(
        &self,
        page: &ScrapedPage,
    ) -> impl Future<Output = Result<AuditReport, AnalysisError>> + Send;
}

/// One finding in an audit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditItem {
    pub category: String,
    /// Verdict marker, e.g. "✅", "⚠️" or "❌"
    pub status: String,
    pub analysis: String,
    pub fix: String,
    pub why: String,
}

/// Scored critique of a page
///
/// Fields missing from generated output fall back to their defaults, and
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditReport {
    /// 0 to 10
    pub score: f64,
    pub summary: String,
    pub audit_items: Vec<AuditItem>,
    pub quick_wins: Vec<String>,
    pub roadmap_to_100: Roadmap,
    pub seo_analysis: SeoAnalysis,
    pub competitor_analysis: Vec<CompetitorInsight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapPhase {
    pub title: String,
    pub tasks: Vec<String>,
}

/// Three-phase plan towards a perfect score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Roadmap {
    pub phase_1: RoadmapPhase,
    pub phase_2: RoadmapPhase,
    pub phase_3: RoadmapPhase,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    pub term: String,
    /// Search intent, e.g. "transactional"
    pub intent: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoAnalysis {
    /// 0 to 10
    pub score: f64,
    pub diagnosis: String,
    pub keywords: Vec<Keyword>,
    pub fixes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorInsight {
    pub competitor: String,
    pub what_they_do_better: String,
    pub how_to_apply: String,
}
