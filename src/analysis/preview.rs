use crate::analysis::{Analyzer, AuditItem, AuditReport};
use crate::errors::AnalysisError;
use crate::results::ScrapedPage;
use serde::{Deserialize, Serialize};

/// Points deducted from 100 for each issue found
pub const PENALTY_PER_ISSUE: u32 = 20;

/// Issues shown in a preview
pub const MAX_PREVIEW_ISSUES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewIssue {
    pub category: String,
    pub issue: String,
    pub impact: Impact,
}

/// Rule-based teaser score, 0 to 100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub score: u32,
    pub issues: Vec<PreviewIssue>,
}

/// Scores a page from the presence of a headline, CTAs and a meta description
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewAnalyzer;

impl PreviewAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn preview(&self, page: &ScrapedPage) -> Preview {
        let mut issues = Vec::new();

        if page.h1.is_empty() {
            issues.push(issue(
                "Above-the-Fold Clarity",
                "Missing or weak H1 headline",
                Impact::High,
            ));
        }
        if page.cta_texts.is_empty() {
            issues.push(issue(
                "CTA Engineering",
                "No clear call-to-action buttons found",
                Impact::Critical,
            ));
        }
        if page.meta_description.is_empty() {
            issues.push(issue(
                "SEO & Trust",
                "Missing meta description",
                Impact::Medium,
            ));
        }

        let penalty = PENALTY_PER_ISSUE.saturating_mul(issues.len() as u32);
        let score = 100u32.saturating_sub(penalty);
        issues.truncate(MAX_PREVIEW_ISSUES);

        ::log::debug!("Preview for {}: score {}, {} issues", page.url, score, issues.len());
        Preview { score, issues }
    }
}

impl Analyzer for PreviewAnalyzer {
    async fn analyze(&self, page: &ScrapedPage) -> Result<AuditReport, AnalysisError> {
        let preview = self.preview(page);

        let audit_items = preview
            .issues
            .iter()
            .map(|i| AuditItem {
                category: i.category.clone(),
                status: match i.impact {
                    Impact::Critical | Impact::High => "❌".to_string(),
                    Impact::Medium => "⚠️".to_string(),
                },
                analysis: i.issue.clone(),
                fix: fix_for(&i.category).to_string(),
                why: String::new(),
            })
            .collect::<Vec<_>>();

        let summary = if audit_items.is_empty() {
            "No structural problems found in the preview checks.".to_string()
        } else {
            format!("{} structural problems found in the preview checks.", audit_items.len())
        };

        Ok(AuditReport {
            score: f64::from(preview.score) / 10.0,
            summary,
            quick_wins: audit_items.iter().map(|i| i.fix.clone()).collect(),
            audit_items,
            ..AuditReport::default()
        })
    }
}

fn issue(category: &str, text: &str, impact: Impact) -> PreviewIssue {
    PreviewIssue {
        category: category.to_string(),
        issue: text.to_string(),
        impact,
    }
}

fn fix_for(category: &str) -> &'static str {
    match category {
        "Above-the-Fold Clarity" => "Add one outcome-focused H1 headline above the fold.",
        "CTA Engineering" => "Add a primary button with a value-driven label.",
        "SEO & Trust" => "Write a meta description that states the offer in one sentence.",
        _ => "",
    }
}
