//! Domain and wire types for the Kagi API

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::SummarizerEngine;

/// One ranked web search result.
///
/// Rank is 1-based and assigned in upstream payload order; the order is
/// significant and never re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub rank: u32,
    pub title: String,
    pub url: String,
    pub snippet: String,
    /// Publication date, when upstream provides one
    pub published: Option<String>,
}

/// The kind of summary to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryType {
    /// Paragraph prose (the default)
    Summary,
    /// Bulleted list of key points
    Takeaway,
}

impl SummaryType {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(SummaryType::Summary),
            "takeaway" => Ok(SummaryType::Takeaway),
            _ => Err(format!(
                "invalid summary type '{}'; must be 'summary' or 'takeaway'",
                s
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SummaryType::Summary => "summary",
            SummaryType::Takeaway => "takeaway",
        }
    }
}

impl Default for SummaryType {
    fn default() -> Self {
        SummaryType::Summary
    }
}

impl fmt::Display for SummaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single summarization request.
///
/// `target` is either a URL to a document or a raw text block; the client
/// decides which form to send upstream. Created per invocation and
/// discarded when the call completes.
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    pub target: String,
    /// Engine override; the configured default applies when absent
    pub engine: Option<SummarizerEngine>,
    pub summary_type: Option<SummaryType>,
    /// Output language code (e.g. "EN")
    pub target_language: Option<String>,
}

impl SummarizeRequest {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            engine: None,
            summary_type: None,
            target_language: None,
        }
    }
}

/// A completed summary together with the engine that produced it.
#[derive(Debug, Clone)]
pub struct SummaryResult {
    pub summary: String,
    pub engine: SummarizerEngine,
}

// ===== Wire types =====

/// Search endpoint response body: a `results` array in ranked order
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub results: Vec<SearchRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchRecord {
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(default)]
    pub published: Option<String>,
}

/// Summarizer endpoint response body: the summary under `data.output`
#[derive(Debug, Deserialize)]
pub(crate) struct SummarizeResponse {
    pub data: SummarizeData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummarizeData {
    pub output: String,
}

/// Error body shape: `{"error": [{"code": ..., "msg": ...}]}`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub msg: String,
}
