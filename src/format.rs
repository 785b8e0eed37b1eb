//! Rendering of typed results into model-readable text
//!
//! Formatting needs to suit both LLM and human parsing: search results are
//! numbered so a result can be referred to by its rank, and summaries carry
//! an attribution line naming the engine that produced them.

use crate::kagi_client::{SearchResultItem, SummaryResult};

/// Render search results as a numbered list, one block per result:
///
/// ```text
/// 1. Title — https://example.com
///    snippet text
/// ```
///
/// Upstream order is preserved; a `Published:` line is appended only when
/// upstream supplied a publication date.
pub fn format_search_results(results: &[SearchResultItem]) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }

    results
        .iter()
        .map(|result| {
            let mut block = format!(
                "{}. {} — {}\n   {}",
                result.rank, result.title, result.url, result.snippet
            );
            if let Some(published) = &result.published {
                block.push_str("\n   Published: ");
                block.push_str(published);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render a summary followed by its engine attribution line.
pub fn format_summary(result: &SummaryResult) -> String {
    format!(
        "{}\n\nSummarized by engine: {}",
        result.summary, result.engine
    )
}
