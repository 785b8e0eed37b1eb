// src/types.rs

//! Typed parameter structs for the declared tools
//!
//! Deserialized from the argument map after schema validation has passed,
//! so the conversions here are expected to succeed; any residual mismatch
//! is still reported as a validation failure, never a panic.

use serde::Deserialize;

/// Arguments for the `search` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Arguments for the `summarize` tool.
///
/// `engine` and `summary_type` arrive as plain strings and are parsed into
/// their enums at dispatch time so that bad values produce a validation
/// error naming the allowed set.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeParams {
    pub target: String,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub summary_type: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
}
