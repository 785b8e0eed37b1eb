//! Authenticated HTTP client for the Kagi search and summarizer APIs

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::KagiClient;
pub use config::{KagiConfig, SummarizerEngine};
pub use error::{KagiError, Result};
pub use types::{SearchResultItem, SummarizeRequest, SummaryResult, SummaryType};
