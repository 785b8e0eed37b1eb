//! HTTP client for the Kagi search and summarizer APIs
//!
//! Calls `GET {base}/search` and `POST {base}/summarize`, authenticating
//! with the API key in an `Authorization: Bot {key}` header. The key never
//! appears in URLs or log output.

use reqwest::{header::AUTHORIZATION, Client, Response};
use serde_json::json;
use tracing::{debug, warn};

use super::config::{KagiConfig, SummarizerEngine};
use super::error::{KagiError, Result};
use super::types::*;

/// Authenticated client for the Kagi API.
///
/// Cloning is cheap (the inner `reqwest::Client` is shared) and the client
/// holds no mutable state, so concurrent calls are independent.
#[derive(Clone)]
pub struct KagiClient {
    client: Client,
    base_url: String,
    api_key: String,
    default_engine: SummarizerEngine,
}

impl KagiClient {
    /// Build a client from configuration. The per-call timeout is enforced
    /// by the underlying HTTP client, so no call can hang indefinitely.
    pub fn new(config: &KagiConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| KagiError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            default_engine: config.default_engine,
        })
    }

    /// Search the web via the Kagi Search API.
    ///
    /// Results come back in upstream order with 1-based ranks. An empty or
    /// whitespace-only query fails without touching the network.
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<SearchResultItem>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(KagiError::Validation(
                "search query must not be empty".to_string(),
            ));
        }

        debug!("Searching Kagi ({} char query)", query.len());

        let url = format!("{}/search", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth_header())
            .query(&[("q", query)]);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let response = request.send().await.map_err(KagiError::from_transport)?;
        let body: SearchResponse = self.handle_response(response).await?;

        Ok(body
            .results
            .into_iter()
            .enumerate()
            .map(|(i, record)| SearchResultItem {
                rank: i as u32 + 1,
                title: record.title,
                url: record.url,
                snippet: record.snippet,
                published: record.published,
            })
            .collect())
    }

    /// Summarize a URL or a raw text block via the Kagi Universal Summarizer.
    ///
    /// Engine resolution: the request's engine if given, else the
    /// configured default (which itself falls back to cecil).
    pub async fn summarize(&self, request: &SummarizeRequest) -> Result<SummaryResult> {
        let target = request.target.trim();
        if target.is_empty() {
            return Err(KagiError::Validation(
                "summarize target must not be empty".to_string(),
            ));
        }

        let engine = request.engine.unwrap_or(self.default_engine);
        let summary_type = request.summary_type.unwrap_or_default();

        debug!("Summarizing with engine '{}'", engine);

        let mut body = json!({
            "engine": engine.as_str(),
            "summary_type": summary_type.as_str(),
        });
        // URLs are summarized by reference, anything else as inline text
        if is_http_url(target) {
            body["url"] = json!(target);
        } else {
            body["text"] = json!(target);
        }
        if let Some(lang) = &request.target_language {
            body["target_language"] = json!(lang);
        }

        let url = format!("{}/summarize", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(KagiError::from_transport)?;

        let parsed: SummarizeResponse = self.handle_response(response).await?;

        Ok(SummaryResult {
            summary: parsed.data.output,
            engine,
        })
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.api_key)
    }

    /// Handle an HTTP response: deserialize JSON on success, extract an
    /// upstream error message (or fall back to a status-derived one) on
    /// failure.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                warn!("Kagi response violates the expected contract: {}", e);
                KagiError::Parse(format!("unexpected response body: {}", e))
            })
        } else {
            let status_code = status.as_u16();

            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body
                    .error
                    .into_iter()
                    .next()
                    .map(|detail| detail.msg)
                    .unwrap_or_else(|| format!("HTTP {}", status_code)),
                Err(_) => format!("HTTP {}", status_code),
            };

            Err(KagiError::Upstream {
                status: status_code,
                message,
            })
        }
    }
}

/// Whether a summarize target should be sent by reference (`url`) rather
/// than as inline text.
fn is_http_url(target: &str) -> bool {
    url::Url::parse(target)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
