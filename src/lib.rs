//! MCP server exposing Kagi web search and summarization as assistant tools.
//!
//! The adapter translates MCP tool-call requests into authenticated HTTP
//! calls against the Kagi API and renders the upstream JSON responses into
//! normalized, model-friendly text. Each invocation is stateless and
//! independent; nothing is cached or persisted across calls.

pub mod format;
pub mod kagi_client;
pub mod registry;
pub mod service;
pub mod types;

// Re-export important types for external use
pub use kagi_client::{KagiClient, KagiConfig, KagiError, SummarizerEngine};
pub use registry::{ToolError, ToolKind};
pub use service::KagiMcpService;
