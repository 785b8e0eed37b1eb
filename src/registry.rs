//! Tool declarations and argument validation
//!
//! The two tools are declared once as static parameter tables and exposed
//! in a fixed, stable order. Validation checks every declared parameter
//! and collects all violations into a single error, so a caller sees the
//! complete problem rather than the first field that happened to fail.

use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::kagi_client::KagiError;

/// Errors surfaced by tool invocation, before or after the network call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Requested tool name is not in the registry
    #[error("UnknownToolError: no tool named '{0}'")]
    UnknownTool(String),

    /// Arguments failed schema validation; the message lists every violation
    #[error("ValidationError: {0}")]
    Validation(String),

    /// Failure from the upstream API client
    #[error(transparent)]
    Client(#[from] KagiError),
}

/// JSON primitive types the tool schemas declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
}

impl ParamType {
    fn as_str(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Integer => value.is_i64() || value.is_u64(),
        }
    }
}

/// One declared tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub param_type: ParamType,
    pub required: bool,
    pub description: &'static str,
}

/// A tool's name, description, and parameter table. Declared once at
/// start-up; immutable.
#[derive(Debug, Clone, Copy)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

impl ToolDefinition {
    /// Render the parameter table as a JSON Schema object for `tools/list`.
    pub fn input_schema(&self) -> Map<String, Value> {
        let properties = self
            .params
            .iter()
            .fold(Map::new(), |mut map, param| {
                map.insert(
                    param.name.to_string(),
                    json!({
                        "type": param.param_type.as_str(),
                        "description": param.description,
                    }),
                );
                map
            });

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));

        let required: Vec<_> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }

        schema
    }

    /// Validate an argument map against the parameter table.
    ///
    /// Checks presence of required parameters and primitive type matches,
    /// collecting every violation before failing. A JSON null counts as an
    /// absent value. No network call happens until this passes.
    pub fn validate(&self, args: &Map<String, Value>) -> Result<(), ToolError> {
        let mut violations = Vec::new();

        for spec in self.params {
            match args.get(spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        violations.push(format!("missing required parameter '{}'", spec.name));
                    }
                }
                Some(value) if !spec.param_type.matches(value) => {
                    violations.push(format!(
                        "parameter '{}' must be of type {}, got {}",
                        spec.name,
                        spec.param_type.as_str(),
                        json_type_name(value)
                    ));
                }
                Some(_) => {}
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ToolError::Validation(violations.join("; ")))
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

static SEARCH_TOOL: ToolDefinition = ToolDefinition {
    name: "search",
    description: "Fetch web results for a query using the Kagi Search API. \
                  Results are numbered so that specific results can be referred to by number.",
    params: &[
        ParamSpec {
            name: "query",
            param_type: ParamType::String,
            required: true,
            description: "Concise, keyword-focused search query. Include essential context \
                          within the query for standalone use.",
        },
        ParamSpec {
            name: "limit",
            param_type: ParamType::Integer,
            required: false,
            description: "Maximum number of results to return.",
        },
    ],
};

static SUMMARIZE_TOOL: ToolDefinition = ToolDefinition {
    name: "summarize",
    description: "Summarize content from a URL or a raw text block using the Kagi Universal \
                  Summarizer. Handles any document type (text webpage, video, audio, etc.).",
    params: &[
        ParamSpec {
            name: "target",
            param_type: ParamType::String,
            required: true,
            description: "A URL to a document, or a block of raw text, to summarize.",
        },
        ParamSpec {
            name: "engine",
            param_type: ParamType::String,
            required: false,
            description: "Summarization engine: cecil, agnes, daphne, or muriel. \
                          Defaults to the configured engine.",
        },
        ParamSpec {
            name: "summary_type",
            param_type: ParamType::String,
            required: false,
            description: "Type of summary: 'summary' for paragraph prose, 'takeaway' for a \
                          bulleted list of key points.",
        },
        ParamSpec {
            name: "target_language",
            param_type: ParamType::String,
            required: false,
            description: "Desired output language code (e.g. 'EN' for English).",
        },
    ],
};

/// The fixed set of tools, as a tagged dispatch target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Search,
    Summarize,
}

impl ToolKind {
    /// All tools in their stable listing order: search, then summarize.
    pub const ALL: [ToolKind; 2] = [ToolKind::Search, ToolKind::Summarize];

    /// Look up a tool by its declared name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "search" => Some(ToolKind::Search),
            "summarize" => Some(ToolKind::Summarize),
            _ => None,
        }
    }

    pub fn definition(self) -> &'static ToolDefinition {
        match self {
            ToolKind::Search => &SEARCH_TOOL,
            ToolKind::Summarize => &SUMMARIZE_TOOL,
        }
    }
}
