//! Shared tool types — the definitions an orchestrator reads and the results
//! it gets back.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::dispatch::FileOpPool;
use crate::notes::NoteStore;

/// JSON-schema property for a single tool argument.
#[derive(Debug, Clone, Serialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolInputSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub properties: HashMap<String, PropertySchema>,
    pub required: Vec<String>,
}

/// Declared surface of one tool: name, purpose, and argument shape. This is
/// the contract the orchestration layer uses to decide invocations.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: ToolInputSchema,
}

/// Outcome of a tool execution.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub success: bool,
    pub output: Option<String>,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl ToolResult {
    pub fn success(output: impl Into<String>) -> Self {
        ToolResult {
            success: true,
            output: Some(output.into()),
            error: None,
            metadata: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ToolResult {
            success: false,
            output: None,
            error: Some(message.into()),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Flatten to the single string the agent layer consumes.
    pub fn into_text(self) -> String {
        match (self.error, self.output) {
            (Some(error), _) => error,
            (None, Some(output)) => output,
            (None, None) => String::new(),
        }
    }
}

/// Shared handles every tool executes against.
#[derive(Clone)]
pub struct ToolContext {
    pub notes: Arc<NoteStore>,
    pub file_ops: Arc<FileOpPool>,
}

impl ToolContext {
    pub fn new(notes: Arc<NoteStore>, file_ops: Arc<FileOpPool>) -> Self {
        ToolContext { notes, file_ops }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_result_into_text_prefers_error() {
        assert_eq!(ToolResult::success("ok").into_text(), "ok");
        assert_eq!(ToolResult::error("bad").into_text(), "bad");
    }

    #[test]
    fn test_tool_result_serializes_without_empty_metadata() {
        let plain = serde_json::to_value(ToolResult::success("ok")).unwrap();
        assert_eq!(plain.get("metadata"), None);

        let tagged =
            serde_json::to_value(ToolResult::success("ok").with_metadata(json!({"k": 1}))).unwrap();
        assert_eq!(tagged["metadata"]["k"], 1);
    }
}
