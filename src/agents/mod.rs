//! Orchestration boundary.
//!
//! The serving layer hands a prompt to whatever [`AgentRunner`] is
//! configured and returns the answer verbatim, subject to the response cap.
//! The shipped [`ToolCallRunner`] executes prompts that are literal JSON
//! tool invocations; a natural-language agent plugs in behind the same
//! trait without touching the store or the serving layer.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::tools::{ToolContext, ToolRegistry};

#[async_trait]
pub trait AgentRunner: Send + Sync {
    /// Process one prompt to completion. Failures come back as descriptive
    /// text, never as a panic or a structured error.
    async fn run(&self, prompt: &str) -> String;
}

/// Structured invocation accepted by [`ToolCallRunner`].
#[derive(Debug, Deserialize)]
struct ToolCall {
    tool: String,
    #[serde(default)]
    arguments: Value,
}

/// Degenerate orchestrator: the prompt is the tool call. Keeps the serving
/// contract exercisable end to end without a language model in the loop.
pub struct ToolCallRunner {
    registry: Arc<ToolRegistry>,
    context: ToolContext,
}

impl ToolCallRunner {
    pub fn new(registry: Arc<ToolRegistry>, context: ToolContext) -> Self {
        ToolCallRunner { registry, context }
    }
}

#[async_trait]
impl AgentRunner for ToolCallRunner {
    async fn run(&self, prompt: &str) -> String {
        let call: ToolCall = match serde_json::from_str(prompt) {
            Ok(c) => c,
            Err(_) => {
                return "Error: expected a JSON tool call like {\"tool\": \"list_notes\", \"arguments\": {}}."
                    .to_string();
            }
        };

        let arguments = if call.arguments.is_null() {
            json!({})
        } else {
            call.arguments
        };

        log::debug!("[AGENT] dispatching tool '{}'", call.tool);
        self.registry
            .execute(&call.tool, arguments, &self.context)
            .await
            .into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::FileOpPool;
    use crate::notes::NoteStore;
    use tempfile::tempdir;

    fn runner(root: &std::path::Path) -> ToolCallRunner {
        let context = ToolContext::new(
            Arc::new(NoteStore::new(root).unwrap()),
            Arc::new(FileOpPool::new(2, 8)),
        );
        ToolCallRunner::new(Arc::new(ToolRegistry::with_builtin_tools()), context)
    }

    #[tokio::test]
    async fn test_runs_tool_call_prompt() {
        let dir = tempdir().unwrap();
        let runner = runner(dir.path());

        let response = runner
            .run(r#"{"tool": "write_note", "arguments": {"filename": "x.txt", "content": "hello"}}"#)
            .await;
        assert_eq!(response, "Successfully wrote 5 characters to 'x.txt'.");

        let response = runner
            .run(r#"{"tool": "read_note", "arguments": {"filename": "x.txt"}}"#)
            .await;
        assert_eq!(response, "Contents of 'x.txt':\n\nhello");
    }

    #[tokio::test]
    async fn test_arguments_default_to_empty_object() {
        let dir = tempdir().unwrap();
        let response = runner(dir.path()).run(r#"{"tool": "list_notes"}"#).await;
        assert_eq!(response, "No notes found. The notes folder is empty.");
    }

    #[tokio::test]
    async fn test_non_json_prompt_is_rejected_with_hint() {
        let dir = tempdir().unwrap();
        let response = runner(dir.path()).run("please list my notes").await;
        assert!(response.starts_with("Error: expected a JSON tool call"));
    }

    #[tokio::test]
    async fn test_unknown_tool_surfaces_as_text() {
        let dir = tempdir().unwrap();
        let response = runner(dir.path()).run(r#"{"tool": "rm_rf"}"#).await;
        assert!(response.contains("Unknown tool: 'rm_rf'"));
    }
}
