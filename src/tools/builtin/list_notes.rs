use crate::notes::render::{self, NoteOp};
use crate::tools::registry::Tool;
use crate::tools::types::{ToolContext, ToolDefinition, ToolInputSchema, ToolResult};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;

/// List notes tool - enumerates the notes folder, no arguments
pub struct ListNotesTool {
    definition: ToolDefinition,
}

impl ListNotesTool {
    pub fn new() -> Self {
        ListNotesTool {
            definition: ToolDefinition {
                name: "list_notes".to_string(),
                description: "List all existing notes in the notes folder.".to_string(),
                input_schema: ToolInputSchema {
                    schema_type: "object".to_string(),
                    properties: HashMap::new(),
                    required: vec![],
                },
            },
        }
    }
}

impl Default for ListNotesTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ListNotesTool {
    fn definition(&self) -> ToolDefinition {
        self.definition.clone()
    }

    async fn execute(&self, _params: Value, context: &ToolContext) -> ToolResult {
        let store = context.notes.clone();
        match context.file_ops.run(move || store.list()).await {
            Ok(Ok(names)) => ToolResult::success(render::describe_list(&names))
                .with_metadata(json!({ "count": names.len() })),
            Ok(Err(e)) => ToolResult::error(render::describe_error(NoteOp::List, &e)),
            Err(e) => ToolResult::error(format!("Error: {}", e)),
        }
    }
}
