use crate::notes::render::{self, NoteOp};
use crate::tools::registry::Tool;
use crate::tools::types::{
    PropertySchema, ToolContext, ToolDefinition, ToolInputSchema, ToolResult,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Read note tool - returns the full text content of a note
pub struct ReadNoteTool {
    definition: ToolDefinition,
}

impl ReadNoteTool {
    pub fn new() -> Self {
        let mut properties = HashMap::new();
        properties.insert(
            "filename".to_string(),
            PropertySchema {
                schema_type: "string".to_string(),
                description:
                    "The name of the note file (e.g. 'mynote.txt'). Must be a simple filename without paths."
                        .to_string(),
            },
        );

        ReadNoteTool {
            definition: ToolDefinition {
                name: "read_note".to_string(),
                description: "Read the contents of a note file.".to_string(),
                input_schema: ToolInputSchema {
                    schema_type: "object".to_string(),
                    properties,
                    required: vec!["filename".to_string()],
                },
            },
        }
    }
}

impl Default for ReadNoteTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct ReadNoteParams {
    filename: String,
}

#[async_trait]
impl Tool for ReadNoteTool {
    fn definition(&self) -> ToolDefinition {
        self.definition.clone()
    }

    async fn execute(&self, params: Value, context: &ToolContext) -> ToolResult {
        let params: ReadNoteParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => return ToolResult::error(format!("Invalid parameters: {}", e)),
        };

        let store = context.notes.clone();
        let name = params.filename.clone();
        match context.file_ops.run(move || store.read(&name)).await {
            Ok(Ok(outcome)) => ToolResult::success(render::describe_read(&params.filename, &outcome))
                .with_metadata(json!({ "filename": params.filename })),
            Ok(Err(e)) => ToolResult::error(render::describe_error(NoteOp::Read, &e)),
            Err(e) => ToolResult::error(format!("Error: {}", e)),
        }
    }
}
