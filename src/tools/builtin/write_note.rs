use crate::notes::render::{self, NoteOp};
use crate::tools::registry::Tool;
use crate::tools::types::{
    PropertySchema, ToolContext, ToolDefinition, ToolInputSchema, ToolResult,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Write note tool - full overwrite, creating the note if absent
pub struct WriteNoteTool {
    definition: ToolDefinition,
}

impl WriteNoteTool {
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
        properties.insert(
            "content".to_string(),
            PropertySchema {
                schema_type: "string".to_string(),
                description: "The content to write to the file.".to_string(),
            },
        );

        WriteNoteTool {
            definition: ToolDefinition {
                name: "write_note".to_string(),
                description: "Write content to a note file. This will overwrite the file if it exists."
                    .to_string(),
                input_schema: ToolInputSchema {
                    schema_type: "object".to_string(),
                    properties,
                    required: vec!["filename".to_string(), "content".to_string()],
                },
            },
        }
    }
}

impl Default for WriteNoteTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct WriteNoteParams {
    filename: String,
    content: String,
}

#[async_trait]
impl Tool for WriteNoteTool {
    fn definition(&self) -> ToolDefinition {
        self.definition.clone()
    }

    async fn execute(&self, params: Value, context: &ToolContext) -> ToolResult {
        let params: WriteNoteParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => return ToolResult::error(format!("Invalid parameters: {}", e)),
        };

        let store = context.notes.clone();
        let name = params.filename.clone();
        let content = params.content;
        match context.file_ops.run(move || store.write(&name, &content)).await {
            Ok(Ok(chars)) => ToolResult::success(render::describe_write(&params.filename, chars))
                .with_metadata(json!({
                    "filename": params.filename,
                    "characters": chars,
                })),
            Ok(Err(e)) => ToolResult::error(render::describe_error(NoteOp::Write, &e)),
            Err(e) => ToolResult::error(format!("Error: {}", e)),
        }
    }
}
