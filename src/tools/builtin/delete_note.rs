use crate::notes::render::{self, NoteOp};
use crate::tools::registry::Tool;
use crate::tools::types::{
    PropertySchema, ToolContext, ToolDefinition, ToolInputSchema, ToolResult,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Delete note tool - the file must exist, non-existence is reported
pub struct DeleteNoteTool {
    definition: ToolDefinition,
}

impl DeleteNoteTool {
    pub fn new() -> Self {
        let mut properties = HashMap::new();
        properties.insert(
            "filename".to_string(),
            PropertySchema {
                schema_type: "string".to_string(),
                description:
                    "The name of the note file to delete (e.g. 'mynote.txt'). Must be a simple filename without paths."
                        .to_string(),
            },
        );

        DeleteNoteTool {
            definition: ToolDefinition {
                name: "delete_note".to_string(),
                description: "Delete a note file. The file must exist in the notes folder."
                    .to_string(),
                input_schema: ToolInputSchema {
                    schema_type: "object".to_string(),
                    properties,
                    required: vec!["filename".to_string()],
                },
            },
        }
    }
}

impl Default for DeleteNoteTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct DeleteNoteParams {
    filename: String,
}

#[async_trait]
impl Tool for DeleteNoteTool {
    fn definition(&self) -> ToolDefinition {
        self.definition.clone()
    }

    async fn execute(&self, params: Value, context: &ToolContext) -> ToolResult {
        let params: DeleteNoteParams = match serde_json::from_value(params) {
            Ok(p) => p,
            Err(e) => return ToolResult::error(format!("Invalid parameters: {}", e)),
        };

        let store = context.notes.clone();
        let name = params.filename.clone();
        match context.file_ops.run(move || store.delete(&name)).await {
            Ok(Ok(())) => ToolResult::success(render::describe_delete(&params.filename))
                .with_metadata(json!({ "filename": params.filename })),
            Ok(Err(e)) => ToolResult::error(render::describe_error(NoteOp::Delete, &e)),
            Err(e) => ToolResult::error(format!("Error: {}", e)),
        }
    }
}
