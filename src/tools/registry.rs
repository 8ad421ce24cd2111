//! Tool trait and registry.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::builtin::{DeleteNoteTool, ListNotesTool, ReadNoteTool, WriteNoteTool};
use super::types::{ToolContext, ToolDefinition, ToolResult};

#[async_trait]
pub trait Tool: Send + Sync {
    fn definition(&self) -> ToolDefinition;
    async fn execute(&self, params: Value, context: &ToolContext) -> ToolResult;
}

pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        ToolRegistry {
            tools: HashMap::new(),
        }
    }

    /// Registry preloaded with the four note tools.
    pub fn with_builtin_tools() -> Self {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(ReadNoteTool::new()));
        registry.register(Arc::new(WriteNoteTool::new()));
        registry.register(Arc::new(ListNotesTool::new()));
        registry.register(Arc::new(DeleteNoteTool::new()));
        registry
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.definition().name, tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Definitions sorted by name, for a stable schema listing.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> =
            self.tools.values().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool by name. Unknown names come back as an error result,
    /// never a panic.
    pub async fn execute(&self, name: &str, params: Value, context: &ToolContext) -> ToolResult {
        match self.get(name) {
            Some(tool) => tool.execute(params, context).await,
            None => ToolResult::error(format!(
                "Unknown tool: '{}'. Available tools: {}",
                name,
                self.definitions()
                    .iter()
                    .map(|d| d.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::with_builtin_tools()
    }
}
