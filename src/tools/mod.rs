pub mod builtin;
pub mod registry;
pub mod types;

pub use registry::{Tool, ToolRegistry};
pub use types::{PropertySchema, ToolContext, ToolDefinition, ToolInputSchema, ToolResult};
