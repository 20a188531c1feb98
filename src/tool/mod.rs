//! Tool host surface.
//!
//! Agent runtimes call tools by name with a JSON argument object and expect a
//! JSON record back. A [`Tool`] never fails across this boundary: problems are
//! reported as an [`ErrorResult`] record instead.

pub mod pdf_read;

pub use pdf_read::{register_tools, PdfReadArgs, PdfReadResponse, PdfReadTool, PDF_READ_TOOL};

use crate::error::PdfReadError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A capability that an agent can invoke by name.
pub trait Tool: Send + Sync {
    /// Unique name of the tool (e.g., "pdf_read").
    fn name(&self) -> &str;

    /// Description for the LLM prompt.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's parameters.
    fn parameters(&self) -> Value;

    /// Runs the tool. Failures come back as an error record, never a panic.
    fn call(&self, args: &Value) -> Value;
}

/// Failure record returned across the tool boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({ "error": self.error })
    }
}

impl From<PdfReadError> for ErrorResult {
    fn from(err: PdfReadError) -> Self {
        Self::new(err.to_string())
    }
}

/// Tools available to a host, keyed by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tool, replacing any tool already registered under its name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Registered tool names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Name, description and parameter schema of every tool.
    pub fn schemas(&self) -> Value {
        Value::Array(
            self.tools
                .values()
                .map(|tool| {
                    serde_json::json!({
                        "name": tool.name(),
                        "description": tool.description(),
                        "parameters": tool.parameters(),
                    })
                })
                .collect(),
        )
    }

    /// Invokes the named tool. An unknown name yields an error record.
    pub fn invoke(&self, name: &str, args: &Value) -> Value {
        match self.get(name) {
            Some(tool) => tool.call(args),
            None => ErrorResult::new(format!("Unknown tool: {}", name)).to_value(),
        }
    }
}
