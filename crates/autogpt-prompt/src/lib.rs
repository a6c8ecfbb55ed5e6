//! Prompt assembly for autonomous, tool-using LLM agents.
//!
//! `autogpt-prompt` builds the instruction prompt an autonomous agent runs
//! under: the constraints that bind it, the commands it may invoke, the
//! resources it can assume, how it should judge its own performance, and the
//! exact JSON shape its replies must take. It only produces a string; calling
//! the model, parsing replies and executing commands belong to the caller.
//!
//! # Getting started
//!
//! ```
//! use autogpt_prompt::{Command, get_prompt};
//!
//! let tools = vec![
//!     Command::new("search", "search the web"),
//!     Command::new("write_file", "write text to a file"),
//! ];
//! let prompt = get_prompt(&tools).unwrap();
//!
//! assert!(prompt.contains("Commands:\n1. search: search the web\n2. write_file: write text to a file"));
//! assert!(prompt.contains("Performance Evaluation:\n1. Continuously review"));
//! ```
//!
//! # Where to find things
//!
//! - **Describe commands:** implement [`CommandDescriptor`] for your tool
//!   type, or use [`Command`], [`ToolDef`] or a raw [`serde_json::Value`].
//!   [`catalog::load_commands`] reads a JSON tools file.
//! - **Assemble a custom prompt:** [`PromptBuilder`] with its `add_*` /
//!   `with_*` methods and [`render`](PromptBuilder::render).
//! - **Change the reply format:** [`ResponseSchema`] or any serializable
//!   value passed to [`PromptBuilder::with_schema`].
//! - **Start from the stock content:** [`PromptConfig`] and [`get_prompt`].
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`prompt`] | [`PromptBuilder`], [`ResponseSchema`], schema formatting |
//! | [`command`] | [`CommandDescriptor`] trait and its implementors |
//! | [`config`] | [`PromptConfig`], default content, [`get_prompt`] |
//! | [`catalog`] | JSON tools file loading |
//! | [`error`] | [`PromptError`] |

pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod prompt;

use serde::{Deserialize, Serialize};

pub use command::{Command, CommandDescriptor};
pub use config::{PromptConfig, get_prompt};
pub use error::{DescriptorField, PromptError};
pub use prompt::{PromptBuilder, ResponseSchema};

// ── Tool types ─────────────────────────────────────────────────────

/// The type of a tool definition. Currently always `Function`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum ToolType {
    #[serde(rename = "function")]
    Function,
}

/// Tool definition in the OpenAI function-calling format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ToolDef {
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub function: FunctionDef,
}

impl ToolDef {
    /// Create a function-calling tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            tool_type: ToolType::Function,
            function: FunctionDef {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub parameters: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_def_round_trips_openai_shape() {
        let json = r#"{"type":"function","function":{"name":"grep","description":"search","parameters":{}}}"#;
        let def: ToolDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.tool_type, ToolType::Function);
        assert_eq!(def.function.name, "grep");
        assert_eq!(serde_json::to_string(&def).unwrap(), json);
    }

    #[test]
    fn tool_defs_render_as_commands() {
        let tools = vec![ToolDef::new(
            "read_file",
            "Read a file",
            serde_json::json!({"type": "object", "properties": {}}),
        )];
        let prompt = get_prompt(&tools).unwrap();
        assert!(prompt.contains("Commands:\n1. read_file: Read a file\n\n"));
    }
}
