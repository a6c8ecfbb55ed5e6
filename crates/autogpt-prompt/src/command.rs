//! Command descriptors: the capabilities an agent may invoke.
//!
//! The prompt only needs two pieces of text per command, so
//! [`PromptBuilder`](crate::prompt::PromptBuilder) depends on the narrow
//! [`CommandDescriptor`] trait instead of any concrete tool type. Typed
//! implementors ([`Command`], [`ToolDef`]) always yield text; loosely typed
//! sources such as a raw [`serde_json::Value`] yield `None` for a field that
//! is missing or not a string, which fails the render.

use crate::{FunctionDef, ToolDef};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Anything exposing a name and a description for the commands block.
///
/// Returning `None` from either accessor marks the descriptor as malformed;
/// the builder reports it as
/// [`PromptError::InvalidCommandDescriptor`](crate::PromptError::InvalidCommandDescriptor)
/// rather than stringifying whatever is there.
pub trait CommandDescriptor {
    fn name(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
}

/// An owned name/description pair.
///
/// ```
/// use autogpt_prompt::{Command, CommandDescriptor};
///
/// let search = Command::new("search", "search the web");
/// assert_eq!(search.name(), Some("search"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    pub description: String,
}

impl Command {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl CommandDescriptor for Command {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
}

impl CommandDescriptor for FunctionDef {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
}

impl CommandDescriptor for ToolDef {
    fn name(&self) -> Option<&str> {
        Some(&self.function.name)
    }

    fn description(&self) -> Option<&str> {
        Some(&self.function.description)
    }
}

/// Reads either a flat `{"name", "description"}` object or an
/// OpenAI-style `{"type": "function", "function": {...}}` entry.
impl CommandDescriptor for Value {
    fn name(&self) -> Option<&str> {
        text_field(self, "name")
    }

    fn description(&self) -> Option<&str> {
        text_field(self, "description")
    }
}

impl<T: CommandDescriptor + ?Sized> CommandDescriptor for Box<T> {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }
}

fn text_field<'v>(value: &'v Value, key: &str) -> Option<&'v str> {
    let source = value
        .get("function")
        .filter(|f| f.is_object())
        .unwrap_or(value);
    source.get(key)?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn command_exposes_both_fields() {
        let cmd = Command::new("search", "search the web");
        assert_eq!(cmd.name(), Some("search"));
        assert_eq!(cmd.description(), Some("search the web"));
    }

    #[test]
    fn tool_def_reads_function_fields() {
        let def = ToolDef::new("read_file", "Read a file", json!({"type": "object"}));
        assert_eq!(def.name(), Some("read_file"));
        assert_eq!(def.description(), Some("Read a file"));
    }

    #[test]
    fn flat_json_object() {
        let value = json!({"name": "browse", "description": "open a url"});
        assert_eq!(value.name(), Some("browse"));
        assert_eq!(value.description(), Some("open a url"));
    }

    #[test]
    fn function_wrapped_json_object() {
        let value = json!({
            "type": "function",
            "function": {"name": "grep", "description": "search files"}
        });
        assert_eq!(value.name(), Some("grep"));
        assert_eq!(value.description(), Some("search files"));
    }

    #[test]
    fn non_string_field_is_none() {
        let value = json!({"name": "calc", "description": 42});
        assert_eq!(value.name(), Some("calc"));
        assert_eq!(value.description(), None);
    }

    #[test]
    fn missing_field_is_none() {
        let value = json!({"description": "no name here"});
        assert_eq!(value.name(), None);
    }

    #[test]
    fn boxed_descriptor_delegates() {
        let boxed: Box<dyn CommandDescriptor> = Box::new(Command::new("a", "b"));
        assert_eq!(boxed.name(), Some("a"));
        assert_eq!(boxed.description(), Some("b"));
    }
}
