//! The response format the agent is told to reply in.
//!
//! [`ResponseSchema`] is an ordered record rather than a map: field
//! declaration order is the key order in the rendered JSON, so `thoughts`
//! always precedes `command`. The values are instructions to the agent
//! describing what belongs in each field, not agent output.

use crate::error::PromptError;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Top-level reply shape: the agent's reasoning plus the command to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseSchema {
    pub thoughts: ThoughtsFormat,
    pub command: CommandFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThoughtsFormat {
    pub text: String,
    pub reasoning: String,
    pub plan: String,
    pub criticism: String,
    pub speak: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandFormat {
    pub name: String,
    pub input: String,
}

impl Default for ResponseSchema {
    fn default() -> Self {
        Self {
            thoughts: ThoughtsFormat {
                text: "thought".into(),
                reasoning: "reasoning".into(),
                plan: "- short bulleted\n- list that conveys\n- long-term plan".into(),
                criticism: "constructive self-criticism".into(),
                speak: "thoughts summary to say to user".into(),
            },
            command: CommandFormat {
                name: "tool name".into(),
                input: "input to the tool".into(),
            },
        }
    }
}

/// Serialize a schema as JSON indented with four spaces.
///
/// The schema must be an object whose leaves are all strings; anything else
/// (numbers, booleans, nulls, arrays, non-string map keys) is rejected with
/// [`PromptError::SchemaSerializationError`].
pub fn format_schema<S: Serialize + ?Sized>(schema: &S) -> Result<String, PromptError> {
    let value = serde_json::to_value(schema)
        .map_err(|e| PromptError::SchemaSerializationError(e.to_string()))?;
    if !value.is_object() {
        return Err(PromptError::SchemaSerializationError(
            "response schema must be a JSON object".into(),
        ));
    }
    check_leaves(&value, "")?;

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut ser)
        .map_err(|e| PromptError::SchemaSerializationError(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| PromptError::SchemaSerializationError(e.to_string()))
}

fn check_leaves(value: &Value, path: &str) -> Result<(), PromptError> {
    match value {
        Value::String(_) => Ok(()),
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                check_leaves(child, &child_path)?;
            }
            Ok(())
        }
        other => Err(PromptError::SchemaSerializationError(format!(
            "field '{path}' must be text or a nested object, found {}",
            kind(other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const DEFAULT_RENDERED: &str = r#"{
    "thoughts": {
        "text": "thought",
        "reasoning": "reasoning",
        "plan": "- short bulleted\n- list that conveys\n- long-term plan",
        "criticism": "constructive self-criticism",
        "speak": "thoughts summary to say to user"
    },
    "command": {
        "name": "tool name",
        "input": "input to the tool"
    }
}"#;

    #[test]
    fn default_schema_renders_with_four_space_indent() {
        let text = format_schema(&ResponseSchema::default()).unwrap();
        assert_eq!(text, DEFAULT_RENDERED);
    }

    #[test]
    fn key_order_follows_declaration() {
        let text = format_schema(&ResponseSchema::default()).unwrap();
        let thoughts = text.find("\"thoughts\"").unwrap();
        let command = text.find("\"command\"").unwrap();
        assert!(thoughts < command);

        let keys = ["\"text\"", "\"reasoning\"", "\"plan\"", "\"criticism\"", "\"speak\""];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn numeric_leaf_is_rejected() {
        let err = format_schema(&serde_json::json!({"thoughts": {"text": 3}})).unwrap_err();
        match err {
            PromptError::SchemaSerializationError(msg) => {
                assert!(msg.contains("thoughts.text"), "{msg}");
                assert!(msg.contains("a number"), "{msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn array_leaf_is_rejected() {
        let schema = serde_json::json!({"command": {"input": ["a", "b"]}});
        assert!(format_schema(&schema).is_err());
    }

    #[test]
    fn non_object_root_is_rejected() {
        assert!(format_schema("just text").is_err());
    }

    #[test]
    fn non_string_map_keys_are_rejected() {
        let mut map: HashMap<Vec<u8>, String> = HashMap::new();
        map.insert(vec![1, 2], "value".into());
        assert!(matches!(
            format_schema(&map),
            Err(PromptError::SchemaSerializationError(_))
        ));
    }
}
