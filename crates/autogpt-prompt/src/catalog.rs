//! Loading command catalogs from JSON tools files.
//!
//! A tools file is a JSON array whose entries are either flat
//! `{"name", "description"}` objects or OpenAI function-calling definitions
//! (`{"type": "function", "function": {...}}`). Entries are kept as raw
//! [`serde_json::Value`]s: a malformed entry loads fine and is reported by
//! the render, with its position, instead of failing the whole file here.

use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read a tools file into a list of command entries.
pub fn load_commands(path: impl AsRef<Path>) -> Result<Vec<Value>, String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read tools file '{}': {e}", path.display()))?;
    let commands = parse_commands(&content)
        .map_err(|e| format!("failed to parse tools file '{}': {e}", path.display()))?;
    debug!(path = %path.display(), count = commands.len(), "loaded tools file");
    Ok(commands)
}

/// Parse the contents of a tools file.
pub fn parse_commands(content: &str) -> Result<Vec<Value>, String> {
    match serde_json::from_str::<Value>(content).map_err(|e| e.to_string())? {
        Value::Array(entries) => Ok(entries),
        other => Err(format!(
            "expected a JSON array of tools, found {}",
            match other {
                Value::Object(_) => "an object",
                Value::String(_) => "a string",
                Value::Number(_) => "a number",
                Value::Bool(_) => "a boolean",
                _ => "null",
            }
        )),
    }
}
