//! Errors produced while rendering a prompt.

use std::fmt;

/// Which text field of a command descriptor could not be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorField {
    Name,
    Description,
}

impl fmt::Display for DescriptorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Description => write!(f, "description"),
        }
    }
}

/// Failure modes of [`PromptBuilder::render`](crate::prompt::PromptBuilder::render).
///
/// Appends never fail; every error surfaces at render time and no partial
/// prompt is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// A command's name or description is not text.
    InvalidCommandDescriptor {
        /// Zero-based position in the commands list.
        index: usize,
        field: DescriptorField,
    },
    /// The response schema could not be written as JSON, or holds a leaf
    /// that is neither a string nor a nested object.
    SchemaSerializationError(String),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCommandDescriptor { index, field } => write!(
                f,
                "invalid command descriptor at position {}: {field} is not text",
                index + 1
            ),
            Self::SchemaSerializationError(msg) => {
                write!(f, "failed to serialize response schema: {msg}")
            }
        }
    }
}

impl std::error::Error for PromptError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_descriptor_message_is_one_based() {
        let err = PromptError::InvalidCommandDescriptor {
            index: 0,
            field: DescriptorField::Description,
        };
        assert_eq!(
            err.to_string(),
            "invalid command descriptor at position 1: description is not text"
        );
    }

    #[test]
    fn schema_error_message_carries_detail() {
        let err = PromptError::SchemaSerializationError("key must be a string".into());
        assert!(err.to_string().contains("key must be a string"));
    }
}
