//! Prompt assembly: the accumulating builder and the response schema.
//!
//! - **[`PromptBuilder`]** holds the numbered lists and renders the prompt.
//! - **[`ResponseSchema`]** is the reply shape embedded at the end of the
//!   prompt; [`format_schema`] writes it (or any override) as indented JSON.

pub mod builder;
pub mod schema;

pub use builder::PromptBuilder;
pub use schema::{CommandFormat, ResponseSchema, ThoughtsFormat, format_schema};
