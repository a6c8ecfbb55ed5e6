//! Accumulating prompt builder.
//!
//! [`PromptBuilder`] collects constraints, commands, resources and
//! performance-evaluation notes in insertion order and renders them, with the
//! response schema, into one prompt string. Rendering only reads the builder,
//! so it can be repeated after further appends and always reflects the
//! current state.

use super::schema::{ResponseSchema, format_schema};
use crate::command::CommandDescriptor;
use crate::error::{DescriptorField, PromptError};
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace, warn};

const RESPONSE_FORMAT_INTRO: &str =
    "You should only respond in JSON format as described below \nResponse Format: \n";
const RESPONSE_FORMAT_OUTRO: &str = " \nEnsure the response can be parsed by Python json.loads";

/// Builder for the agent's instruction prompt.
///
/// Commands are borrowed, not copied: the registry that owns them must
/// outlive the builder. The schema type defaults to [`ResponseSchema`] and
/// can be swapped with [`with_schema`](Self::with_schema).
///
/// # Example
///
/// ```
/// use autogpt_prompt::{Command, PromptBuilder};
///
/// let search = Command::new("search", "search the web");
/// let mut builder = PromptBuilder::new();
/// builder.add_constraint("limit A");
/// builder.add_command(&search);
///
/// let prompt = builder.render().unwrap();
/// assert!(prompt.starts_with("Constraints:\n1. limit A\n\nCommands:\n1. search: search the web"));
/// ```
#[derive(Clone)]
pub struct PromptBuilder<'a, S = ResponseSchema> {
    constraints: Vec<String>,
    commands: Vec<&'a dyn CommandDescriptor>,
    resources: Vec<String>,
    performance_evaluations: Vec<String>,
    schema: S,
}

impl Default for PromptBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder<'_> {
    /// Create an empty builder with the default [`ResponseSchema`].
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
            commands: Vec::new(),
            resources: Vec::new(),
            performance_evaluations: Vec::new(),
            schema: ResponseSchema::default(),
        }
    }
}

impl<'a, S: Serialize> PromptBuilder<'a, S> {
    /// Replace the response schema, keeping every accumulated item.
    ///
    /// Any serializable value is accepted here; whether it can actually be
    /// shown to the agent is checked by [`render`](Self::render).
    pub fn with_schema<T: Serialize>(self, schema: T) -> PromptBuilder<'a, T> {
        PromptBuilder {
            constraints: self.constraints,
            commands: self.commands,
            resources: self.resources,
            performance_evaluations: self.performance_evaluations,
            schema,
        }
    }

    pub fn add_constraint(&mut self, constraint: impl Into<String>) {
        let constraint = constraint.into();
        trace!(position = self.constraints.len() + 1, "adding constraint");
        self.constraints.push(constraint);
    }

    /// Append a command. Its fields are not inspected until render.
    pub fn add_command(&mut self, command: &'a dyn CommandDescriptor) {
        trace!(position = self.commands.len() + 1, "adding command");
        self.commands.push(command);
    }

    pub fn add_resource(&mut self, resource: impl Into<String>) {
        let resource = resource.into();
        trace!(position = self.resources.len() + 1, "adding resource");
        self.resources.push(resource);
    }

    pub fn add_performance_evaluation(&mut self, evaluation: impl Into<String>) {
        let evaluation = evaluation.into();
        trace!(
            position = self.performance_evaluations.len() + 1,
            "adding performance evaluation"
        );
        self.performance_evaluations.push(evaluation);
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.add_constraint(constraint);
        self
    }

    pub fn with_command(mut self, command: &'a dyn CommandDescriptor) -> Self {
        self.add_command(command);
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.add_resource(resource);
        self
    }

    pub fn with_performance_evaluation(mut self, evaluation: impl Into<String>) -> Self {
        self.add_performance_evaluation(evaluation);
        self
    }

    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    pub fn commands(&self) -> &[&'a dyn CommandDescriptor] {
        &self.commands
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    pub fn performance_evaluations(&self) -> &[String] {
        &self.performance_evaluations
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// Render the prompt from the current state.
    ///
    /// Sections appear in a fixed order (constraints, commands, resources,
    /// performance evaluation, response format), each list numbered from 1
    /// in insertion order and sections separated by a blank line. An empty
    /// list still emits its heading.
    ///
    /// Fails without producing any output if a command has a field that is
    /// not text, or if the schema cannot be written as JSON.
    pub fn render(&self) -> Result<String, PromptError> {
        let result = self.try_render();
        match &result {
            Ok(prompt) => debug!(
                constraints = self.constraints.len(),
                commands = self.commands.len(),
                resources = self.resources.len(),
                evaluations = self.performance_evaluations.len(),
                bytes = prompt.len(),
                "rendered prompt"
            ),
            Err(e) => warn!(error = %e, "failed to render prompt"),
        }
        result
    }

    fn try_render(&self) -> Result<String, PromptError> {
        let commands = self.numbered_commands()?;
        let schema = format_schema(&self.schema)?;

        let sections = [
            section("Constraints", &numbered_list(&self.constraints)),
            section("Commands", &commands),
            section("Resources", &numbered_list(&self.resources)),
            section(
                "Performance Evaluation",
                &numbered_list(&self.performance_evaluations),
            ),
            format!("{RESPONSE_FORMAT_INTRO}{schema}{RESPONSE_FORMAT_OUTRO}"),
        ];
        Ok(sections.join("\n\n"))
    }

    fn numbered_commands(&self) -> Result<String, PromptError> {
        let mut lines = Vec::with_capacity(self.commands.len());
        for (index, command) in self.commands.iter().enumerate() {
            let name = command.name().ok_or(PromptError::InvalidCommandDescriptor {
                index,
                field: DescriptorField::Name,
            })?;
            let description = command.description().ok_or(PromptError::InvalidCommandDescriptor {
                index,
                field: DescriptorField::Description,
            })?;
            lines.push(format!("{}. {name}: {description}", index + 1));
        }
        Ok(lines.join("\n"))
    }
}

impl<S: fmt::Debug> fmt::Debug for PromptBuilder<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptBuilder")
            .field("constraints", &self.constraints)
            .field("commands", &self.commands.len())
            .field("resources", &self.resources)
            .field("performance_evaluations", &self.performance_evaluations)
            .field("schema", &self.schema)
            .finish()
    }
}

fn section(heading: &str, body: &str) -> String {
    format!("{heading}:\n{body}")
}

fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
