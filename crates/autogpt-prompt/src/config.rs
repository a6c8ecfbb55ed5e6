//! Default prompt content and the one-call composition helper.
//!
//! [`PromptConfig`] carries the constraints, resources and performance
//! evaluations every autonomous agent prompt starts with. Its `Default`
//! reproduces the stock wording exactly; downstream reply parsing may rely
//! on it, so edit the constants below with care.

use crate::command::CommandDescriptor;
use crate::error::PromptError;
use crate::prompt::PromptBuilder;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONSTRAINTS: [&str; 4] = [
    "~4000 word limit for short term memory. Your short term memory is short, so immediately save important information to files.",
    "If you are unsure how you previously did something or want to recall past events, thinking about similar events will help you remember.",
    "No user assistance",
    "Exclusively use the commands listed in double quotes e.g. \"command name\"",
];

pub const DEFAULT_RESOURCES: [&str; 4] = [
    "Internet access for searches and information gathering.",
    "Long Term memory management.",
    "GPT-3.5 powered Agents for delegation of simple tasks.",
    "File output.",
];

pub const DEFAULT_PERFORMANCE_EVALUATIONS: [&str; 4] = [
    "Continuously review and analyze your actions to ensure you are performing to the best of your abilities.",
    "Constructively self-criticize your big-picture behavior constantly.",
    "Reflect on past decisions and strategies to refine your approach.",
    "Every command has a cost, so be smart and efficient. Aim to complete tasks in the least number of steps.",
];

/// The non-command content of an agent prompt.
///
/// Any list omitted from a JSON config file falls back to its default.
///
/// ```
/// use autogpt_prompt::{Command, PromptConfig};
///
/// let tools = [Command::new("search", "search the web")];
/// let prompt = PromptConfig::default()
///     .with_constraint("Never spend money")
///     .render(&tools)
///     .unwrap();
/// assert!(prompt.contains("5. Never spend money"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub constraints: Vec<String>,
    pub resources: Vec<String>,
    pub performance_evaluations: Vec<String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            constraints: to_owned(&DEFAULT_CONSTRAINTS),
            resources: to_owned(&DEFAULT_RESOURCES),
            performance_evaluations: to_owned(&DEFAULT_PERFORMANCE_EVALUATIONS),
        }
    }
}

impl PromptConfig {
    /// A config with every list empty.
    pub fn empty() -> Self {
        Self {
            constraints: Vec::new(),
            resources: Vec::new(),
            performance_evaluations: Vec::new(),
        }
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config file '{}': {e}", path.display()))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("failed to parse config file '{}': {e}", path.display()))
    }

    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resources.push(resource.into());
        self
    }

    pub fn with_performance_evaluation(mut self, evaluation: impl Into<String>) -> Self {
        self.performance_evaluations.push(evaluation.into());
        self
    }

    /// Build a [`PromptBuilder`] holding this config's lists and the given
    /// commands, in that order.
    pub fn build_prompt_builder<'a, C: CommandDescriptor>(
        &self,
        commands: &'a [C],
    ) -> PromptBuilder<'a> {
        let mut builder = PromptBuilder::new();
        for constraint in &self.constraints {
            builder.add_constraint(constraint.as_str());
        }
        for command in commands {
            builder.add_command(command);
        }
        for resource in &self.resources {
            builder.add_resource(resource.as_str());
        }
        for evaluation in &self.performance_evaluations {
            builder.add_performance_evaluation(evaluation.as_str());
        }
        builder
    }

    pub fn render<C: CommandDescriptor>(&self, commands: &[C]) -> Result<String, PromptError> {
        self.build_prompt_builder(commands).render()
    }
}

/// Render the stock agent prompt for the given commands.
pub fn get_prompt<C: CommandDescriptor>(commands: &[C]) -> Result<String, PromptError> {
    PromptConfig::default().render(commands)
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
