//! Render an autonomous-agent prompt and print it to stdout.
//!
//! # Examples
//!
//! ```sh
//! # Stock prompt with no commands
//! autogpt-prompt
//!
//! # Commands from a tools file (flat or OpenAI function-calling entries)
//! autogpt-prompt --tools tools.json
//!
//! # Replace the default lists from a config file, then add one more constraint
//! autogpt-prompt --config prompt.json --constraint "Never spend money"
//!
//! # Only the given items, no stock content
//! autogpt-prompt --no-defaults --resource "A calculator." -v
//! ```

use autogpt_prompt::PromptConfig;
use autogpt_prompt::catalog::load_commands;
use clap::Parser;
use std::process;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Render an autonomous-agent prompt and print it to stdout.
#[derive(Parser)]
#[command(name = "autogpt-prompt")]
struct Cli {
    /// Path to a JSON file listing the commands the agent may use
    #[arg(long)]
    tools: Option<String>,

    /// Path to a JSON file overriding the constraints, resources and evaluations
    #[arg(long, conflicts_with = "no_defaults")]
    config: Option<String>,

    /// Start from empty lists instead of the stock content
    #[arg(long)]
    no_defaults: bool,

    /// Extra constraint appended after the configured ones
    #[arg(long)]
    constraint: Vec<String>,

    /// Extra resource appended after the configured ones
    #[arg(long)]
    resource: Vec<String>,

    /// Extra performance evaluation appended after the configured ones
    #[arg(long)]
    evaluation: Vec<String>,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(level),
        )
        .init();
}

fn build_config(cli: &Cli) -> Result<PromptConfig, String> {
    let mut config = match (&cli.config, cli.no_defaults) {
        (Some(path), _) => PromptConfig::from_file(path)?,
        (None, true) => PromptConfig::empty(),
        (None, false) => PromptConfig::default(),
    };
    config.constraints.extend(cli.constraint.iter().cloned());
    config.resources.extend(cli.resource.iter().cloned());
    config
        .performance_evaluations
        .extend(cli.evaluation.iter().cloned());
    Ok(config)
}

fn run(cli: &Cli) -> Result<String, String> {
    let config = build_config(cli)?;
    let commands = match &cli.tools {
        Some(path) => load_commands(path)?,
        None => Vec::new(),
    };
    config.render(&commands).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(prompt) => println!("{prompt}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("autogpt-prompt").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn extras_append_to_defaults() {
        let cli = parse(&["--constraint", "Never spend money", "--resource", "A calculator."]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.constraints.len(), 5);
        assert_eq!(config.constraints[4], "Never spend money");
        assert_eq!(config.resources.len(), 5);
    }

    #[test]
    fn no_defaults_starts_empty() {
        let cli = parse(&["--no-defaults", "--evaluation", "Be quick."]);
        let config = build_config(&cli).unwrap();
        assert!(config.constraints.is_empty());
        assert_eq!(config.performance_evaluations, vec!["Be quick.".to_string()]);
    }

    #[test]
    fn config_conflicts_with_no_defaults() {
        let result = Cli::try_parse_from([
            "autogpt-prompt",
            "--config",
            "prompt.json",
            "--no-defaults",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn run_without_tools_renders_empty_commands() {
        let prompt = run(&parse(&[])).unwrap();
        assert!(prompt.contains("Commands:\n\n\nResources:"));
    }

    #[test]
    fn run_reports_missing_tools_file() {
        let err = run(&parse(&["--tools", "/nonexistent/tools.json"])).unwrap_err();
        assert!(err.contains("failed to read tools file"));
    }

    #[test]
    fn verbose_counts_occurrences() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }
}
