//! Quoteform CLI - command-line front end for the quote request form
//!
//! This is the main entry point for the Quoteform CLI application, providing
//! commands for checking single fields, validating and submitting quote
//! requests, and replaying scripted form sessions.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::io::Write;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    let result = Config::load_with_file(cli.config.as_deref()).and_then(|(config, mut warnings)| {
        // Set up colored output
        control::set_override(cli.use_color() && config.output.color);

        if let Err(e) = init_logging(&cli, &config, &mut warnings) {
            eprintln!("Failed to initialize logging: {}", e);
        }
        report_warnings(&warnings, cli.quiet, &mut std::io::stderr());

        run(cli, config)
    });

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip_all, fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    // An explicit --output wins over the configured default
    let format = match cli.output {
        Some(format) => format,
        None => config.output_format()?,
    };
    let mut output = OutputWriter::new(format, control::SHOULD_COLORIZE.should_colorize(), cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Check(args) => handlers::handle_check(args, &mut output),
        Commands::Validate(args) => handlers::handle_validate(args, &mut output),
        Commands::Submit(args) => handlers::handle_submit(args, &mut output),
        Commands::Replay(args) => handlers::handle_replay(args, &mut output),
        Commands::Services(args) => handlers::handle_services(args, &mut output),
        Commands::Config(args) => handlers::handle_config(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config, warnings: &mut Vec<String>) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);

    // Config file first, then environment overrides
    logging_config.merge_with_file(&config.logging, verbosity, warnings);
    logging_config.merge_with_env(warnings);

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}

/// Print warnings gathered while loading config and setting up logging
fn report_warnings(warnings: &[String], quiet: bool, out: &mut impl Write) {
    for warning in warnings {
        tracing::warn!("{}", warning);
        if !quiet {
            let _ = writeln!(out, "Warning: {}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ConfigAction, ConfigFormat, ConfigShowArgs, OutputFormat, ServicesArgs};
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["quoteform", "-vv", "validate", "request.json"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["quoteform", "--quiet", "submit", "request.yaml"]);
        assert_eq!(cli.verbosity_level(), 0);
        assert!(matches!(cli.command, Commands::Submit(_)));

        let cli = Cli::parse_from(["quoteform", "-o", "json-pretty", "services", "--areas"]);
        assert_eq!(cli.output, Some(OutputFormat::JsonPretty));
        assert!(matches!(cli.command, Commands::Services(ServicesArgs { areas: true })));
    }

    #[test]
    fn test_broken_config_warning_is_printed() {
        let dir = tempfile::TempDir::new().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "[logging\n").unwrap();

        let (config, warnings) = Config::load_from_paths(&[broken]);
        assert_eq!(config, Config::default());

        let mut stderr = Vec::new();
        report_warnings(&warnings, false, &mut stderr);
        let printed = String::from_utf8(stderr).unwrap();
        assert!(printed.starts_with("Warning: Ignoring config file "));
        assert!(printed.contains("config.toml"));

        let mut silenced = Vec::new();
        report_warnings(&warnings, true, &mut silenced);
        assert!(silenced.is_empty());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["quoteform", "config", "show", "--format", "yaml"]);
        match cli.command {
            Commands::Config(args) => assert!(matches!(
                args.action,
                ConfigAction::Show(ConfigShowArgs {
                    format: ConfigFormat::Yaml
                })
            )),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
