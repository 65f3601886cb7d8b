mod cli;
mod color;
mod commands;
mod config;
mod input;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use output::output_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Falls back to the CLI flag when the config itself cannot be loaded
    let mut format = cli.format.unwrap_or_default();
    let result = load_config(&cli).and_then(|config| {
        format = config.format;
        run(&cli, &config)
    });

    if let Err(e) = result {
        output_error(&e, format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_with_cli(cli.format, cli.color);
    Ok(config)
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    color::init(config.color);

    let format: OutputFormat = config.format;
    match &cli.command {
        Commands::Show { file } => commands::repo::handle_show(file.as_deref(), format),
        Commands::MergeMethods { file } => {
            commands::repo::handle_merge_methods(file.as_deref(), format)
        }
        Commands::Lineage { file } => commands::repo::handle_lineage(file.as_deref(), format),
        Commands::Config { action } => {
            commands::config::handle_config(action, config, cli.config.as_deref(), format)
        }
        Commands::Completions { shell } => {
            Cli::generate_completions(*shell);
            Ok(())
        }
    }
}
