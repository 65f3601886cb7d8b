use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ghrepo",
    version,
    about = "Inspect GitHub repository detail payloads"
)]
pub struct Cli {
    /// Output format (defaults to config, then text)
    #[arg(long, short = 'o', value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// When to colorize output (defaults to config, then auto)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorChoice>,

    /// Path to a TOML config file
    #[arg(long, env = "GHREPO_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Serialize, Deserialize, Clone, Debug, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(ValueEnum, Serialize, Deserialize, Clone, Debug, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a summary of a repository payload
    #[command(visible_alias = "s")]
    Show {
        /// Payload file (reads stdin when omitted or "-")
        file: Option<PathBuf>,
    },
    /// List the pull request merge methods the repository allows
    #[command(visible_alias = "m")]
    MergeMethods {
        /// Payload file (reads stdin when omitted or "-")
        file: Option<PathBuf>,
    },
    /// Show the parent and source repositories of a fork
    #[command(visible_alias = "l")]
    Lineage {
        /// Payload file (reads stdin when omitted or "-")
        file: Option<PathBuf>,
    },
    /// Configuration operations
    #[command(visible_alias = "cfg")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Show config file search paths
    Path,
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "ghrepo", &mut std::io::stdout());
    }
}
