use crate::cli::{ConfigCommands, OutputFormat};
use crate::config::{config_paths, Config};
use anyhow::Result;
use std::path::Path;

pub fn handle_config(
    action: &ConfigCommands,
    config: &Config,
    explicit_path: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(config)?);
                }
                OutputFormat::Text => {
                    print!("{}", toml::to_string_pretty(config)?);
                }
            }
            Ok(())
        }
        ConfigCommands::Path => {
            let paths = config_paths(explicit_path);
            match format {
                OutputFormat::Json => {
                    let entries: Vec<serde_json::Value> = paths
                        .iter()
                        .map(|p| {
                            serde_json::json!({
                                "path": p.display().to_string(),
                                "exists": p.exists(),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                OutputFormat::Text => {
                    for path in paths {
                        let marker = if path.exists() { " (found)" } else { "" };
                        println!("{}{}", path.display(), marker);
                    }
                }
            }
            Ok(())
        }
    }
}
