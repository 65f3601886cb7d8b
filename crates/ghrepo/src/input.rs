use anyhow::{Context, Result};
use github_models::GitHubRepoDetailed;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a repository detail payload from a file, or stdin for `None` / `-`
pub fn load_repository(file: Option<&Path>) -> Result<GitHubRepoDetailed> {
    match file {
        Some(path) if path != Path::new("-") => {
            let handle = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            GitHubRepoDetailed::from_reader(BufReader::new(handle))
                .with_context(|| format!("Invalid repository payload in {}", path.display()))
        }
        _ => GitHubRepoDetailed::from_reader(std::io::stdin().lock())
            .context("Invalid repository payload on stdin"),
    }
}
