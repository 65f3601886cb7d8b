use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use github_models::{GitHubRepo, GitHubRepoDetailed, MergeMethod};
use serde::Serialize;

/// Render `result` to stdout in the requested format
pub fn output_result<T: Serialize + Displayable>(result: &T, format: OutputFormat) -> Result<()> {
    println!("{}", render(result, format)?);
    Ok(())
}

fn render<T: Serialize + Displayable>(result: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .context("Failed to serialize output as JSON"),
        OutputFormat::Text => Ok(result.display()),
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: "error".to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err).unwrap_or_else(|_| {
                format!(r#"{{"error": true, "message": "{}"}}"#, err)
            })
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

pub trait Displayable {
    fn display(&self) -> String;
}

/// Parent and source of a repository, by full name
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Lineage {
    pub repository: String,
    pub fork: bool,
    pub parent: Option<String>,
    pub source: Option<String>,
}

impl From<&GitHubRepoDetailed> for Lineage {
    fn from(repo: &GitHubRepoDetailed) -> Self {
        Self {
            repository: repo.repo().full_name.clone(),
            fork: repo.repo().is_fork(),
            parent: repo.parent().map(|r| r.full_name.clone()),
            source: repo.source().map(|r| r.full_name.clone()),
        }
    }
}

impl Displayable for Lineage {
    fn display(&self) -> String {
        format!(
            "{}\n  {}: {}\n  {}: {}",
            self.repository.cyan().bold(),
            "Parent".dimmed(),
            or_none(self.parent.as_deref()),
            "Source".dimmed(),
            or_none(self.source.as_deref())
        )
    }
}

/// Enabled merge methods; serializes as a bare array
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MergeMethods(pub Vec<MergeMethod>);

impl Displayable for MergeMethods {
    fn display(&self) -> String {
        join_methods(&self.0, "\n")
    }
}

impl Displayable for GitHubRepoDetailed {
    fn display(&self) -> String {
        let repo = self.repo();
        let visibility = if repo.private {
            "private".yellow().to_string()
        } else {
            "public".green().to_string()
        };

        let mut output = format!(
            "{} ({})",
            repo.full_name.cyan().bold(),
            visibility
        );

        if let Some(desc) = &repo.description {
            output.push_str(&format!("\n  {}: {}", "Description".dimmed(), desc));
        }
        output.push_str(&format!("\n  {}: {}", "Owner".dimmed(), repo.owner_login()));
        if let Some(org) = self.organization() {
            output.push_str(&format!(
                "\n  {}: {} ({})",
                "Organization".dimmed(),
                org.display_name().white().bold(),
                org.login
            ));
        }
        if let Some(branch) = &repo.default_branch {
            output.push_str(&format!("\n  {}: {}", "Default branch".dimmed(), branch));
        }
        if repo.archived {
            output.push_str(&format!("\n  {}: {}", "Archived".dimmed(), "yes".red()));
        }
        if let Some(pushed) = repo.pushed_at {
            output.push_str(&format!(
                "\n  {}: {}",
                "Pushed".dimmed(),
                pushed.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
            ));
        }

        output.push_str(&format!(
            "\n  {}: {}  {}: {}  {}: {}  {}: {}",
            "Stars".dimmed(),
            repo.stargazers_count,
            "Forks".dimmed(),
            repo.forks_count,
            "Network".dimmed(),
            or_none(self.network_count().map(|n| n.to_string()).as_deref()),
            "Subscribers".dimmed(),
            or_none(self.subscribers_count().map(|n| n.to_string()).as_deref())
        ));

        let base = self.base();
        if base.permissions().is_some() {
            let mut granted = Vec::new();
            if base.is_admin() {
                granted.push("admin");
            }
            if base.can_push() {
                granted.push("push");
            }
            if base.can_pull() {
                granted.push("pull");
            }
            let granted = if granted.is_empty() {
                "none".to_string()
            } else {
                granted.join(", ")
            };
            output.push_str(&format!("\n  {}: {}", "Permissions".dimmed(), granted));
        }

        output.push_str(&format!(
            "\n  {}: {}",
            "Merge methods".dimmed(),
            join_methods(&self.allowed_merge_methods(), ", ")
        ));

        if let Some(parent) = self.parent() {
            output.push_str(&format!("\n  {}: {}", "Forked from".dimmed(), repo_ref(parent)));
        }
        if let Some(source) = self.source() {
            if self.parent().map(|p| p.id) != Some(source.id) {
                output.push_str(&format!("\n  {}: {}", "Fork root".dimmed(), repo_ref(source)));
            }
        }

        output
    }
}

fn join_methods(methods: &[MergeMethod], separator: &str) -> String {
    if methods.is_empty() {
        return "none".dimmed().to_string();
    }
    methods
        .iter()
        .map(|m| m.as_str().green().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

fn repo_ref(repo: &GitHubRepo) -> String {
    repo.full_name.cyan().to_string()
}

fn or_none(value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "none".dimmed().to_string(),
    }
}
