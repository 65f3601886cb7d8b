use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::owner::GitHubUser;

/// GitHub repository as embedded in other resources (`parent`, `source`, search results)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    pub owner: GitHubUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// API URL of the repository resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pushed_at: Option<DateTime<Utc>>,
}

impl GitHubRepo {
    pub fn is_fork(&self) -> bool {
        self.fork
    }

    pub fn owner_login(&self) -> &str {
        &self.owner.login
    }
}

/// Permissions of the authenticated user on a repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GitHubRepoPermissions {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub pull: bool,
}

/// Repository together with the caller's permissions.
///
/// GitHub only includes `permissions` when the request is authenticated,
/// so every permission check treats a missing block as "no access".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GitHubRepoWithPermissions {
    #[serde(flatten)]
    repo: GitHubRepo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    permissions: Option<GitHubRepoPermissions>,
}

impl GitHubRepoWithPermissions {
    pub fn new(repo: GitHubRepo, permissions: Option<GitHubRepoPermissions>) -> Self {
        Self { repo, permissions }
    }

    pub fn repo(&self) -> &GitHubRepo {
        &self.repo
    }

    pub fn permissions(&self) -> Option<&GitHubRepoPermissions> {
        self.permissions.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.permissions.is_some_and(|p| p.admin)
    }

    pub fn can_push(&self) -> bool {
        self.permissions.is_some_and(|p| p.push)
    }

    pub fn can_pull(&self) -> bool {
        self.permissions.is_some_and(|p| p.pull)
    }
}
