use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

use super::owner::GitHubOrg;
use super::repo::{GitHubRepo, GitHubRepoWithPermissions};
use crate::error::Result;

/// Pull request merge method a repository can allow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    Merge,
    Squash,
    Rebase,
}

impl MergeMethod {
    pub const ALL: [MergeMethod; 3] = [MergeMethod::Merge, MergeMethod::Squash, MergeMethod::Rebase];

    pub fn as_str(&self) -> &'static str {
        match self {
            MergeMethod::Merge => "merge",
            MergeMethod::Squash => "squash",
            MergeMethod::Rebase => "rebase",
        }
    }
}

impl fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full repository resource as returned by `GET /repos/{owner}/{repo}`.
///
/// Every detail-only field is optional in the payload. The merge flags read
/// as `false` when GitHub leaves them out (they are only sent to users with
/// push access), while `parent`/`source` stay `None` for non-forks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GitHubRepoDetailed {
    #[serde(flatten)]
    base: GitHubRepoWithPermissions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allow_squash_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allow_merge_commit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    allow_rebase_merge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    organization: Option<GitHubOrg>,
    /// Repository this one was directly forked from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<Box<GitHubRepo>>,
    /// Root of the fork network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<Box<GitHubRepo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    network_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subscribers_count: Option<u64>,
}

impl GitHubRepoDetailed {
    /// Repository with no detail-only fields set
    pub fn new(base: GitHubRepoWithPermissions) -> Self {
        Self {
            base,
            allow_squash_merge: None,
            allow_merge_commit: None,
            allow_rebase_merge: None,
            organization: None,
            parent: None,
            source: None,
            network_count: None,
            subscribers_count: None,
        }
    }

    pub fn with_merge_settings(
        mut self,
        squash: Option<bool>,
        merge_commit: Option<bool>,
        rebase: Option<bool>,
    ) -> Self {
        self.allow_squash_merge = squash;
        self.allow_merge_commit = merge_commit;
        self.allow_rebase_merge = rebase;
        self
    }

    pub fn with_organization(mut self, organization: GitHubOrg) -> Self {
        self.organization = Some(organization);
        self
    }

    pub fn with_fork_lineage(mut self, parent: GitHubRepo, source: GitHubRepo) -> Self {
        self.parent = Some(Box::new(parent));
        self.source = Some(Box::new(source));
        self
    }

    pub fn with_counts(mut self, network: Option<u64>, subscribers: Option<u64>) -> Self {
        self.network_count = network;
        self.subscribers_count = subscribers;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn base(&self) -> &GitHubRepoWithPermissions {
        &self.base
    }

    pub fn repo(&self) -> &GitHubRepo {
        self.base.repo()
    }

    pub fn allow_squash_merge(&self) -> bool {
        self.allow_squash_merge.unwrap_or(false)
    }

    pub fn allow_merge_commit(&self) -> bool {
        self.allow_merge_commit.unwrap_or(false)
    }

    pub fn allow_rebase_merge(&self) -> bool {
        self.allow_rebase_merge.unwrap_or(false)
    }

    pub fn organization(&self) -> Option<&GitHubOrg> {
        self.organization.as_ref()
    }

    pub fn parent(&self) -> Option<&GitHubRepo> {
        self.parent.as_deref()
    }

    pub fn source(&self) -> Option<&GitHubRepo> {
        self.source.as_deref()
    }

    pub fn network_count(&self) -> Option<u64> {
        self.network_count
    }

    pub fn subscribers_count(&self) -> Option<u64> {
        self.subscribers_count
    }

    pub fn allows(&self, method: MergeMethod) -> bool {
        match method {
            MergeMethod::Merge => self.allow_merge_commit(),
            MergeMethod::Squash => self.allow_squash_merge(),
            MergeMethod::Rebase => self.allow_rebase_merge(),
        }
    }

    /// Enabled merge methods, in merge/squash/rebase order
    pub fn allowed_merge_methods(&self) -> Vec<MergeMethod> {
        MergeMethod::ALL
            .into_iter()
            .filter(|m| self.allows(*m))
            .collect()
    }

    /// Top of the fork network: `source`, then `parent`, then this repository
    pub fn fork_root(&self) -> &GitHubRepo {
        self.source()
            .or_else(|| self.parent())
            .unwrap_or_else(|| self.repo())
    }
}
