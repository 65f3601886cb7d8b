use serde::{Deserialize, Serialize};

/// GitHub user (minimal representation)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Account type as reported by GitHub ("User", "Organization", "Bot")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

impl GitHubUser {
    pub fn is_organization(&self) -> bool {
        self.account_type.as_deref() == Some("Organization")
    }
}

/// GitHub organization
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GitHubOrg {
    pub login: String,
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl GitHubOrg {
    /// Display name, falling back to the login
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}
