use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubModelError {
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GitHubModelError>;
