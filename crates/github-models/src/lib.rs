pub mod error;
pub mod models;

#[cfg(test)]
mod models_tests;

pub use error::{GitHubModelError, Result};
pub use models::*;
