use crate::cli::OutputFormat;
use crate::input::load_repository;
use crate::output::{output_result, Lineage, MergeMethods};
use anyhow::Result;
use std::path::Path;

pub fn handle_show(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let repo = load_repository(file)?;
    output_result(&repo, format)
}

pub fn handle_merge_methods(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let repo = load_repository(file)?;
    output_result(&MergeMethods(repo.allowed_merge_methods()), format)
}

pub fn handle_lineage(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let repo = load_repository(file)?;
    output_result(&Lineage::from(&repo), format)
}
