//! Artifact writer
//!
//! Writes a generated [`ArtifactSet`] under an output directory, creating
//! parent directories as needed. Existing files are never overwritten
//! unless explicitly forced; conflicts are reported before anything is
//! written, so a failed run leaves the directory untouched.

use crate::output::ArtifactSet;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes every artifact, returning the paths created.
pub fn write_artifacts(
    artifacts: &ArtifactSet,
    output_dir: &Path,
    force: bool,
) -> Result<Vec<PathBuf>> {
    if !force {
        let conflicts: Vec<_> = artifacts
            .paths()
            .filter(|path| output_dir.join(path).exists())
            .collect();
        if !conflicts.is_empty() {
            bail!(
                "refusing to overwrite existing files: {} (use --force to overwrite)",
                conflicts.join(", ")
            );
        }
    }

    let mut written = Vec::with_capacity(artifacts.len());
    for (path, content) in artifacts.iter() {
        let full_path = output_dir.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&full_path, content)
            .with_context(|| format!("failed to write {}", full_path.display()))?;
        info!(path = %full_path.display(), "wrote artifact");
        written.push(full_path);
    }

    Ok(written)
}
