use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

#[derive(Debug, Error)]
enum GitCommandError {
    #[error("'git tag' exited with {status}: {stderr}")]
    TagListingFailed { status: ExitStatus, stderr: String },
}

/// Read-only view of the tags in a repository, backed by the `git`
/// command-line tool.
pub struct GitTags {
    working_dir: PathBuf,
}

impl GitTags {
    pub fn new(path: impl AsRef<Path>) -> Self {
        GitTags {
            working_dir: path.as_ref().to_path_buf(),
        }
    }

    /// Lists all tags by running `git tag` and capturing its output,
    /// one tag per line. The order is whatever git emits; callers must
    /// not assume it is sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        debug!("Listing tags in {:?}", self.working_dir);

        let output = Command::new("git")
            .arg("tag")
            .current_dir(&self.working_dir)
            .output()
            .context("Failed to invoke git. Is it installed and on PATH?")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitCommandError::TagListingFailed {
                status: output.status,
                stderr,
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let tags: Vec<String> = stdout.lines().map(str::to_string).collect();

        debug!("Found {} tags: {:?}", tags.len(), tags);
        Ok(tags)
    }
}
