use std::path::PathBuf;

use logo_rendr::RenderError;

/// Errors reported by the `cli-logo` commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Image not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CliError {
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Write {
            path: path.into(),
            source,
        }
    }
}
