use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to serialize report: {msg}")]
    Serialize { msg: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("Failed to write file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
