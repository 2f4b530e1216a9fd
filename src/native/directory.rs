use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{
    constants::{DEFAULT_REPORTS_DIR, XML_REPORT_DIR},
    core::{
        domain::{NamingStrategy, ReportLocation},
        errors::ReportError,
    },
};

/// Absolute form of the configured report root, or the relative default when
/// the override is absent, empty or cannot be made absolute.
pub fn resolve_reports_root(raw: Option<&Path>) -> PathBuf {
    match raw
        .filter(|path| !path.as_os_str().is_empty())
        .map(std::path::absolute)
    {
        Some(Ok(path)) => path,
        Some(Err(e)) => {
            tracing::warn!("Cannot resolve reports directory, using default: {}", e);
            PathBuf::from(DEFAULT_REPORTS_DIR)
        }
        None => PathBuf::from(DEFAULT_REPORTS_DIR),
    }
}

#[derive(Clone, Debug)]
pub struct DirectoryResolver {
    reports_root: PathBuf,
    naming: NamingStrategy,
}

impl DirectoryResolver {
    pub fn new<T: AsRef<Path>>(reports_root: T, naming: NamingStrategy) -> Self {
        DirectoryResolver {
            reports_root: reports_root.as_ref().into(),
            naming,
        }
    }

    #[tracing::instrument(skip(self), fields(root = %self.reports_root.display()))]
    pub async fn resolve(&self) -> Result<ReportLocation, ReportError> {
        let mut dir = self.reports_root.join(XML_REPORT_DIR);
        let token = self.naming.name_token();
        if !token.is_empty() {
            dir.push(token);
        }

        ensure_directory(&dir).await?;
        Ok(ReportLocation::new(dir))
    }
}

async fn ensure_directory(dir: &Path) -> Result<(), ReportError> {
    if fs::metadata(dir).await.is_ok_and(|meta| meta.is_dir()) {
        tracing::debug!("Report directory already exists: {}", dir.display());
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(crate::constants::DIRECTORY_MODE);

    builder
        .create(dir)
        .await
        .map_err(|source| ReportError::CreateDirectory {
            path: dir.into(),
            source,
        })?;
    tracing::debug!("Created report directory: {}", dir.display());
    Ok(())
}
