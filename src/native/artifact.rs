use std::path::PathBuf;

use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::{
    constants::RESULT_FILE,
    core::{domain::ReportLocation, errors::ReportError},
};

#[derive(Clone, Debug, Default)]
pub struct ArtifactWriter;

impl ArtifactWriter {
    pub fn new() -> Self {
        ArtifactWriter
    }

    /// Writes `content` as `result.xml` inside `location`, replacing any
    /// previous file.
    pub async fn write(
        &self,
        location: &ReportLocation,
        content: &[u8],
    ) -> Result<PathBuf, ReportError> {
        let path = location.dir().join(RESULT_FILE);
        let to_error = |source| ReportError::Write {
            path: path.clone(),
            source,
        };

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(crate::constants::FILE_MODE);

        let mut file = options.open(&path).await.map_err(to_error)?;
        file.write_all(content).await.map_err(to_error)?;
        file.flush().await.map_err(to_error)?;

        tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}
