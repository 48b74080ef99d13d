//! Implements ReportSinkPort by writing the rendered report to a file.

use crate::domain::DomainError;
use crate::ports::ReportSinkPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Report file on disk. Replaced atomically on every write.
pub struct ReportFile {
    path: PathBuf,
}

impl ReportFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Write-replace: temp file, sync_all, rename over the target.
    /// A crash mid-write leaves the previous report intact.
    async fn save(&self, document: &str) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Output(format!("create report directory: {}", e)))?;
        }

        let temp_path = self.path.with_extension("tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Output(format!("create temp file: {}", e)))?;
        f.write_all(document.as_bytes())
            .await
            .map_err(|e| DomainError::Output(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Output(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Output(format!("atomic rename failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReportSinkPort for ReportFile {
    async fn write(&self, document: &str) -> Result<PathBuf, DomainError> {
        self.save(document).await?;
        Ok(self.path.clone())
    }
}
