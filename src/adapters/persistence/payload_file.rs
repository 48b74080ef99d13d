//! Implements PayloadSourcePort by reading the chat id file.

use crate::domain::DomainError;
use crate::ports::PayloadSourcePort;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File holding the chat id list. Read whole; invalid UTF-8 is replaced, not rejected.
pub struct PayloadFile {
    path: PathBuf,
}

impl PayloadFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl PayloadSourcePort for PayloadFile {
    async fn read_payload(&self) -> Result<String, DomainError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| DomainError::Input(format!("read {}: {}", self.path.display(), e)))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat_ids.json");
        std::fs::write(&path, "[-1001, -1002,").unwrap();
        let payload = PayloadFile::new(&path).read_payload().await.unwrap();
        assert_eq!(payload, "[-1001, -1002,");
    }

    #[tokio::test]
    async fn missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PayloadFile::new(dir.path().join("nope.json"))
            .read_payload()
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Input(_)));
    }
}
