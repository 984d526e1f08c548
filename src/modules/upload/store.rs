use std::path::PathBuf;

use crate::api::error;

/// Destination for uploaded bytes
#[async_trait::async_trait]
pub trait FileStore {
    /// Write `bytes` under `filename`, returning the full storage path
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, error::SystemError>;
}
