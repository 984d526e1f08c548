use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error;
use crate::modules::upload::{
    model::{UploadConfig, UploadMode},
    processor::PdfProcessor,
    schema::UploadReceipt,
    store::FileStore,
};

/// Outcome of a processed upload, mapped to the HTTP response by the handler
#[derive(Debug)]
pub enum UploadOutcome {
    /// Local-store mode: metadata for the stored file
    Stored(UploadReceipt),
    /// Proxy mode: the original bytes, echoed back as a PDF body
    Processed { filename: String, bytes: Vec<u8> },
}

#[derive(Clone)]
pub struct UploadService<S, P>
where
    S: FileStore + Send + Sync,
    P: PdfProcessor + Send + Sync,
{
    store: Arc<S>,
    processor: Option<Arc<P>>,
    config: UploadConfig,
}

impl<S, P> UploadService<S, P>
where
    S: FileStore + Send + Sync,
    P: PdfProcessor + Send + Sync,
{
    pub fn new(store: Arc<S>, processor: Option<Arc<P>>, config: UploadConfig) -> Self {
        Self { store, processor, config }
    }

    /// Validate declared type and size
    fn validate_file(&self, file_size: usize, mime_type: &str) -> Result<(), error::SystemError> {
        // Check file size
        if file_size > self.config.max_file_size {
            return Err(error::SystemError::bad_request(format!(
                "File size exceeds maximum allowed size of {} bytes",
                self.config.max_file_size
            )));
        }

        // Check MIME type
        if !self.config.allowed_mime_types.iter().any(|m| m == mime_type) {
            return Err(error::SystemError::bad_request(format!(
                "File type '{}' is not allowed, only PDF files are accepted",
                mime_type
            )));
        }

        Ok(())
    }

    /// Generate unique filename keeping the original extension
    fn generate_filename(&self, original_filename: &str) -> String {
        let extension =
            Path::new(original_filename).extension().and_then(|ext| ext.to_str()).unwrap_or("");
        let uuid = Uuid::now_v7();
        if extension.is_empty() {
            uuid.to_string()
        } else {
            format!("{}.{}", uuid, extension)
        }
    }

    /// Validate the upload and dispatch on the configured mode
    pub async fn process_upload(
        &self,
        original_filename: String,
        bytes: Vec<u8>,
        mime_type: String,
    ) -> Result<UploadOutcome, error::SystemError> {
        let file_size = bytes.len();

        self.validate_file(file_size, &mime_type)?;

        log::info!(
            "Received file: name={}, size={}, type={}",
            original_filename,
            file_size,
            mime_type
        );

        match self.config.mode {
            UploadMode::Local => {
                let filename = self.generate_filename(&original_filename);
                let storage_path = self.store.save(&filename, &bytes).await?;

                Ok(UploadOutcome::Stored(UploadReceipt {
                    message: "Upload complete".to_string(),
                    file_name: filename,
                    original_name: original_filename,
                    size: file_size as u64,
                    path: storage_path.to_string_lossy().into_owned(),
                }))
            }
            UploadMode::Proxy => {
                let processor = self.processor.as_deref().ok_or_else(|| {
                    error::SystemError::InternalError(
                        "proxy mode requires a processor endpoint".into(),
                    )
                })?;

                // The processor's answer is logged, never surfaced; the caller
                // always gets the original bytes back.
                match processor.process(&original_filename, bytes.clone(), &mime_type).await {
                    Ok(result) => log::info!("Processor response: {}", result),
                    Err(e) => log::warn!("Processor call failed: {:?}", e),
                }

                Ok(UploadOutcome::Processed { filename: original_filename, bytes })
            }
        }
    }
}
