use std::time::Duration;

use crate::api::error;

lazy_static::lazy_static! {
    static ref HTTP_CLIENT: reqwest::Client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .expect("Failed to create HTTP client");
}

/// External endpoint that consumes uploaded PDFs. Behind a trait so the
/// service stays testable without a network.
#[async_trait::async_trait]
pub trait PdfProcessor {
    /// POST the file as a multipart form and return the endpoint's JSON body
    async fn process(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<serde_json::Value, error::SystemError>;
}

#[derive(Clone)]
pub struct HttpProcessor {
    endpoint: String,
}

impl HttpProcessor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[async_trait::async_trait]
impl PdfProcessor for HttpProcessor {
    async fn process(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<serde_json::Value, error::SystemError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = HTTP_CLIENT.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error::SystemError::UpstreamStatus(status.as_u16()));
        }

        let body = response.json::<serde_json::Value>().await?;
        Ok(body)
    }
}
