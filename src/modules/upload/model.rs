/// Server behavior for a received upload, selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMode {
    /// Write the file under the upload directory and echo metadata back
    Local,
    /// Forward the file to the external processing endpoint and echo the
    /// original bytes back
    Proxy,
}

impl UploadMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "local" => Some(Self::Local),
            "proxy" => Some(Self::Proxy),
            _ => None,
        }
    }
}

/// File upload configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub mode: UploadMode,
    pub max_file_size: usize,
    pub allowed_mime_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            mode: UploadMode::Local,
            max_file_size: 10 * 1024 * 1024, // 10MB
            allowed_mime_types: vec!["application/pdf".to_string()],
        }
    }
}
