pub struct Env {
    pub ip: String,
    pub port: u16,
    pub upload_mode: String,
    pub processor_url: Option<String>,
    pub upload_dir: String,
    pub max_file_size: usize,
}

impl Env {
    fn new() -> Self {
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");

        let upload_mode = std::env::var("UPLOAD_MODE").unwrap_or_else(|_| "local".to_string());
        let processor_url = std::env::var("PROCESSOR_URL").ok();

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| {
            std::env::temp_dir().join("pdf-uploads").to_string_lossy().into_owned()
        });

        let max_file_size = std::env::var("MAX_FILE_SIZE")
            .unwrap_or_else(|_| "10485760".to_string())
            .parse::<usize>()
            .expect("MAX_FILE_SIZE must be a valid usize integer");

        Env { ip, port, upload_mode, processor_url, upload_dir, max_file_size }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
