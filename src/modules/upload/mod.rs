pub mod handle;
pub mod model;
pub mod processor;
pub mod route;
pub mod schema;
pub mod service;
pub mod store;
pub mod store_fs;

pub use handle::{liveness, upload_pdf};
pub use model::{UploadConfig, UploadMode};
pub use processor::{HttpProcessor, PdfProcessor};
pub use schema::{Liveness, UploadReceipt};
pub use service::{UploadOutcome, UploadService};
pub use store::FileStore;
pub use store_fs::FsStore;
