use actix_multipart::Multipart;
use actix_web::{HttpResponse, http::header, web};
use futures_util::TryStreamExt;

use crate::api::{error, success::Success};
use crate::modules::upload::schema::Liveness;
use crate::modules::upload::service::{UploadOutcome, UploadService};

/// Upload file handler: drains the multipart stream for the `file` field and
/// dispatches to the configured upload mode.
pub async fn upload_pdf<S, P>(
    mut payload: Multipart,
    service: web::Data<UploadService<S, P>>,
) -> Result<HttpResponse, error::Error>
where
    S: crate::modules::upload::store::FileStore + Send + Sync + 'static,
    P: crate::modules::upload::processor::PdfProcessor + Send + Sync + 'static,
{
    // Process multipart form data
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|_| error::Error::bad_request("Malformed multipart payload"))?
    {
        let content_disposition = field
            .content_disposition()
            .ok_or_else(|| error::Error::bad_request("Missing content disposition"))?;

        if content_disposition.get_name() != Some("file") {
            continue;
        }

        let filename = content_disposition
            .get_filename()
            .ok_or_else(|| error::Error::bad_request("Missing filename"))?
            .to_string();

        // Declared MIME type, falling back to a lookup on the extension
        let mime_type = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| mime_guess::from_path(&filename).first_or_octet_stream().to_string());

        // Read file bytes
        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|_| error::Error::bad_request("Malformed multipart payload"))?
        {
            bytes.extend_from_slice(&chunk);
        }

        let outcome = service.process_upload(filename, bytes, mime_type).await?;

        return match outcome {
            UploadOutcome::Stored(receipt) => Ok(HttpResponse::Ok().json(receipt)),
            UploadOutcome::Processed { filename, bytes } => Ok(HttpResponse::Ok()
                .content_type("application/pdf")
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("inline; filename=\"{}\"", filename),
                ))
                .body(bytes)),
        };
    }

    Err(error::Error::bad_request("No file provided"))
}

/// Liveness handler for GET /api/upload
pub async fn liveness() -> Success<Liveness> {
    Success::ok(Liveness {
        message: "PDF Upload API is working".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
