use actix_web::web;

use crate::modules::upload::{processor::PdfProcessor, store::FileStore};

pub fn configure<S, P>(cfg: &mut web::ServiceConfig)
where
    S: FileStore + Send + Sync + 'static,
    P: PdfProcessor + Send + Sync + 'static,
{
    cfg.service(
        web::resource("/upload")
            .route(web::post().to(crate::modules::upload::handle::upload_pdf::<S, P>))
            .route(web::get().to(crate::modules::upload::handle::liveness)),
    );
}
