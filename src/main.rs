use actix_web::{
    self, App, HttpResponse, HttpServer,
    http::header::ContentType,
    middleware::Logger,
    web,
};
use std::sync::{Arc, LazyLock};

use crate::modules::upload::{
    model::{UploadConfig, UploadMode},
    processor::HttpProcessor,
    service::UploadService,
    store_fs::FsStore,
};

mod api;
mod constants;
mod modules;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("../static/index.html"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let mode = UploadMode::parse(&ENV.upload_mode)
        .ok_or_else(|| std::io::Error::other("UPLOAD_MODE must be either 'local' or 'proxy'"))?;

    let processor = ENV.processor_url.as_ref().map(|url| Arc::new(HttpProcessor::new(url.clone())));
    if mode == UploadMode::Proxy && processor.is_none() {
        return Err(std::io::Error::other("PROCESSOR_URL must be set when UPLOAD_MODE=proxy"));
    }

    let config = UploadConfig { mode, max_file_size: ENV.max_file_size, ..UploadConfig::default() };
    let upload_service =
        UploadService::new(Arc::new(FsStore::new(ENV.upload_dir.clone())), processor, config);

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(upload_service.clone()))
            .service(index)
            .service(
                web::scope("/api")
                    .configure(modules::upload::route::configure::<FsStore, HttpProcessor>),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
