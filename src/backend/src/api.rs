use crate::scan_provider::ScanProvider;
use actix_files::{Files, NamedFile};
use actix_web::{HttpResponse, Responder, web};
use log::{debug, error};
use std::path::PathBuf;
use wifi_prov_core::types::SCAN_ENDPOINT;

pub struct Api<Provider>
where
    Provider: ScanProvider,
{
    pub scan_provider: Provider,
    pub dist_dir: PathBuf,
}

impl<Provider> Api<Provider>
where
    Provider: ScanProvider + 'static,
{
    pub fn new(scan_provider: Provider, dist_dir: impl Into<PathBuf>) -> Self {
        Api {
            scan_provider,
            dist_dir: dist_dir.into(),
        }
    }

    /// Register all routes; the `Api` itself must be registered as app data
    pub fn configure(cfg: &mut web::ServiceConfig, dist_dir: PathBuf) {
        cfg.route("/", web::get().to(Self::index))
            .route("/index.html", web::get().to(Self::index))
            .route("/password.html", web::get().to(Self::password_page))
            .route(SCAN_ENDPOINT, web::post().to(Self::scan_list))
            .route("/version", web::get().to(Self::version))
            .service(Files::new("/", dist_dir));
    }

    pub async fn index(api: web::Data<Self>) -> actix_web::Result<NamedFile> {
        debug!("index() called");
        Ok(NamedFile::open(api.dist_dir.join("index.html"))?)
    }

    pub async fn password_page(api: web::Data<Self>) -> actix_web::Result<NamedFile> {
        debug!("password_page() called");
        Ok(NamedFile::open(api.dist_dir.join("password.html"))?)
    }

    /// The request body is a fixed marker and carries no parameters
    pub async fn scan_list(body: web::Bytes, api: web::Data<Self>) -> impl Responder {
        debug!("scan_list() called with {} body bytes", body.len());

        match api.scan_provider.scan().await {
            Ok(response) => HttpResponse::Ok().json(&response),
            Err(e) => {
                error!("scan failed: {e:#}");
                HttpResponse::ServiceUnavailable().body(format!("scan not ready: {e}"))
            }
        }
    }

    pub async fn version() -> impl Responder {
        HttpResponse::Ok().body(env!("CARGO_PKG_VERSION"))
    }
}
