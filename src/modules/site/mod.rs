//! Serves the built single-page app in production mode.

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use std::path::{Path, PathBuf};

use crate::shared::api::ApiResponse;

const INDEX_FILE: &str = "index.html";

/// Static files under `static_dir`, with every unknown non-API path answered
/// by `index.html` so client-side routes survive a reload.
pub fn spa_service(static_dir: &Path) -> Files {
    let index: PathBuf = static_dir.join(INDEX_FILE);

    Files::new("/", static_dir)
        .index_file(INDEX_FILE)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                if req.path().starts_with("/api/") {
                    let resp = ApiResponse::not_found("NOT_FOUND", "No such API route");
                    return Ok(ServiceResponse::new(req, resp));
                }

                let file = NamedFile::open_async(index).await?;
                let resp = file.into_response(&req);
                Ok(ServiceResponse::new(req, resp))
            }
        }))
}
