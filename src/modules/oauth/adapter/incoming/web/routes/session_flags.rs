use actix_web::{get, web, HttpRequest, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Visitor flags
///
/// `{isAdmin, hasSubmittedReview}` for the calling visitor.
#[utoipa::path(
    get,
    path = "/api/session",
    tag = "session",
    responses((status = 200, description = "Flags for the current visitor")),
)]
#[get("/api/session")]
pub async fn session_flags_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let session = data.sessions.load(&req).await;
    ApiResponse::success(session.data.flags)
}
