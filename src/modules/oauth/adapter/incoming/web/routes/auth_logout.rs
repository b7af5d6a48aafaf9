use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use tracing::info;

use crate::AppState;

/// End the visitor session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "oauth",
    responses((status = 200, description = "`{success: true}`")),
)]
#[post("/api/auth/logout")]
pub async fn auth_logout_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let removal = data.sessions.destroy(&req).await;
    info!("Visitor session destroyed");

    HttpResponse::Ok()
        .cookie(removal)
        .json(json!({ "success": true }))
}
