use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};

use crate::modules::admin::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLogoutResponse {
    pub draft_discarded: bool,
}

/// Admin logout
///
/// Discards any open draft and clears the admin flag on the visitor session.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[post("/api/admin/logout")]
pub async fn admin_logout_handler(
    req: HttpRequest,
    admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft_discarded = data.drafts.discard(&admin.username).await;

    let mut session = data.sessions.load(&req).await;
    session.data.flags.is_admin = false;

    let mut resp: HttpResponse = ApiResponse::success(AdminLogoutResponse { draft_discarded });
    match data.sessions.save(session).await {
        Ok(cookie) => {
            if let Err(e) = resp.add_cookie(&cookie) {
                error!(error = %e, "Failed to attach session cookie");
            }
        }
        Err(e) => error!(error = %e, "Failed to clear admin flag"),
    }

    info!(admin = %admin.username, draft_discarded, "Admin logged out");
    resp
}
