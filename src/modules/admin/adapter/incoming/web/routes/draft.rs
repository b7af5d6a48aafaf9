use actix_web::{delete, get, post, web, Responder};
use serde::Serialize;

use super::draft_errors::draft_error_response;
use crate::modules::admin::adapter::incoming::web::extractors::AdminUser;
use crate::modules::content::application::ports::incoming::use_cases::CommitOutcome;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current draft
///
/// Opens one from the live document when the admin has none.
#[utoipa::path(
    get,
    path = "/api/admin/draft",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Draft document")),
)]
#[get("/api/admin/draft")]
pub async fn get_draft_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.drafts.current(&admin.username).await)
}

/// Start a fresh draft
///
/// Any uncommitted changes are dropped.
#[utoipa::path(
    post,
    path = "/api/admin/draft",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses((status = 201, description = "New draft document")),
)]
#[post("/api/admin/draft")]
pub async fn open_draft_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    ApiResponse::created(data.drafts.open(&admin.username).await)
}

/// Throw the draft away
#[utoipa::path(
    delete,
    path = "/api/admin/draft",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Draft discarded"),
        (status = 404, description = "No draft was open"),
    )
)]
#[delete("/api/admin/draft")]
pub async fn discard_draft_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    if data.drafts.discard(&admin.username).await {
        ApiResponse::no_content()
    } else {
        ApiResponse::not_found("NO_OPEN_DRAFT", "No draft is open")
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommitStatus {
    Synced,
    SavedLocally { reason: String },
}

impl From<CommitOutcome> for CommitStatus {
    fn from(outcome: CommitOutcome) -> Self {
        match outcome {
            CommitOutcome::Synced => CommitStatus::Synced,
            CommitOutcome::SavedLocally { reason } => CommitStatus::SavedLocally { reason },
        }
    }
}

/// Publish the draft
///
/// Writes locally first, then to the remote store. `SAVED_LOCALLY` means
/// the remote write failed and other instances will not see the change yet.
#[utoipa::path(
    post,
    path = "/api/admin/draft/commit",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "`{status: SYNCED}` or `{status: SAVED_LOCALLY, reason}`"),
        (status = 409, description = "No draft is open"),
        (status = 500, description = "Local write failed"),
    )
)]
#[post("/api/admin/draft/commit")]
pub async fn commit_draft_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.drafts.commit(&admin.username).await {
        Ok(outcome) => ApiResponse::success(CommitStatus::from(outcome)),
        Err(e) => draft_error_response(&e),
    }
}
