use actix_web::{delete, patch, post, web, Responder};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::draft_errors::draft_error_response;
use crate::modules::admin::adapter::incoming::web::extractors::AdminUser;
use crate::modules::admin::application::{
    domain::draft::Collection,
    ports::incoming::use_cases::{DraftEdit, DraftWorkspaceError},
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct SetFieldRequestDto {
    /// Dot-separated path into the content document
    #[schema(example = "aboutData.title")]
    pub path: String,
    /// Replacement value for the leaf
    #[schema(value_type = Object, example = "New Title")]
    pub value: Value,
}

async fn apply_edit(data: &AppState, admin: &str, edit: DraftEdit) -> actix_web::HttpResponse {
    match data.drafts.edit(admin, edit).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => draft_error_response(&e),
    }
}

fn parse_collection(raw: &str) -> Result<Collection, actix_web::HttpResponse> {
    raw.parse::<Collection>()
        .map_err(|e| draft_error_response(&DraftWorkspaceError::from(e)))
}

/// Set a draft field by dot-path
#[utoipa::path(
    patch,
    path = "/api/admin/draft/fields",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = SetFieldRequestDto,
    responses(
        (status = 200, description = "Field set; returns the updated draft"),
        (status = 422, description = "Path does not resolve or value does not fit"),
    )
)]
#[patch("/api/admin/draft/fields")]
pub async fn set_draft_field_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Json<SetFieldRequestDto>,
) -> impl Responder {
    let body = body.into_inner();
    apply_edit(
        &data,
        &admin.username,
        DraftEdit::SetField {
            path: body.path,
            value: body.value,
        },
    )
    .await
}

/// Append a placeholder project, graphic or review
#[utoipa::path(
    post,
    path = "/api/admin/draft/items/{collection}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("collection" = String, Path, description = "projects, graphics or reviews")),
    responses(
        (status = 200, description = "Item added; `change.id` is the new id"),
        (status = 404, description = "Unknown collection"),
    )
)]
#[post("/api/admin/draft/items/{collection}")]
pub async fn add_draft_item_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let collection = match parse_collection(&path) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    apply_edit(&data, &admin.username, DraftEdit::AddItem(collection)).await
}

/// Remove an item by id
///
/// Removing an id that is not present is not an error.
#[utoipa::path(
    delete,
    path = "/api/admin/draft/items/{collection}/{id}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(
        ("collection" = String, Path, description = "projects, graphics or reviews"),
        ("id" = i64, Path, description = "Item id"),
    ),
    responses((status = 200, description = "`change.removed` tells whether anything matched")),
)]
#[delete("/api/admin/draft/items/{collection}/{id}")]
pub async fn remove_draft_item_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<(String, i64)>,
) -> impl Responder {
    let (collection, id) = path.into_inner();
    let collection = match parse_collection(&collection) {
        Ok(c) => c,
        Err(resp) => return resp,
    };
    apply_edit(
        &data,
        &admin.username,
        DraftEdit::RemoveItem { collection, id },
    )
    .await
}
