use actix_web::{delete, patch, post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::draft_errors::draft_error_response;
use crate::modules::admin::adapter::incoming::web::extractors::AdminUser;
use crate::modules::admin::application::ports::incoming::use_cases::DraftEdit;
use crate::modules::content::application::domain::entities::ServiceItemEdit;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fields an admin may change on a service item. `name`, `link` and `image`
/// map onto the matching field of either item shape.
#[derive(Deserialize, ToSchema, Default)]
pub struct ServiceItemEditDto {
    #[schema(example = "Launch Film")]
    pub name: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    #[schema(example = "React, Node.js")]
    pub tech: Option<String>,
}

impl From<ServiceItemEditDto> for ServiceItemEdit {
    fn from(dto: ServiceItemEditDto) -> Self {
        ServiceItemEdit {
            name: dto.name,
            link: dto.link,
            image: dto.image,
            tech: dto.tech,
        }
    }
}

async fn apply_edit(data: &AppState, admin: &str, edit: DraftEdit) -> actix_web::HttpResponse {
    match data.drafts.edit(admin, edit).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => draft_error_response(&e),
    }
}

/// Append an item to a service's list
#[utoipa::path(
    post,
    path = "/api/admin/draft/services/{service}/items",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("service" = String, Path, description = "Service name, e.g. `Web Development`")),
    responses(
        (status = 200, description = "Item added; `change.index` is its position"),
        (status = 404, description = "Unknown service"),
        (status = 422, description = "Service is a showcase, not an item list"),
    )
)]
#[post("/api/admin/draft/services/{service}/items")]
pub async fn add_service_item_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    apply_edit(
        &data,
        &admin.username,
        DraftEdit::AddServiceItem {
            service: path.into_inner(),
        },
    )
    .await
}

/// Edit a service item in place
#[utoipa::path(
    patch,
    path = "/api/admin/draft/services/{service}/items/{index}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(
        ("service" = String, Path, description = "Service name"),
        ("index" = usize, Path, description = "Item position"),
    ),
    request_body = ServiceItemEditDto,
    responses(
        (status = 200, description = "Item updated"),
        (status = 404, description = "Unknown service or index"),
    )
)]
#[patch("/api/admin/draft/services/{service}/items/{index}")]
pub async fn update_service_item_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<(String, usize)>,
    body: web::Json<ServiceItemEditDto>,
) -> impl Responder {
    let (service, index) = path.into_inner();
    apply_edit(
        &data,
        &admin.username,
        DraftEdit::UpdateServiceItem {
            service,
            index,
            edit: body.into_inner().into(),
        },
    )
    .await
}

/// Remove a service item
#[utoipa::path(
    delete,
    path = "/api/admin/draft/services/{service}/items/{index}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(
        ("service" = String, Path, description = "Service name"),
        ("index" = usize, Path, description = "Item position"),
    ),
    responses(
        (status = 200, description = "Item removed"),
        (status = 404, description = "Unknown service or index"),
    )
)]
#[delete("/api/admin/draft/services/{service}/items/{index}")]
pub async fn remove_service_item_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<(String, usize)>,
) -> impl Responder {
    let (service, index) = path.into_inner();
    apply_edit(
        &data,
        &admin.username,
        DraftEdit::RemoveServiceItem { service, index },
    )
    .await
}
