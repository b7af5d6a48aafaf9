use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::modules::content::application::domain::entities::GraphicCategory;
use crate::shared::api::ApiResponse;
use crate::AppState;

const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Deserialize, IntoParams)]
pub struct GraphicsQuery {
    /// `All` or omitted returns every graphic
    pub category: Option<String>,
}

/// Graphics filtered by category
#[utoipa::path(
    get,
    path = "/api/content/graphics",
    tag = "content",
    params(GraphicsQuery),
    responses(
        (status = 200, description = "Matching graphics in showcase order"),
        (status = 400, description = "Unknown category", body = ErrorResponse),
    )
)]
#[get("/api/content/graphics")]
pub async fn get_graphics_handler(
    query: web::Query<GraphicsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = match query.into_inner().category.as_deref() {
        None | Some(ALL_CATEGORIES) => None,
        Some(raw) => match raw.parse::<GraphicCategory>() {
            Ok(category) => Some(category),
            Err(e) => return ApiResponse::bad_request("UNKNOWN_CATEGORY", &e.to_string()),
        },
    };

    let document = data.content.snapshot().await;
    ApiResponse::success(document.graphics_in(category))
}
