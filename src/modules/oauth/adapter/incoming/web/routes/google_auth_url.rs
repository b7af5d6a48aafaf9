use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct AuthUrlResponse {
    /// Google consent screen to open in a popup
    #[schema(example = "https://accounts.google.com/o/oauth2/v2/auth?redirect_uri=...")]
    pub url: String,
}

/// Google sign-in URL
#[utoipa::path(
    get,
    path = "/api/auth/google/url",
    tag = "oauth",
    responses(
        (status = 200, description = "Consent screen URL", body = AuthUrlResponse),
    )
)]
#[get("/api/auth/google/url")]
pub async fn google_auth_url_handler(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(AuthUrlResponse {
        url: data.sign_in.authorization_url(),
    })
}
