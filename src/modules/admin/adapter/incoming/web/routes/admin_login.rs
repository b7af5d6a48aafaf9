use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::ports::{
    incoming::use_cases::{AdminLoginCommand, AdminLoginError},
    outgoing::IssuedToken,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct AdminLoginRequestDto {
    #[schema(example = "owner")]
    pub username: String,
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Admin login
///
/// Verifies the configured admin credentials, marks the visitor session as
/// admin and returns a short-lived bearer token for the draft routes.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = AdminLoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<IssuedToken>),
            example = json!({
                "success": true,
                "data": { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "expiresIn": 3600 }
            })
        ),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 503, description = "Admin login not configured", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn admin_login_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<AdminLoginRequestDto>,
) -> impl Responder {
    let body = body.into_inner();
    let command = match AdminLoginCommand::new(body.username, body.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };
    let username = command.username().to_string();

    let issued: IssuedToken = match data.admin_login.execute(command).await {
        Ok(token) => token,
        Err(AdminLoginError::Disabled) => {
            return ApiResponse::service_unavailable(
                "ADMIN_LOGIN_DISABLED",
                "Admin login is not configured",
            );
        }
        Err(AdminLoginError::InvalidCredentials) => {
            warn!(username, "Rejected admin login");
            return ApiResponse::unauthorized(
                "INVALID_CREDENTIALS",
                "Invalid username or password",
            );
        }
        Err(e) => {
            error!(error = %e, "Admin login failed");
            return ApiResponse::internal_error();
        }
    };

    let mut session = data.sessions.load(&req).await;
    session.data.flags.is_admin = true;
    let cookie = match data.sessions.rotate(session).await {
        Ok(cookie) => cookie,
        Err(e) => {
            error!(error = %e, "Failed to store admin session");
            return ApiResponse::internal_error();
        }
    };

    info!(username, "Admin logged in");
    let mut resp: HttpResponse = ApiResponse::success(issued);
    if let Err(e) = resp.add_cookie(&cookie) {
        error!(error = %e, "Failed to attach session cookie");
    }
    resp
}
