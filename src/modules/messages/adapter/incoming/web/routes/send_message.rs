use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::messages::application::{
    domain::message::NewMessage, ports::incoming::use_cases::SendMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct SendMessageRequestDto {
    #[schema(example = "Ana Lopez")]
    #[serde(default)]
    pub name: String,
    #[schema(example = "ana@example.com")]
    #[serde(default)]
    pub email: String,
    #[schema(example = "New brand identity")]
    #[serde(default)]
    pub subject: String,
    #[schema(example = "Could you help with a logo refresh?")]
    #[serde(default)]
    pub message: String,
}

/// Send a contact message
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = SendMessageRequestDto,
    responses(
        (status = 201, description = "Message stored"),
        (
            status = 400,
            description = "A field is missing or the email is malformed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "email is required" }
            })
        ),
        (status = 503, description = "No database configured", body = ErrorResponse),
        (status = 500, description = "Message could not be stored", body = ErrorResponse),
    )
)]
#[post("/api/messages")]
pub async fn send_message_handler(
    data: web::Data<AppState>,
    body: web::Json<SendMessageRequestDto>,
) -> impl Responder {
    let body = body.into_inner();
    let message = match NewMessage::new(body.name, body.email, body.subject, body.message) {
        Ok(message) => message,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.send_message.execute(message).await {
        Ok(stored) => ApiResponse::created(stored),
        Err(SendMessageError::Unavailable) => ApiResponse::service_unavailable(
            "MESSAGES_UNAVAILABLE",
            "Messages cannot be received right now",
        ),
        Err(e) => {
            error!(error = %e, "Failed to send contact message");
            ApiResponse::internal_error()
        }
    }
}
