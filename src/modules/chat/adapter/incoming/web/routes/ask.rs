use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::chat::application::domain::faq::answer_for;
use crate::shared::api::ApiResponse;

#[derive(Deserialize, ToSchema)]
pub struct ChatRequestDto {
    #[schema(example = "Where are you based?")]
    pub question: String,
}

#[derive(Serialize, ToSchema)]
pub struct ChatAnswerResponse {
    pub question: String,
    pub answer: String,
}

/// Ask the chat assistant one of its canned questions
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Canned answer", body = ChatAnswerResponse),
        (status = 404, description = "Question is not in the list", body = ErrorResponse),
    )
)]
#[post("/api/chat")]
pub async fn ask_chat_handler(body: web::Json<ChatRequestDto>) -> impl Responder {
    let question = body.into_inner().question;

    match answer_for(&question) {
        Some(answer) => ApiResponse::success(ChatAnswerResponse {
            question,
            answer: answer.to_string(),
        }),
        None => ApiResponse::not_found("UNKNOWN_QUESTION", "I can only answer the quick questions"),
    }
}
