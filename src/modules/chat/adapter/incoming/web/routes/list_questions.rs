use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::chat::application::domain::faq::{questions, GREETING};
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
pub struct ChatQuestionsResponse {
    pub greeting: String,
    pub questions: Vec<String>,
}

/// Quick questions offered by the chat assistant
#[utoipa::path(
    get,
    path = "/api/chat/questions",
    tag = "chat",
    responses((status = 200, description = "Greeting and canned questions", body = ChatQuestionsResponse))
)]
#[get("/api/chat/questions")]
pub async fn list_chat_questions_handler() -> impl Responder {
    ApiResponse::success(ChatQuestionsResponse {
        greeting: GREETING.to_string(),
        questions: questions().map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn lists_greeting_and_questions() {
        let app = test::init_service(App::new().service(list_chat_questions_handler)).await;

        let req = test::TestRequest::get().uri("/api/chat/questions").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["greeting"], GREETING);
        assert_eq!(body["data"]["questions"][0], "What services do you offer?");
        assert_eq!(body["data"]["questions"].as_array().map(Vec::len), Some(4));
    }
}
