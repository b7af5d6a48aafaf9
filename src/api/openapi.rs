use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::admin::adapter::incoming::web::routes::{
    AdminLoginRequestDto, ServiceItemEditDto, SetFieldRequestDto,
};
use crate::modules::admin::application::ports::outgoing::IssuedToken;
use crate::modules::chat::adapter::incoming::web::routes::{
    ChatAnswerResponse, ChatQuestionsResponse, ChatRequestDto,
};
use crate::modules::messages::adapter::incoming::web::routes::SendMessageRequestDto;
use crate::modules::oauth::adapter::incoming::web::routes::AuthUrlResponse;
use crate::modules::reviews::adapter::incoming::web::routes::SubmitReviewRequestDto;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content, reviews, contact messages and visitor sign-in for the portfolio site"
    ),
    paths(
        // Content endpoints
        crate::modules::content::adapter::incoming::web::routes::get_content_handler,
        crate::modules::content::adapter::incoming::web::routes::get_graphics_handler,
        crate::modules::content::adapter::incoming::web::routes::get_cv_handler,

        // Review endpoints
        crate::modules::reviews::adapter::incoming::web::routes::submit_review_handler,
        crate::modules::reviews::adapter::incoming::web::routes::review_prompt_handler,

        // Message endpoints
        crate::modules::messages::adapter::incoming::web::routes::send_message_handler,
        crate::modules::messages::adapter::incoming::web::routes::list_messages_handler,

        // Chat endpoints
        crate::modules::chat::adapter::incoming::web::routes::list_chat_questions_handler,
        crate::modules::chat::adapter::incoming::web::routes::ask_chat_handler,

        // Visitor auth endpoints
        crate::modules::oauth::adapter::incoming::web::routes::google_auth_url_handler,
        crate::modules::oauth::adapter::incoming::web::routes::google_callback_handler,
        crate::modules::oauth::adapter::incoming::web::routes::auth_me_handler,
        crate::modules::oauth::adapter::incoming::web::routes::auth_logout_handler,
        crate::modules::oauth::adapter::incoming::web::routes::session_flags_handler,

        // Admin endpoints
        crate::modules::admin::adapter::incoming::web::routes::admin_login_handler,
        crate::modules::admin::adapter::incoming::web::routes::admin_logout_handler,
        crate::modules::admin::adapter::incoming::web::routes::get_draft_handler,
        crate::modules::admin::adapter::incoming::web::routes::open_draft_handler,
        crate::modules::admin::adapter::incoming::web::routes::discard_draft_handler,
        crate::modules::admin::adapter::incoming::web::routes::commit_draft_handler,
        crate::modules::admin::adapter::incoming::web::routes::set_draft_field_handler,
        crate::modules::admin::adapter::incoming::web::routes::add_draft_item_handler,
        crate::modules::admin::adapter::incoming::web::routes::remove_draft_item_handler,
        crate::modules::admin::adapter::incoming::web::routes::add_service_item_handler,
        crate::modules::admin::adapter::incoming::web::routes::update_service_item_handler,
        crate::modules::admin::adapter::incoming::web::routes::remove_service_item_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Request and response DTOs
            AdminLoginRequestDto,
            IssuedToken,
            SetFieldRequestDto,
            ServiceItemEditDto,
            SubmitReviewRequestDto,
            SendMessageRequestDto,
            ChatRequestDto,
            ChatAnswerResponse,
            ChatQuestionsResponse,
            AuthUrlResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "content", description = "Published portfolio content"),
        (name = "reviews", description = "Rating-gated review intake"),
        (name = "messages", description = "Contact form messages"),
        (name = "chat", description = "Canned chat assistant"),
        (name = "auth", description = "Visitor sign-in with Google"),
        (name = "admin", description = "Admin login and draft editing"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin token from /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}
