use actix_web::{get, web, Responder};

use crate::modules::admin::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List contact messages
///
/// Newest first. Returns an empty list when the database is unreachable.
#[utoipa::path(
    get,
    path = "/api/admin/messages",
    tag = "messages",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Stored messages, newest first"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/admin/messages")]
pub async fn list_messages_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.list_messages.execute().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    use crate::modules::messages::application::domain::message::NewMessage;
    use crate::modules::messages::application::ports::outgoing::MessageRepository;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{admin_auth_header, test_admin_tokens, InMemoryMessageRepository};

    #[actix_web::test]
    async fn admin_sees_stored_messages() {
        // Arrange
        let repository = Arc::new(InMemoryMessageRepository::new());
        let message = NewMessage::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "Logo".to_string(),
            "Need a new logo".to_string(),
        )
        .unwrap();
        repository.insert(&message).await.unwrap();
        let state = TestAppStateBuilder::default()
            .with_messages(repository)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_admin_tokens()))
                .service(list_messages_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::get()
            .uri("/api/admin/messages")
            .insert_header(admin_auth_header("owner"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        // Assert
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["data"][0]["email"], "ana@example.com");
    }

    #[actix_web::test]
    async fn unreachable_database_gives_empty_list() {
        let state = TestAppStateBuilder::default()
            .with_messages(Arc::new(InMemoryMessageRepository::unconfigured()))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_admin_tokens()))
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/messages")
            .insert_header(admin_auth_header("owner"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn visitors_cannot_read_messages() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_admin_tokens()))
                .service(list_messages_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/admin/messages").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
