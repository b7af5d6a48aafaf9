use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current portfolio content
///
/// Returns the document visitors see: projects, graphics, reviews, service
/// details, contact info and about data.
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses(
        (status = 200, description = "Current content document"),
    )
)]
#[get("/api/content")]
pub async fn get_content_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.snapshot().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::modules::content::application::domain::entities::{ContentDocument, Project};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::seeded_content_sync;

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn returns_current_document_in_envelope() {
        // Arrange
        let mut doc = ContentDocument::default();
        doc.projects = vec![Project::placeholder(42)];
        let state = TestAppStateBuilder::default()
            .with_content(seeded_content_sync(doc))
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_content_handler)).await;

        // Act
        let req = test::TestRequest::get().uri("/api/content").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["projects"][0]["id"], 42);
        assert_eq!(body["data"]["projects"][0]["title"], "New Project");
        assert!(body["data"]["serviceDetails"].is_object());
    }
}
