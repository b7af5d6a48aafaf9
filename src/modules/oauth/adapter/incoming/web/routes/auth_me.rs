use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::modules::oauth::application::domain::profile::UserProfile;
use crate::AppState;

#[derive(Serialize)]
pub struct MeResponse {
    pub user: Option<UserProfile>,
}

/// Signed-in Google profile, or `null`
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "oauth",
    responses((status = 200, description = "`{user: object | null}`")),
)]
#[get("/api/auth/me")]
pub async fn auth_me_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let session = data.sessions.load(&req).await;
    HttpResponse::Ok().json(MeResponse {
        user: session.data.user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::json;

    use crate::modules::oauth::adapter::incoming::web::VisitorSession;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::test_sessions;

    #[actix_web::test]
    async fn anonymous_visitor_has_null_user() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(auth_me_handler)).await;

        let req = test::TestRequest::get().uri("/api/auth/me").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({ "user": null }));
    }

    #[actix_web::test]
    async fn signed_in_visitor_gets_stored_profile() {
        // Arrange
        let sessions = test_sessions();
        let mut session = VisitorSession::default();
        session.data.user = Some(serde_json::from_value(json!({ "name": "Ana" })).unwrap());
        let cookie = sessions.save(session).await.unwrap();
        let state = TestAppStateBuilder::default()
            .with_sessions(sessions)
            .build();
        let app = test::init_service(App::new().app_data(state).service(auth_me_handler)).await;

        // Act
        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .cookie(cookie)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        // Assert
        assert_eq!(body, json!({ "user": { "name": "Ana" } }));
    }
}
