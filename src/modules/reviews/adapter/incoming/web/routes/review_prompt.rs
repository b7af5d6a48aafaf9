use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::modules::reviews::application::domain::intake::{NavigationDecision, ReviewIntake};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
pub struct ReviewPromptResponse {
    pub prompt: bool,
}

/// Should leaving the page open the review form?
///
/// True at most once per visitor session, and never after a review. A
/// visitor without a session gets a short-lived one to remember the prompt.
#[utoipa::path(
    get,
    path = "/api/reviews/prompt",
    tag = "reviews",
    responses((status = 200, description = "`{prompt: bool}`")),
)]
#[get("/api/reviews/prompt")]
pub async fn review_prompt_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let mut session = data.sessions.load(&req).await;

    let decision = ReviewIntake::new()
        .on_back_navigation(session.data.flags, session.data.review_prompt_shown);
    if decision == NavigationDecision::Proceed {
        return ApiResponse::success(ReviewPromptResponse { prompt: false });
    }

    session.data.review_prompt_shown = true;
    let mut resp: HttpResponse = ApiResponse::success(ReviewPromptResponse { prompt: true });
    match data.sessions.save_provisional(session).await {
        Ok(cookie) => {
            if let Err(e) = resp.add_cookie(&cookie) {
                warn!(error = %e, "Failed to attach session cookie");
            }
        }
        Err(e) => warn!(error = %e, "Failed to remember review prompt"),
    }
    resp
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    use actix_web::cookie::time::Duration as CookieDuration;

    use crate::modules::oauth::adapter::incoming::web::{
        VisitorSession, PROVISIONAL_TTL_SECONDS, SESSION_COOKIE,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::test_sessions;

    #[actix_web::test]
    async fn prompts_once_then_stays_quiet() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(review_prompt_handler)).await;

        // Act
        let first = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/reviews/prompt").to_request(),
        )
        .await;
        let cookie = first
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.into_owned())
            .unwrap();
        let first_body: serde_json::Value = test::read_body_json(first).await;

        let second_req = test::TestRequest::get()
            .uri("/api/reviews/prompt")
            .cookie(cookie)
            .to_request();
        let second_body: serde_json::Value = test::call_and_read_body_json(&app, second_req).await;

        // Assert
        assert_eq!(first_body["data"]["prompt"], true);
        assert_eq!(second_body["data"]["prompt"], false);
    }

    #[actix_web::test]
    async fn reviewer_is_never_prompted() {
        let sessions = test_sessions();
        let mut session = VisitorSession::default();
        session.data.flags.has_submitted_review = true;
        let cookie = sessions.save(session).await.unwrap();
        let state = TestAppStateBuilder::default().with_sessions(sessions).build();
        let app = test::init_service(App::new().app_data(state).service(review_prompt_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/reviews/prompt")
            .cookie(cookie)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["prompt"], false);
    }

    #[actix_web::test]
    async fn cookieless_prompt_gets_a_short_lived_session() {
        // Arrange
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(review_prompt_handler)).await;

        // Act
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/reviews/prompt").to_request(),
        )
        .await;

        // Assert
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.into_owned())
            .unwrap();
        assert_eq!(
            cookie.max_age(),
            Some(CookieDuration::seconds(PROVISIONAL_TTL_SECONDS))
        );
    }

    #[actix_web::test]
    async fn existing_session_keeps_its_lifetime() {
        let sessions = test_sessions();
        let cookie = sessions.save(VisitorSession::default()).await.unwrap();
        let state = TestAppStateBuilder::default().with_sessions(sessions).build();
        let app = test::init_service(App::new().app_data(state).service(review_prompt_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/reviews/prompt")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;

        let renewed = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.into_owned())
            .unwrap();
        assert_eq!(renewed.max_age(), Some(CookieDuration::seconds(3600)));
    }
}
