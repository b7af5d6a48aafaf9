use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::warn;

use crate::api::schemas::ErrorResponse;
use crate::modules::content::application::domain::cv::CvPayload;
use crate::shared::api::ApiResponse;
use crate::AppState;

const CV_KEY: &str = "cv";

/// Download the CV
///
/// Uploaded files are served inline; a stored link is followed with a redirect.
#[utoipa::path(
    get,
    path = "/api/content/cv",
    tag = "content",
    responses(
        (status = 200, description = "CV file"),
        (status = 302, description = "Redirect to the linked CV"),
        (status = 404, description = "No CV uploaded", body = ErrorResponse),
        (status = 422, description = "Stored CV is corrupt", body = ErrorResponse),
    )
)]
#[get("/api/content/cv")]
pub async fn get_cv_handler(data: web::Data<AppState>) -> impl Responder {
    let document = data.content.snapshot().await;
    let raw = document
        .about_data
        .get(CV_KEY)
        .map(String::as_str)
        .unwrap_or_default();

    match CvPayload::parse(raw) {
        Ok(Some(CvPayload::Inline { mime, bytes })) => HttpResponse::Ok()
            .content_type(mime)
            .insert_header((header::CONTENT_DISPOSITION, "inline; filename=\"cv\""))
            .body(bytes),
        Ok(Some(CvPayload::Link(url))) => HttpResponse::Found()
            .insert_header((header::LOCATION, url))
            .finish(),
        Ok(None) => ApiResponse::not_found("CV_NOT_FOUND", "No CV has been uploaded"),
        Err(e) => {
            warn!(error = %e, "Stored CV cannot be served");
            ApiResponse::unprocessable("INVALID_CV", &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::modules::content::application::domain::entities::ContentDocument;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::seeded_content_sync;

    fn document_with_cv(cv: &str) -> ContentDocument {
        let mut doc = ContentDocument::default();
        doc.about_data.insert("cv".to_string(), cv.to_string());
        doc
    }

    #[actix_web::test]
    async fn inline_cv_is_served_with_its_content_type() {
        let state = TestAppStateBuilder::default()
            .with_content(seeded_content_sync(document_with_cv(
                "data:application/pdf;base64,JVBERi0xLjQ=",
            )))
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_cv_handler)).await;

        let req = test::TestRequest::get().uri("/api/content/cv").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"%PDF-1.4");
    }

    #[actix_web::test]
    async fn linked_cv_redirects() {
        let state = TestAppStateBuilder::default()
            .with_content(seeded_content_sync(document_with_cv(
                "https://cdn.example.com/cv.pdf",
            )))
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_cv_handler)).await;

        let req = test::TestRequest::get().uri("/api/content/cv").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "https://cdn.example.com/cv.pdf"
        );
    }

    #[actix_web::test]
    async fn missing_cv_is_not_found() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(get_cv_handler)).await;

        let req = test::TestRequest::get().uri("/api/content/cv").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn corrupt_cv_is_unprocessable() {
        let state = TestAppStateBuilder::default()
            .with_content(seeded_content_sync(document_with_cv(
                "data:application/pdf;base64,@@@",
            )))
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_cv_handler)).await;

        let req = test::TestRequest::get().uri("/api/content/cv").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
