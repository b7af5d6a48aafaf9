use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::content::application::{
    domain::entities::Review, ports::incoming::use_cases::CommitOutcome,
};
use crate::modules::reviews::application::ports::incoming::use_cases::{
    SubmitReviewCommand, SubmitReviewError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct SubmitReviewRequestDto {
    #[schema(example = "Ana Lopez")]
    #[serde(default)]
    pub name: String,
    #[schema(example = "Client")]
    #[serde(default)]
    pub role: String,
    #[schema(example = "Delivered ahead of schedule.")]
    #[serde(default)]
    pub comment: String,
    /// 1 to 5 stars; below 3 is rejected
    #[schema(example = 5)]
    pub rating: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReviewResponse {
    pub review: Review,
    pub synced: bool,
}

/// Leave a review
///
/// Reviews rated below three stars are rejected. Accepted reviews appear
/// first in the showcase and mark the visitor as having reviewed.
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "reviews",
    request_body = SubmitReviewRequestDto,
    responses(
        (status = 201, description = "Review published"),
        (
            status = 422,
            description = "Rating too low or outside 1 to 5",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "REVIEW_REJECTED", "message": "Bad reviews not accepted" }
            })
        ),
        (status = 500, description = "Review could not be stored", body = ErrorResponse),
    )
)]
#[post("/api/reviews")]
pub async fn submit_review_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Json<SubmitReviewRequestDto>,
) -> impl Responder {
    let body = body.into_inner();
    let command = SubmitReviewCommand {
        name: body.name,
        role: body.role,
        comment: body.comment,
        rating: body.rating,
    };

    let result = match data.submit_review.execute(command).await {
        Ok(result) => result,
        Err(SubmitReviewError::Rejected(message)) => {
            return ApiResponse::unprocessable("REVIEW_REJECTED", &message);
        }
        Err(e @ SubmitReviewError::InvalidRating(_)) => {
            return ApiResponse::unprocessable("INVALID_RATING", &e.to_string());
        }
        Err(e) => {
            error!(error = %e, "Review submission failed");
            return ApiResponse::internal_error();
        }
    };

    let mut session = data.sessions.load(&req).await;
    session.data.flags.has_submitted_review = true;
    let cookie = data.sessions.save(session).await;

    let mut resp: HttpResponse = ApiResponse::created(SubmitReviewResponse {
        review: result.review,
        synced: matches!(result.outcome, CommitOutcome::Synced),
    });
    match cookie {
        Ok(cookie) => {
            if let Err(e) = resp.add_cookie(&cookie) {
                error!(error = %e, "Failed to attach session cookie");
            }
        }
        Err(e) => error!(error = %e, "Failed to record review flag in session"),
    }
    resp
}
