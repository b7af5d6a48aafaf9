use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::modules::content::application::{
    domain::{entities::Review, ids::IdGenerator},
    ports::incoming::use_cases::ContentSync,
};
use crate::modules::reviews::application::{
    domain::intake::{RatingFeedback, ReviewIntake, SubmitOutcome},
    ports::incoming::use_cases::{
        SubmitReviewCommand, SubmitReviewError, SubmitReviewResult, SubmitReviewUseCase,
    },
};

/// Public review submission. Read-modify-commit runs under one mutex so
/// concurrent reviewers never overwrite each other.
pub struct SubmitReviewService {
    content: Arc<dyn ContentSync>,
    ids: Arc<IdGenerator>,
    publish_lock: Mutex<()>,
}

impl SubmitReviewService {
    pub fn new(content: Arc<dyn ContentSync>, ids: Arc<IdGenerator>) -> Self {
        Self {
            content,
            ids,
            publish_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl SubmitReviewUseCase for SubmitReviewService {
    async fn execute(
        &self,
        command: SubmitReviewCommand,
    ) -> Result<SubmitReviewResult, SubmitReviewError> {
        let mut intake = ReviewIntake::new();
        intake.open();
        {
            let form = intake.form_mut();
            form.name = command.name;
            form.role = command.role;
            form.comment = command.comment;
        }
        if intake.select_rating(command.rating) == RatingFeedback::OutOfRange {
            info!(rating = command.rating, "Review rating out of range");
            return Err(SubmitReviewError::InvalidRating(command.rating));
        }

        match intake.submit(&self.ids, Utc::now().timestamp_millis()) {
            SubmitOutcome::Accepted(review) => self.publish(review).await,
            SubmitOutcome::Rejected { message } => {
                info!(rating = command.rating, "Review rejected by rating gate");
                Err(SubmitReviewError::Rejected(message))
            }
            // the intake was opened above
            SubmitOutcome::NotOpen => Err(SubmitReviewError::Rejected(
                "Review form is closed".to_string(),
            )),
        }
    }

    async fn publish(&self, mut review: Review) -> Result<SubmitReviewResult, SubmitReviewError> {
        let _guard = self.publish_lock.lock().await;

        let mut document = self.content.snapshot().await;
        if document.used_ids().any(|id| id == review.id) {
            review.id = self.ids.next_unused(document.used_ids());
        }
        document.reviews.insert(0, review.clone());

        let outcome = self.content.commit(document).await.map_err(|e| {
            warn!(error = %e, "Failed to store review");
            SubmitReviewError::from(e)
        })?;

        info!(review_id = review.id, rating = review.rating, synced = outcome.is_synced(), "Review published");
        Ok(SubmitReviewResult { review, outcome })
    }
}
