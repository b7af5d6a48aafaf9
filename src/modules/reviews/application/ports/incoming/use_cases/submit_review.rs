use async_trait::async_trait;

use crate::modules::content::application::{
    domain::entities::Review,
    ports::incoming::use_cases::{CommitError, CommitOutcome},
};

#[derive(Debug, Clone, Default)]
pub struct SubmitReviewCommand {
    pub name: String,
    pub role: String,
    pub comment: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReviewResult {
    pub review: Review,
    pub outcome: CommitOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitReviewError {
    #[error("{0}")]
    Rejected(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error(transparent)]
    Commit(#[from] CommitError),
}

#[async_trait]
pub trait SubmitReviewUseCase: Send + Sync {
    /// Run the rating gate and publish an accepted review.
    async fn execute(&self, command: SubmitReviewCommand)
        -> Result<SubmitReviewResult, SubmitReviewError>;

    /// Prepend an already accepted review and commit the document.
    async fn publish(&self, review: Review) -> Result<SubmitReviewResult, SubmitReviewError>;
}
