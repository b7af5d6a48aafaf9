mod submit_review_service;

pub use submit_review_service::SubmitReviewService;
