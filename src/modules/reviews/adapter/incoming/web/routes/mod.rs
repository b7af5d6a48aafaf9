mod review_prompt;
mod submit_review;

pub use review_prompt::*;
pub use submit_review::*;
