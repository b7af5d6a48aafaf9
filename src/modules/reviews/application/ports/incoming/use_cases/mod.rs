mod submit_review;

pub use submit_review::*;
