mod ask;
mod list_questions;

pub use ask::*;
pub use list_questions::*;
