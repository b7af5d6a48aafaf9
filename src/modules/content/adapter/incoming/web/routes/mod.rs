mod get_content;
mod get_cv;
mod get_graphics;

pub use get_content::*;
pub use get_cv::*;
pub use get_graphics::*;
