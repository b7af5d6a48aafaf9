mod admin_login;
mod admin_logout;
mod draft;
mod draft_errors;
mod draft_items;
mod draft_services;

pub use admin_login::*;
pub use admin_logout::*;
pub use draft::*;
pub use draft_items::*;
pub use draft_services::*;
