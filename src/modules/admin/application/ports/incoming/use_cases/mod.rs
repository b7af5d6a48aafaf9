mod admin_login;
mod draft_workspace;

pub use admin_login::*;
pub use draft_workspace::*;
