mod auth_logout;
mod auth_me;
mod google_auth_url;
mod google_callback;
mod session_flags;

pub use auth_logout::*;
pub use auth_me::*;
pub use google_auth_url::*;
pub use google_callback::*;
pub use session_flags::*;
