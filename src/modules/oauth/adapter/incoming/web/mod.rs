pub mod routes;
pub mod session_cookie;
pub mod visitor_sessions;

pub use visitor_sessions::{
    VisitorSession, VisitorSessions, PROVISIONAL_TTL_SECONDS, SESSION_COOKIE,
};
