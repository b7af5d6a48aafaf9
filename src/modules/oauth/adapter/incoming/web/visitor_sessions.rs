use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    HttpRequest,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::session_cookie::SessionCookieSigner;
use crate::modules::oauth::application::{
    domain::session::SessionData,
    ports::outgoing::{SessionStore, SessionStoreError},
};
use crate::shared::config::SessionConfig;

pub const SESSION_COOKIE: &str = "portfolio.sid";

/// Lifetime of a session created only to remember the review prompt.
pub const PROVISIONAL_TTL_SECONDS: i64 = 30 * 60;

/// One visitor's session as seen by a single request.
#[derive(Debug, Clone, Default)]
pub struct VisitorSession {
    id: Option<String>,
    pub data: SessionData,
}

impl VisitorSession {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Cookie-addressed session lookup shared by every route that reads or
/// updates visitor state.
#[derive(Clone)]
pub struct VisitorSessions {
    store: Arc<dyn SessionStore>,
    signer: SessionCookieSigner,
    ttl_seconds: i64,
    secure_cookie: bool,
}

impl VisitorSessions {
    pub fn new(store: Arc<dyn SessionStore>, config: &SessionConfig) -> Self {
        Self {
            store,
            signer: SessionCookieSigner::new(&config.secret, config.ttl_seconds),
            ttl_seconds: config.ttl_seconds,
            secure_cookie: config.secure_cookie,
        }
    }

    /// Never fails: an unknown, forged or unreadable session starts fresh.
    pub async fn load(&self, req: &HttpRequest) -> VisitorSession {
        let Some(id) = self.session_id(req) else {
            return VisitorSession::default();
        };

        match self.store.load(&id).await {
            Ok(Some(data)) => VisitorSession { id: Some(id), data },
            Ok(None) => VisitorSession::default(),
            Err(e) => {
                warn!(error = %e, "Session lookup failed, starting a fresh session");
                VisitorSession::default()
            }
        }
    }

    /// Persist the session and return the cookie that addresses it.
    pub async fn save(&self, session: VisitorSession) -> Result<Cookie<'static>, SessionStoreError> {
        self.save_for(session, self.ttl_seconds).await
    }

    /// Like `save`, but a session that did not exist before this request
    /// expires after `PROVISIONAL_TTL_SECONDS`.
    pub async fn save_provisional(
        &self,
        session: VisitorSession,
    ) -> Result<Cookie<'static>, SessionStoreError> {
        let ttl = if session.id.is_some() {
            self.ttl_seconds
        } else {
            self.ttl_seconds.min(PROVISIONAL_TTL_SECONDS)
        };
        self.save_for(session, ttl).await
    }

    /// Move the session data to a fresh id and forget the old one. Used
    /// whenever a request gains privileges.
    pub async fn rotate(
        &self,
        mut session: VisitorSession,
    ) -> Result<Cookie<'static>, SessionStoreError> {
        if let Some(old) = session.id.take() {
            if let Err(e) = self.store.destroy(&old).await {
                warn!(error = %e, "Failed to drop the previous session");
            }
        }
        self.save(session).await
    }

    async fn save_for(
        &self,
        session: VisitorSession,
        ttl_seconds: i64,
    ) -> Result<Cookie<'static>, SessionStoreError> {
        let id = session.id.unwrap_or_else(|| Uuid::new_v4().to_string());

        self.store.save(&id, &session.data, ttl_seconds).await?;

        let value = self
            .signer
            .sign(&id)
            .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;

        Ok(self.cookie(value, ttl_seconds))
    }

    /// Drop the stored session and return a removal cookie.
    pub async fn destroy(&self, req: &HttpRequest) -> Cookie<'static> {
        if let Some(id) = self.session_id(req) {
            if let Err(e) = self.store.destroy(&id).await {
                warn!(error = %e, "Failed to destroy session");
            }
        }

        let mut removal = self.cookie(String::new(), self.ttl_seconds);
        removal.make_removal();
        removal
    }

    fn session_id(&self, req: &HttpRequest) -> Option<String> {
        req.cookie(SESSION_COOKIE)
            .and_then(|cookie| self.signer.verify(cookie.value()))
    }

    fn cookie(&self, value: String, ttl_seconds: i64) -> Cookie<'static> {
        // Browsers drop SameSite=None cookies that are not Secure.
        let same_site = if self.secure_cookie {
            SameSite::None
        } else {
            SameSite::Lax
        };

        Cookie::build(SESSION_COOKIE, value)
            .path("/")
            .http_only(true)
            .secure(self.secure_cookie)
            .same_site(same_site)
            .max_age(CookieDuration::seconds(ttl_seconds))
            .finish()
    }
}
