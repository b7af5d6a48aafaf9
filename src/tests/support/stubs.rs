use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::Map;
use uuid::Uuid;

use crate::modules::admin::adapter::outgoing::jwt::{AdminTokenConfig, AdminTokenService};
use crate::modules::admin::application::ports::{
    incoming::use_cases::{AdminLoginCommand, AdminLoginError, AdminLoginUseCase},
    outgoing::{AdminTokenProvider, IssuedToken},
};
use crate::modules::content::adapter::outgoing::MemoryKeyValueStore;
use crate::modules::content::application::{
    domain::entities::ContentDocument,
    ports::{
        incoming::use_cases::{CommitError, CommitOutcome, ContentSync, LoadOutcome},
        outgoing::{RemoteContentStore, RemoteStoreError},
    },
    services::{ContentSyncService, LocalContentStore},
};
use crate::modules::messages::application::{
    domain::message::{ContactMessage, NewMessage},
    ports::outgoing::{MessageRepository, MessageRepositoryError},
};
use crate::modules::oauth::adapter::incoming::web::VisitorSessions;
use crate::modules::oauth::adapter::outgoing::InMemorySessionStore;
use crate::modules::oauth::application::{
    domain::profile::UserProfile,
    ports::incoming::use_cases::{SignInError, SignInUseCase},
};
use crate::shared::config::SessionConfig;

pub const TEST_ADMIN_SECRET: &str = "test-admin-token-secret";
pub const TEST_ADMIN_USERNAME: &str = "owner";
pub const TEST_SESSION_SECRET: &str = "test-session-secret";

// ──────────────────────────────────────────────────────────
// Content
// ──────────────────────────────────────────────────────────

/// Remote store kept in memory. Mirrors the single-row table: upserts
/// replace the row, never add one.
#[derive(Default)]
pub struct InMemoryRemoteContentStore {
    row: Mutex<Option<ContentDocument>>,
}

impl InMemoryRemoteContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: ContentDocument) -> Self {
        Self {
            row: Mutex::new(Some(document)),
        }
    }

    pub fn stored(&self) -> Option<ContentDocument> {
        self.row.lock().unwrap().clone()
    }

    pub fn row_count(&self) -> usize {
        usize::from(self.row.lock().unwrap().is_some())
    }
}

#[async_trait]
impl RemoteContentStore for InMemoryRemoteContentStore {
    async fn fetch_content(&self) -> Result<ContentDocument, RemoteStoreError> {
        self.stored().ok_or(RemoteStoreError::NotFound)
    }

    async fn upsert_content(&self, document: &ContentDocument) -> Result<(), RemoteStoreError> {
        *self.row.lock().unwrap() = Some(document.clone());
        Ok(())
    }
}

/// A synchronizer whose local and remote copies both start from `document`.
pub fn seeded_content_sync(document: ContentDocument) -> Arc<ContentSyncService> {
    let local = LocalContentStore::new(Arc::new(MemoryKeyValueStore::new()));
    local.save_document(&document).unwrap();
    let remote = Arc::new(InMemoryRemoteContentStore::with_document(document));
    Arc::new(ContentSyncService::new(local, remote))
}

/// Records every committed document; optionally fails the local write.
#[derive(Default)]
pub struct RecordingContentSync {
    fail_local_write: bool,
    commits: Mutex<Vec<ContentDocument>>,
}

impl RecordingContentSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_local_write() -> Self {
        Self {
            fail_local_write: true,
            ..Self::default()
        }
    }

    pub fn commits(&self) -> Vec<ContentDocument> {
        self.commits.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSync for RecordingContentSync {
    async fn load(&self) -> LoadOutcome {
        LoadOutcome::KeepCurrent("no remote in tests".to_string())
    }

    async fn refresh(&self) -> LoadOutcome {
        self.load().await
    }

    async fn snapshot(&self) -> ContentDocument {
        self.commits
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    async fn commit(&self, document: ContentDocument) -> Result<CommitOutcome, CommitError> {
        if self.fail_local_write {
            return Err(CommitError::LocalWriteFailed(
                "read-only file system".to_string(),
            ));
        }
        self.commits.lock().unwrap().push(document);
        Ok(CommitOutcome::Synced)
    }
}

// ──────────────────────────────────────────────────────────
// Sessions and admin tokens
// ──────────────────────────────────────────────────────────

pub fn test_sessions() -> VisitorSessions {
    VisitorSessions::new(
        Arc::new(InMemorySessionStore::new()),
        &SessionConfig {
            secret: TEST_SESSION_SECRET.to_string(),
            ttl_seconds: 3600,
            secure_cookie: false,
        },
    )
}

pub fn test_admin_tokens() -> Arc<dyn AdminTokenProvider + Send + Sync> {
    Arc::new(AdminTokenService::new(AdminTokenConfig {
        secret_key: TEST_ADMIN_SECRET.to_string(),
        expiry_seconds: 3600,
        admin_username: Some(TEST_ADMIN_USERNAME.to_string()),
    }))
}

/// `Authorization` header carrying a valid admin token for `username`.
pub fn admin_auth_header(username: &str) -> (&'static str, String) {
    let token = test_admin_tokens()
        .issue_token(username)
        .expect("test token")
        .token;
    ("Authorization", format!("Bearer {token}"))
}

// ──────────────────────────────────────────────────────────
// Admin login
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubAdminLoginUseCase {
    result: Result<IssuedToken, AdminLoginError>,
}

impl StubAdminLoginUseCase {
    pub fn accepting(token: &str) -> Self {
        Self {
            result: Ok(IssuedToken {
                token: token.to_string(),
                expires_in: 3600,
            }),
        }
    }

    pub fn failing(error: AdminLoginError) -> Self {
        Self { result: Err(error) }
    }
}

impl Default for StubAdminLoginUseCase {
    fn default() -> Self {
        Self::failing(AdminLoginError::Disabled)
    }
}

#[async_trait]
impl AdminLoginUseCase for StubAdminLoginUseCase {
    async fn execute(&self, _command: AdminLoginCommand) -> Result<IssuedToken, AdminLoginError> {
        self.result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// OAuth sign-in
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubSignInUseCase {
    result: Result<UserProfile, SignInError>,
}

impl StubSignInUseCase {
    pub fn succeeding(profile: UserProfile) -> Self {
        Self {
            result: Ok(profile),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(SignInError::ExchangeFailed("invalid_grant".to_string())),
        }
    }
}

impl Default for StubSignInUseCase {
    fn default() -> Self {
        Self::succeeding(UserProfile::new(Map::new()))
    }
}

#[async_trait]
impl SignInUseCase for StubSignInUseCase {
    fn authorization_url(&self) -> String {
        "https://accounts.google.com/o/oauth2/v2/auth?client_id=test-client&response_type=code"
            .to_string()
    }

    async fn complete(&self, code: &str) -> Result<UserProfile, SignInError> {
        if code.is_empty() {
            return Err(SignInError::MissingCode);
        }
        self.result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// Messages
// ──────────────────────────────────────────────────────────

/// Message table kept in memory. Each insert is stamped one second after
/// the previous one so ordering is deterministic.
#[derive(Default)]
pub struct InMemoryMessageRepository {
    unconfigured: bool,
    rows: Mutex<Vec<ContactMessage>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unconfigured() -> Self {
        Self {
            unconfigured: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<ContactMessage> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn insert(&self, message: &NewMessage) -> Result<ContactMessage, MessageRepositoryError> {
        if self.unconfigured {
            return Err(MessageRepositoryError::NotConfigured);
        }
        let mut rows = self.rows.lock().unwrap();
        let stored = ContactMessage {
            id: Uuid::new_v4(),
            name: message.name().to_string(),
            email: message.email().to_string(),
            subject: message.subject().to_string(),
            message: message.message().to_string(),
            created_at: Utc::now() + Duration::seconds(rows.len() as i64),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, MessageRepositoryError> {
        if self.unconfigured {
            return Err(MessageRepositoryError::NotConfigured);
        }
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}
