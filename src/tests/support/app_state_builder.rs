use actix_web::web;
use std::sync::Arc;

use crate::modules::admin::application::{
    ports::incoming::use_cases::AdminLoginUseCase,
    services::DraftWorkspaceService,
};
use crate::modules::content::application::{
    domain::{entities::ContentDocument, ids::IdGenerator},
    ports::incoming::use_cases::ContentSync,
};
use crate::modules::messages::application::{
    ports::outgoing::MessageRepository,
    services::{ListMessagesService, SendMessageService},
};
use crate::modules::oauth::adapter::incoming::web::VisitorSessions;
use crate::modules::oauth::application::ports::incoming::use_cases::SignInUseCase;
use crate::modules::reviews::application::services::SubmitReviewService;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` for route tests. Anything not overridden is backed
/// by in-memory fakes; drafts and review intake share the chosen content.
#[derive(Default)]
pub struct TestAppStateBuilder {
    content: Option<Arc<dyn ContentSync + Send + Sync>>,
    admin_login: Option<Arc<dyn AdminLoginUseCase + Send + Sync>>,
    messages: Option<Arc<dyn MessageRepository + Send + Sync>>,
    sign_in: Option<Arc<dyn SignInUseCase + Send + Sync>>,
    sessions: Option<VisitorSessions>,
}

impl TestAppStateBuilder {
    pub fn with_content(mut self, content: Arc<dyn ContentSync + Send + Sync>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_admin_login(mut self, uc: impl AdminLoginUseCase + Send + Sync + 'static) -> Self {
        self.admin_login = Some(Arc::new(uc));
        self
    }

    pub fn with_messages(mut self, repository: Arc<dyn MessageRepository + Send + Sync>) -> Self {
        self.messages = Some(repository);
        self
    }

    pub fn with_sign_in(mut self, uc: impl SignInUseCase + Send + Sync + 'static) -> Self {
        self.sign_in = Some(Arc::new(uc));
        self
    }

    pub fn with_sessions(mut self, sessions: VisitorSessions) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let ids = Arc::new(IdGenerator::new());
        let content = self
            .content
            .unwrap_or_else(|| seeded_content_sync(ContentDocument::default()));
        let messages = self
            .messages
            .unwrap_or_else(|| Arc::new(InMemoryMessageRepository::new()));

        web::Data::new(AppState {
            drafts: Arc::new(DraftWorkspaceService::new(content.clone(), ids.clone())),
            submit_review: Arc::new(SubmitReviewService::new(content.clone(), ids)),
            content,
            admin_login: self
                .admin_login
                .unwrap_or_else(|| Arc::new(StubAdminLoginUseCase::default())),
            send_message: Arc::new(SendMessageService::new(messages.clone())),
            list_messages: Arc::new(ListMessagesService::new(messages)),
            sign_in: self
                .sign_in
                .unwrap_or_else(|| Arc::new(StubSignInUseCase::default())),
            sessions: self.sessions.unwrap_or_else(test_sessions),
        })
    }
}
