pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::health::ReadinessCheck;
use crate::modules::admin::adapter::incoming::cli::{hash_password_from, HASH_PASSWORD_COMMAND};
use crate::modules::admin::adapter::outgoing::{
    jwt::{AdminTokenConfig, AdminTokenService},
    security::Argon2Hasher,
};
use crate::modules::admin::application::{
    ports::{
        incoming::use_cases::{AdminLoginUseCase, DraftWorkspaceUseCase},
        outgoing::AdminTokenProvider,
    },
    services::{AdminLoginService, DraftWorkspaceService},
};
use crate::modules::content::adapter::outgoing::{
    ContentStorePostgres, FileKeyValueStore, UnconfiguredContentStore,
};
use crate::modules::content::application::{
    domain::ids::IdGenerator,
    ports::{
        incoming::use_cases::{ContentSync, LoadOutcome},
        outgoing::RemoteContentStore,
    },
    services::{ContentSyncService, LocalContentStore},
};
use crate::modules::messages::adapter::outgoing::{
    MessageRepositoryPostgres, UnconfiguredMessageRepository,
};
use crate::modules::messages::application::{
    ports::{
        incoming::use_cases::{ListMessagesUseCase, SendMessageUseCase},
        outgoing::MessageRepository,
    },
    services::{ListMessagesService, SendMessageService},
};
use crate::modules::oauth::adapter::incoming::web::VisitorSessions;
use crate::modules::oauth::adapter::outgoing::{
    GoogleOAuthClient, InMemorySessionStore, RedisSessionStore,
};
use crate::modules::oauth::application::{
    ports::{incoming::use_cases::SignInUseCase, outgoing::SessionStore},
    services::SignInService,
};
use crate::modules::reviews::application::{
    ports::incoming::use_cases::SubmitReviewUseCase, services::SubmitReviewService,
};
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Pool, Runtime};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSync + Send + Sync>,
    pub drafts: Arc<dyn DraftWorkspaceUseCase + Send + Sync>,
    pub admin_login: Arc<dyn AdminLoginUseCase + Send + Sync>,
    pub submit_review: Arc<dyn SubmitReviewUseCase + Send + Sync>,
    pub send_message: Arc<dyn SendMessageUseCase + Send + Sync>,
    pub list_messages: Arc<dyn ListMessagesUseCase + Send + Sync>,
    pub sign_in: Arc<dyn SignInUseCase + Send + Sync>,
    pub sessions: VisitorSessions,
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(url: &str) -> Option<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    match Database::connect(opt).await {
        Ok(conn) => Some(Arc::new(conn)),
        Err(e) => {
            warn!(error = %e, "Database unreachable, remote storage disabled");
            None
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn create_redis_pool(url: &str) -> Option<Arc<Pool>> {
    match Config::from_url(url).create_pool(Some(Runtime::Tokio1)) {
        Ok(pool) => Some(Arc::new(pool)),
        Err(e) => {
            warn!(error = %e, "Invalid REDIS_URL, falling back to in-memory sessions");
            None
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let server_url = config.server.bind_address();

    // Optional backends
    let db = match &config.storage.database_url {
        Some(url) => connect_database(url).await,
        None => {
            info!("DATABASE_URL not set, content stays local");
            None
        }
    };
    let redis = config.storage.redis_url.as_deref().and_then(create_redis_pool);

    // Content
    let kv_store = FileKeyValueStore::open(&config.server.local_store_dir)
        .map_err(io::Error::other)?;
    let local = LocalContentStore::new(Arc::new(kv_store));
    let remote: Arc<dyn RemoteContentStore> = match &db {
        Some(db) => Arc::new(ContentStorePostgres::new(Arc::clone(db))),
        None => Arc::new(UnconfiguredContentStore),
    };
    let content = Arc::new(ContentSyncService::new(local, remote));
    if let LoadOutcome::KeepCurrent(reason) = content.refresh().await {
        info!(reason = %reason, "Serving locally stored content");
    }
    let ids = Arc::new(IdGenerator::new());

    // Admin
    let admin_tokens = AdminTokenService::new(AdminTokenConfig {
        secret_key: config.admin.token_secret.clone(),
        expiry_seconds: config.admin.token_expiry_seconds,
        admin_username: config.admin.credentials.as_ref().map(|c| c.username.clone()),
    });
    if config.admin.credentials.is_none() {
        warn!("ADMIN_USERNAME / ADMIN_PASSWORD_HASH not set, admin login disabled");
    }
    let admin_login = AdminLoginService::new(
        config.admin.credentials.clone(),
        Arc::new(Argon2Hasher::new()),
        Arc::new(admin_tokens.clone()),
    );

    // Messages
    let messages: Arc<dyn MessageRepository> = match &db {
        Some(db) => Arc::new(MessageRepositoryPostgres::new(Arc::clone(db))),
        None => Arc::new(UnconfiguredMessageRepository),
    };

    // Visitor sessions and sign-in
    let session_store: Arc<dyn SessionStore> = match &redis {
        Some(pool) => Arc::new(RedisSessionStore::new(Arc::clone(pool))),
        None => Arc::new(InMemorySessionStore::new()),
    };
    let google = GoogleOAuthClient::new(&config.oauth)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let state = AppState {
        drafts: Arc::new(DraftWorkspaceService::new(content.clone(), Arc::clone(&ids))),
        submit_review: Arc::new(SubmitReviewService::new(content.clone(), Arc::clone(&ids))),
        content,
        admin_login: Arc::new(admin_login),
        send_message: Arc::new(SendMessageService::new(Arc::clone(&messages))),
        list_messages: Arc::new(ListMessagesService::new(messages)),
        sign_in: Arc::new(SignInService::new(Arc::new(google))),
        sessions: VisitorSessions::new(session_store, &config.session),
    };

    let token_provider_arc: Arc<dyn AdminTokenProvider + Send + Sync> = Arc::new(admin_tokens);
    let readiness_checks = ReadinessCheck { db, redis };
    let serve_static = config.server.mode.is_production();
    let static_dir = config.server.static_dir.clone();

    info!(address = %server_url, production = serve_static, "Server listening");

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(readiness_checks.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            );

        // Must stay last: it answers every path nothing else matched.
        if serve_static {
            app = app.service(crate::modules::site::spa_service(&static_dir));
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Content
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_content_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_graphics_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_cv_handler);
    // Reviews
    cfg.service(crate::modules::reviews::adapter::incoming::web::routes::submit_review_handler);
    cfg.service(crate::modules::reviews::adapter::incoming::web::routes::review_prompt_handler);
    // Messages
    cfg.service(crate::modules::messages::adapter::incoming::web::routes::send_message_handler);
    cfg.service(crate::modules::messages::adapter::incoming::web::routes::list_messages_handler);
    // Chat
    cfg.service(crate::modules::chat::adapter::incoming::web::routes::list_chat_questions_handler);
    cfg.service(crate::modules::chat::adapter::incoming::web::routes::ask_chat_handler);
    // Visitor auth
    cfg.service(crate::modules::oauth::adapter::incoming::web::routes::google_auth_url_handler);
    cfg.service(crate::modules::oauth::adapter::incoming::web::routes::google_callback_handler);
    cfg.service(crate::modules::oauth::adapter::incoming::web::routes::auth_me_handler);
    cfg.service(crate::modules::oauth::adapter::incoming::web::routes::auth_logout_handler);
    cfg.service(crate::modules::oauth::adapter::incoming::web::routes::session_flags_handler);
    // Admin
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::admin_login_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::admin_logout_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::commit_draft_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::get_draft_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::open_draft_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::discard_draft_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::set_draft_field_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::add_draft_item_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::remove_draft_item_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::add_service_item_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::update_service_item_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::remove_service_item_handler);
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn print_password_hash() -> io::Result<()> {
    let stdin = io::stdin();
    let hash = hash_password_from(stdin.lock(), &Argon2Hasher::new())
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    println!("{hash}");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if std::env::args().nth(1).as_deref() == Some(HASH_PASSWORD_COMMAND) {
        if let Err(e) = print_password_hash() {
            eprintln!("Error hashing password: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
