pub mod google_oauth_client;
pub mod session_store_memory;
pub mod session_store_redis;

pub use google_oauth_client::GoogleOAuthClient;
pub use session_store_memory::InMemorySessionStore;
pub use session_store_redis::RedisSessionStore;
