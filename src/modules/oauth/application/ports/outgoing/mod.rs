pub mod identity_provider;
pub mod session_store;

pub use identity_provider::{IdentityProvider, IdentityProviderError};
pub use session_store::{SessionStore, SessionStoreError};
