mod key_value_store;
mod remote_content_store;

pub use key_value_store::{KeyValueError, KeyValueStore};
pub use remote_content_store::{RemoteContentStore, RemoteStoreError};
