mod content_store_postgres;
mod file_key_value_store;
mod memory_key_value_store;
pub mod sea_orm_entity;

pub use content_store_postgres::{ContentStorePostgres, UnconfiguredContentStore};
pub use file_key_value_store::FileKeyValueStore;
pub use memory_key_value_store::MemoryKeyValueStore;
