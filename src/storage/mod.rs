//! Backends for [`KeyValueStorage`](crate::traits::KeyValueStorage)

pub mod memory_storage;
pub mod folder_storage;

pub use memory_storage::MemoryStorage;
pub use folder_storage::FolderStorage;
