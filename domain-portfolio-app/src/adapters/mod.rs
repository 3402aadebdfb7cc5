//! Storage adapters implementing `KeyValueStore`.

mod memory_store;

pub use memory_store::MemoryStore;

#[cfg(feature = "json-store")]
mod json_file_store;

#[cfg(feature = "json-store")]
pub use json_file_store::{JsonFileStore, MAX_FILE_SIZE};
