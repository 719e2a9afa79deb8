//! Key-value store implementations

pub mod document;
mod json_file;
mod memory;

pub use json_file::{default_data_dir, JsonFileStore, StoreInfo, STORE_FILE_NAME};
pub use memory::MemoryStore;
