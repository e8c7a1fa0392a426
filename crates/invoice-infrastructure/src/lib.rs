pub mod config;
pub mod file_ingest;
pub mod paths;
pub mod storage;

pub use crate::config::AppConfig;
pub use crate::file_ingest::{FileIngestor, IngestedFile};
pub use crate::paths::InvoicePaths;
pub use crate::storage::{InMemoryStore, JsonFileStore};
