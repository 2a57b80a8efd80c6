#![forbid(unsafe_code)]

pub mod catalog;
pub mod repository;
pub mod sqlite;

pub use catalog::{CatalogError, load_catalog, parse_catalog};
pub use repository::{
    AnswerRepository, InMemoryRepository, InterviewRepository, KeyValueStore, Storage,
    StorageError,
};
pub use sqlite::{DEFAULT_DB_URL, SqliteInitError, SqliteRepository};
