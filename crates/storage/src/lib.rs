#![forbid(unsafe_code)]

pub mod catalog;
pub mod repository;

pub use catalog::{builtin_problems, load_catalog, merge_first_wins, parse_catalog};
pub use repository::{InMemoryRepository, ProblemRepository, Storage, StorageError};
