use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tutor_core::model::{Problem, ProblemId};

use crate::catalog::load_catalog;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Read access to the problem catalog.
#[async_trait]
pub trait ProblemRepository: Send + Sync {
    /// All problems in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    async fn list_problems(&self) -> Result<Vec<Problem>, StorageError>;

    /// Fetch a problem by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_problem(&self, id: &ProblemId) -> Result<Problem, StorageError>;
}

/// In-memory catalog. Insertion keeps the first problem seen for an id.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    problems: Arc<RwLock<Vec<Problem>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from problems that are already de-duplicated.
    #[must_use]
    pub fn from_problems(problems: Vec<Problem>) -> Self {
        Self {
            problems: Arc::new(RwLock::new(problems)),
        }
    }

    /// Add a problem unless its id is already present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the id exists, or `Connection` on a poisoned lock.
    pub fn insert_problem(&self, problem: Problem) -> Result<(), StorageError> {
        let mut guard = self
            .problems
            .write()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.iter().any(|existing| existing.id() == problem.id()) {
            return Err(StorageError::Conflict);
        }
        guard.push(problem);
        Ok(())
    }
}

#[async_trait]
impl ProblemRepository for InMemoryRepository {
    async fn list_problems(&self) -> Result<Vec<Problem>, StorageError> {
        let guard = self
            .problems
            .read()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn get_problem(&self, id: &ProblemId) -> Result<Problem, StorageError> {
        let guard = self
            .problems
            .read()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|problem| problem.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub problems: Arc<dyn ProblemRepository>,
}

impl Storage {
    /// Empty catalog, mostly for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            problems: Arc::new(InMemoryRepository::new()),
        }
    }

    /// Catalog loaded from a JSON file merged with the built-in problems.
    ///
    /// A missing or unreadable file is tolerated; see [`load_catalog`].
    #[must_use]
    pub fn from_catalog_file(path: &Path) -> Self {
        Self {
            problems: Arc::new(InMemoryRepository::from_problems(load_catalog(path))),
        }
    }
}
