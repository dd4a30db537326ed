//! Problem catalog loading.
//!
//! The data file is a JSON array of problem records. Records from the file come
//! first, then the built-in problems; when two records share an id the first
//! one wins, including duplicates inside the file itself.

mod builtin;

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info, warn};
use tutor_core::model::{Problem, ProblemDraft};

use crate::repository::StorageError;

pub use builtin::builtin_drafts;

/// Parse a JSON array of problem records.
///
/// Individual records that do not have the problem shape are skipped with a warning;
/// only a document that is not a JSON array at all is an error.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if `json` is not a JSON array.
pub fn parse_catalog(json: &str) -> Result<Vec<ProblemDraft>, StorageError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let mut drafts = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<ProblemDraft>(record) {
            Ok(draft) => drafts.push(draft),
            Err(err) => warn!(index, error = %err, "skipping malformed problem record"),
        }
    }
    Ok(drafts)
}

/// Validate drafts and de-duplicate by id, keeping the first occurrence.
#[must_use]
pub fn merge_first_wins<I>(drafts: I) -> Vec<Problem>
where
    I: IntoIterator<Item = ProblemDraft>,
{
    let mut seen = HashSet::new();
    let mut problems = Vec::new();
    for draft in drafts {
        let raw_id = draft.id.clone();
        let problem = match draft.validate() {
            Ok(problem) => problem,
            Err(err) => {
                warn!(id = %raw_id, error = %err, "skipping invalid problem");
                continue;
            }
        };
        if seen.insert(problem.id().clone()) {
            problems.push(problem);
        } else {
            debug!(id = %problem.id(), "duplicate problem id ignored");
        }
    }
    problems
}

/// The built-in problems alone.
#[must_use]
pub fn builtin_problems() -> Vec<Problem> {
    merge_first_wins(builtin_drafts())
}

/// Load the catalog from `path`, merged with the built-in problems.
///
/// Never fails: a missing or unreadable file falls back to the built-ins.
#[must_use]
pub fn load_catalog(path: &Path) -> Vec<Problem> {
    let from_file = match std::fs::read_to_string(path) {
        Ok(json) => match parse_catalog(&json) {
            Ok(drafts) => drafts,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "problem file unreadable, using built-in problems"
                );
                Vec::new()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no problem file, using built-in problems");
            Vec::new()
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "problem file unreadable, using built-in problems"
            );
            Vec::new()
        }
    };

    let problems = merge_first_wins(from_file.into_iter().chain(builtin_drafts()));
    info!(count = problems.len(), "problem catalog loaded");
    problems
}
