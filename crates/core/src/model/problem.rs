use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{IdError, ProblemId, TargetName};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    #[error(transparent)]
    InvalidId(#[from] IdError),

    #[error("problem statement cannot be empty")]
    EmptyStatement,
}

//
// ─── EXPECTED ANSWER ───────────────────────────────────────────────────────────
//

/// The value a target is checked against.
///
/// Serialized as a bare JSON number or string, matching the problem data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpectedAnswer {
    Numeric(f64),
    Symbolic(String),
}

impl ExpectedAnswer {
    #[must_use]
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Self::Symbolic(_))
    }
}

impl From<f64> for ExpectedAnswer {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for ExpectedAnswer {
    fn from(value: &str) -> Self {
        Self::Symbolic(value.to_string())
    }
}

impl fmt::Display for ExpectedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Symbolic(expr) => f.write_str(expr),
        }
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated problem record, as read from a data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemDraft {
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub statement: String,
    #[serde(default)]
    pub targets: BTreeMap<String, ExpectedAnswer>,
    #[serde(default)]
    pub required_units: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hw_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hw_subtitle: Option<String>,
}

impl ProblemDraft {
    /// Validate the draft into an immutable `Problem`.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError` if the id, a target name, or the statement is blank.
    pub fn validate(self) -> Result<Problem, ProblemError> {
        let id = ProblemId::new(self.id)?;
        let statement = self.statement.trim().to_string();
        if statement.is_empty() {
            return Err(ProblemError::EmptyStatement);
        }

        let mut targets = BTreeMap::new();
        for (name, expected) in self.targets {
            targets.insert(TargetName::new(name)?, expected);
        }

        Ok(Problem {
            id,
            category: self.category.trim().to_string(),
            statement,
            targets,
            required_units: self.required_units,
            hw_title: normalize_optional(self.hw_title),
            hw_subtitle: normalize_optional(self.hw_subtitle),
        })
    }
}

//
// ─── PROBLEM ───────────────────────────────────────────────────────────────────
//

/// A practice problem with the quantities the student is expected to derive.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    id: ProblemId,
    category: String,
    statement: String,
    targets: BTreeMap<TargetName, ExpectedAnswer>,
    required_units: Vec<String>,
    hw_title: Option<String>,
    hw_subtitle: Option<String>,
}

impl Problem {
    #[must_use]
    pub fn id(&self) -> &ProblemId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn statement(&self) -> &str {
        &self.statement
    }

    #[must_use]
    pub fn targets(&self) -> &BTreeMap<TargetName, ExpectedAnswer> {
        &self.targets
    }

    /// Units the answer is expected in. Informational only.
    #[must_use]
    pub fn required_units(&self) -> &[String] {
        &self.required_units
    }

    #[must_use]
    pub fn hw_title(&self) -> Option<&str> {
        self.hw_title.as_deref()
    }

    #[must_use]
    pub fn hw_subtitle(&self) -> Option<&str> {
        self.hw_subtitle.as_deref()
    }

    /// Label shown under the chat: `"{hw_title} ({hw_subtitle})"`, else the category.
    #[must_use]
    pub fn footer_label(&self) -> String {
        match (self.hw_title.as_deref(), self.hw_subtitle.as_deref()) {
            (Some(title), Some(subtitle)) => format!("{title} ({subtitle})"),
            _ if !self.category.is_empty() => self.category.clone(),
            _ => "Engineering Practice".to_string(),
        }
    }

    /// Label for the problem button inside a bucket.
    ///
    /// Prefers the homework subtitle, then the category suffix after the last `:`.
    /// Falls back to `"Problem {id}"` when the label would just repeat the bucket name.
    #[must_use]
    pub fn button_label(&self, bucket_display: &str) -> String {
        let label = match self.hw_subtitle.as_deref() {
            Some(subtitle) => capitalize(subtitle),
            None => self
                .category
                .rsplit(':')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string(),
        };
        if label.is_empty() || label == bucket_display {
            format!("Problem {}", self.id)
        } else {
            label
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
