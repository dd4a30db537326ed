use std::fmt;

use chrono::{DateTime, Utc};

/// Mastery score on the 0..=10 rubric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 10;

    /// Clamp any integer into the rubric range.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(0, i64::from(Self::MAX));
        Self(u8::try_from(clamped).unwrap_or(Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Outcome of a submitted tutoring session.
///
/// Generated once per submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    student_name: String,
    topic: String,
    score: Score,
    narrative: String,
    generated_at: DateTime<Utc>,
}

impl Report {
    #[must_use]
    pub fn new(
        student_name: impl Into<String>,
        topic: impl Into<String>,
        score: Score,
        narrative: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            topic: topic.into(),
            score,
            narrative: narrative.into(),
            generated_at,
        }
    }

    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    #[must_use]
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Subject line used when the report is mailed to the instructor.
    #[must_use]
    pub fn email_subject(&self) -> String {
        format!(
            "Eng. Tutor ({}): {} [Score: {}]",
            self.student_name, self.topic, self.score
        )
    }
}
