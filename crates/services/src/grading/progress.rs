use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::info;
use tutor_core::matcher::{DEFAULT_TOLERANCE, matches_within};
use tutor_core::model::{ExpectedAnswer, Problem, ProblemId, TargetName};

/// Aggregated view of one problem's progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemProgress {
    pub total: usize,
    pub solved: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Tracks which targets the student has stated correctly, per problem.
///
/// Solved sets only grow: a solved target is never checked again and never
/// reported as newly solved a second time.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    tolerance: f64,
    solved: HashMap<ProblemId, BTreeSet<TargetName>>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::with_tolerance(DEFAULT_TOLERANCE)
    }
}

impl ProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            solved: HashMap::new(),
        }
    }

    /// Create the (empty) solved set for a problem on first visit.
    pub fn visit(&mut self, problem_id: &ProblemId) {
        self.solved.entry(problem_id.clone()).or_default();
    }

    /// Check `student_text` against every unsolved target and return the ones solved now.
    pub fn record_attempt(
        &mut self,
        problem_id: &ProblemId,
        student_text: &str,
        targets: &BTreeMap<TargetName, ExpectedAnswer>,
    ) -> BTreeSet<TargetName> {
        let solved = self.solved.entry(problem_id.clone()).or_default();
        let mut newly_solved = BTreeSet::new();
        for (name, expected) in targets {
            if solved.contains(name) {
                continue;
            }
            if matches_within(student_text, expected, self.tolerance) {
                info!(problem = %problem_id, target = %name, "target solved");
                solved.insert(name.clone());
                newly_solved.insert(name.clone());
            }
        }
        newly_solved
    }

    #[must_use]
    pub fn solved(&self, problem_id: &ProblemId) -> Option<&BTreeSet<TargetName>> {
        self.solved.get(problem_id)
    }

    #[must_use]
    pub fn is_solved(&self, problem_id: &ProblemId, target: &TargetName) -> bool {
        self.solved
            .get(problem_id)
            .is_some_and(|set| set.contains(target))
    }

    #[must_use]
    pub fn progress(&self, problem: &Problem) -> ProblemProgress {
        let total = problem.targets().len();
        let solved = problem
            .targets()
            .keys()
            .filter(|name| self.is_solved(problem.id(), name))
            .count();
        ProblemProgress {
            total,
            solved,
            remaining: total.saturating_sub(solved),
            is_complete: total > 0 && solved == total,
        }
    }

    /// Forget everything; used when the user session is reset.
    pub fn reset(&mut self) {
        self.solved.clear();
    }
}
