//! Decides whether free-form student text states an expected answer.
//!
//! Numeric answers are compared within a tolerance relative to the expected
//! value. Symbolic answers use a whitespace- and case-insensitive substring
//! check, which will reject algebraically equivalent expressions written in a
//! different form.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ExpectedAnswer;

/// Relative tolerance used when none is given (5%).
pub const DEFAULT_TOLERANCE: f64 = 0.05;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?[0-9]+(?:\.[0-9]+)?").expect("number pattern is valid")
});

/// Match with the default 5% tolerance.
#[must_use]
pub fn matches(student_text: &str, expected: &ExpectedAnswer) -> bool {
    matches_within(student_text, expected, DEFAULT_TOLERANCE)
}

/// Match with an explicit tolerance. Never fails; unparseable text is simply no match.
#[must_use]
pub fn matches_within(student_text: &str, expected: &ExpectedAnswer, tolerance: f64) -> bool {
    match expected {
        ExpectedAnswer::Numeric(correct) => first_number(student_text)
            .is_some_and(|value| within_tolerance(value, *correct, tolerance)),
        ExpectedAnswer::Symbolic(expr) => {
            normalize_expression(student_text).contains(&normalize_expression(expr))
        }
    }
}

/// First signed decimal or integer literal in `text`.
#[must_use]
pub fn first_number(text: &str) -> Option<f64> {
    NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn within_tolerance(value: f64, correct: f64, tolerance: f64) -> bool {
    if correct == 0.0 {
        // Relative tolerance is meaningless at zero; treat it as absolute.
        return value.abs() < tolerance;
    }
    (value - correct).abs() <= tolerance * correct.abs()
}

fn normalize_expression(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
