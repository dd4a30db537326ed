//! Groups problems into display buckets from their free-text category.
//!
//! Rules are evaluated in order and the first match wins. Later rules are only
//! reachable when every earlier one failed, so the order is part of the
//! contract: `"Work and Energy / Momentum"` lands in the momentum bucket.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::Problem;

static HW_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(?\s*\bhw\s*[0-9]+\b\s*\)?").expect("hw label pattern is valid")
});

static SORT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-z_]+_").expect("sort prefix pattern is valid"));

/// A display grouping. The label carries a sort prefix (`"02_..."`, `"zzz_..."`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bucket(String);

impl Bucket {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Raw label, used as the sort key.
    #[must_use]
    pub fn sort_key(&self) -> &str {
        &self.0
    }

    /// Label without its sort prefix.
    #[must_use]
    pub fn display_name(&self) -> String {
        SORT_PREFIX.replace(&self.0, "").into_owned()
    }
}

type Predicate = fn(&str) -> bool;

fn is_statics(c: &str) -> bool {
    c.contains("statics")
}

fn is_plain_kinematics(c: &str) -> bool {
    c.contains("kinematics") && !c.contains("particle")
}

fn is_curvilinear(c: &str) -> bool {
    c.contains("curvilinear")
}

fn is_rectilinear(c: &str) -> bool {
    c.contains("rectilinear")
}

fn is_impulse_momentum(c: &str) -> bool {
    c.contains("impulse") || c.contains("momentum")
}

fn is_work_energy(c: &str) -> bool {
    c.contains("work") || c.contains("energy")
}

/// Ordered `(predicate, label)` table; predicates see lower-cased, cleaned text.
const RULES: &[(Predicate, &str)] = &[
    (is_statics, "00_Statics"),
    (is_plain_kinematics, "01_Particle Kinematics"),
    (is_curvilinear, "02_Kinetics of Particles (Curvilinear)"),
    (is_rectilinear, "03_Kinetics of Particles (Rectilinear)"),
    (is_impulse_momentum, "04_Impulse and Momentum"),
    // Sorts last.
    (is_work_energy, "zzz_Work and Energy"),
];

/// Strip homework-label noise such as `"(HW 7)"` or `"HW 8"`.
#[must_use]
pub fn clean_category(category: &str) -> String {
    let stripped = HW_LABEL.replace_all(category, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Assign a bucket to a free-text category.
#[must_use]
pub fn classify(category: &str) -> Bucket {
    let cleaned = clean_category(category);
    let lowered = cleaned.to_lowercase();
    match RULES.iter().find(|(predicate, _)| predicate(&lowered)) {
        Some((_, label)) => Bucket::new(*label),
        None => Bucket::new(cleaned),
    }
}

/// Group problems by bucket, buckets in sort-key order, problems in input order.
#[must_use]
pub fn group_by_bucket<'a, I>(problems: I) -> Vec<(Bucket, Vec<&'a Problem>)>
where
    I: IntoIterator<Item = &'a Problem>,
{
    let mut groups: BTreeMap<Bucket, Vec<&'a Problem>> = BTreeMap::new();
    for problem in problems {
        groups
            .entry(classify(problem.category()))
            .or_default()
            .push(problem);
    }
    groups.into_iter().collect()
}
