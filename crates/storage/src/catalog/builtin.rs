use std::collections::BTreeMap;

use tutor_core::model::{ExpectedAnswer, ProblemDraft};

fn draft(
    id: &str,
    category: &str,
    statement: &str,
    targets: &[(&str, ExpectedAnswer)],
    units: &[&str],
) -> ProblemDraft {
    ProblemDraft {
        id: id.to_string(),
        category: category.to_string(),
        statement: statement.to_string(),
        targets: targets
            .iter()
            .map(|(name, expected)| ((*name).to_string(), expected.clone()))
            .collect::<BTreeMap<_, _>>(),
        required_units: units.iter().map(|unit| (*unit).to_string()).collect(),
        hw_title: None,
        hw_subtitle: None,
    }
}

/// Problems that ship with the app and back-fill whatever the data file lacks.
#[must_use]
pub fn builtin_drafts() -> Vec<ProblemDraft> {
    use ExpectedAnswer::{Numeric, Symbolic};

    vec![
        draft(
            "176",
            "Impulse and Momentum",
            "A 75-g projectile traveling at 600 m/s strikes and becomes embedded in the 50-kg \
             block, which is initially stationary. Compute the energy lost during the impact. \
             Express your answer as an absolute value |ΔE| and as a percentage n of the original \
             system energy E.",
            &[("|ΔE|", Numeric(13480.0)), ("n", Numeric(99.85))],
            &["J", "%"],
        ),
        draft(
            "198",
            "Impulse and Momentum",
            "The 450-kg ram of a pile driver falls 1.4 m from rest and strikes the top of a \
             240-kg pile embedded 0.9 m in the ground. Upon impact the ram is seen to move with \
             the pile with no noticeable rebound. Determine the velocity v of the pile and ram \
             immediately after impact.",
            &[("v", Numeric(3.42))],
            &["m/s"],
        ),
        draft(
            "209",
            "Work and Energy / Momentum",
            "The cylindrical plug A of mass m_A is released from rest at B and slides down the \
             smooth circular guide. The plug strikes the block C and becomes embedded in it. \
             Write the expression for the distance s which the block and plug slide before \
             coming to rest. The coefficient of kinetic friction between the block and the \
             horizontal surface is μ_k.",
            &[("s", Symbolic("m_A^2 * r / (μ_k * (m_A + m_C)^2)".to_string()))],
            &["m"],
        ),
        draft(
            "239",
            "Impact",
            "Tennis balls are usually rejected if they fail to rebound to waist level when \
             dropped from shoulder level. If a ball just passes the test as indicated in the \
             figure, determine the coefficient of restitution $e$ and the percentage $n$ of the \
             original energy lost during the impact.",
            &[("e", Numeric(0.829)), ("n", Numeric(31.2))],
            &["unitless", "%"],
        ),
        draft(
            "249",
            "Impact",
            "In the selection of the ram of a pile driver, it is desired that the ram lose all \
             of its kinetic energy at each blow. Hence, the velocity of the ram is zero \
             immediately after impact. The mass of each pile to be driven is 300 kg, and \
             experience has shown that a coefficient of restitution of 0.3 can be expected. What \
             should be the mass $m$ of the ram? Compute the velocity $v$ of the pile immediately \
             after impact if the ram is dropped from a height of 4 m onto the pile. Also compute \
             the energy loss $\\Delta E$ due to impact at each blow.",
            &[
                ("m", Numeric(90.0)),
                ("v", Numeric(2.66)),
                ("|ΔE|", Numeric(3530.0)),
            ],
            &["kg", "m/s", "J"],
        ),
        draft(
            "252",
            "Impact",
            "Determine the value of the coefficient of restitution $e$ which results in the \
             final velocity $v'$ being perpendicular to the initial velocity $v$. The initial \
             velocity $v$ makes an angle of 60° with the wall as shown.",
            &[("e", Numeric(0.333))],
            &["unitless"],
        ),
    ]
}
