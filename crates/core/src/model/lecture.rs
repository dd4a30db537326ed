use std::fmt;

/// Topics offered as guided lecture simulations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LectureTopic {
    ProjectileMotion,
    NormalTangent,
    PolarCoordinates,
    RelativeMotion,
}

impl LectureTopic {
    pub const ALL: [LectureTopic; 4] = [
        LectureTopic::ProjectileMotion,
        LectureTopic::NormalTangent,
        LectureTopic::PolarCoordinates,
        LectureTopic::RelativeMotion,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            LectureTopic::ProjectileMotion => "Projectile Motion",
            LectureTopic::NormalTangent => "Normal & Tangent",
            LectureTopic::PolarCoordinates => "Polar Coordinates",
            LectureTopic::RelativeMotion => "Relative Motion",
        }
    }

    /// Course section code, also used as the route slug.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            LectureTopic::ProjectileMotion => "K_2.2",
            LectureTopic::NormalTangent => "K_2.3",
            LectureTopic::PolarCoordinates => "K_2.4",
            LectureTopic::RelativeMotion => "K_2.5",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.code() == code)
    }
}

impl fmt::Display for LectureTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
