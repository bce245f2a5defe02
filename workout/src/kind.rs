use std::{fmt, str::FromStr};

use crate::WorkoutError;

/// Closed set of supported activities.
///
/// Each kind is addressed by a three letter tag coming from the tracker
/// (`SWM`, `RUN`, `WLK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityKind {
    Swimming,
    Running,
    Walking,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [Self::Swimming, Self::Running, Self::Walking];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::Walking => "WLK",
        }
    }

    /// Name printed in the summary message.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
        }
    }

    /// Number of raw fields a package of this kind carries.
    pub const fn arity(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::Walking => 4,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ActivityKind {
    type Err = WorkoutError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| WorkoutError::UnknownActivityKind {
                tag: tag.to_owned(),
            })
    }
}
