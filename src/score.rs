use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Id;

/// One player's score in one match.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Score {
    #[default]
    Zero,
    Half,
    One,
}

impl Score {
    /// The score in half-points, so totals stay in integers.
    #[must_use]
    pub fn half_points(self) -> u32 {
        match self {
            Self::Zero => 0,
            Self::Half => 1,
            Self::One => 2,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "0"),
            Self::Half => write!(f, "0.5"),
            Self::One => write!(f, "1"),
        }
    }
}

/// A cumulative score, counted in half-points.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Points(pub u32);

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

/// The outcome reported for a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Winner {
    Player(Id),
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(id) => write!(f, "player {id}"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
