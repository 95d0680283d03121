use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::Match;

/// One round of pairings, kept in the order the engine paired them.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Round {
    /// 1-based position of the round in its tournament.
    pub index: usize,
    pub matches: Vec<Match>,
}

impl Round {
    #[must_use]
    pub fn new(index: usize, matches: Vec<Match>) -> Self {
        Self { index, matches }
    }

    /// A round is finished once every score has been settled. An empty
    /// round is never finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.matches.is_empty() && self.matches.iter().all(Match::is_finished)
    }

    /// The first match still waiting on a result, in pairing order.
    #[must_use]
    pub fn active_match(&self) -> Option<&Match> {
        self.matches.iter().find(|game| !game.is_finished())
    }

    pub fn active_match_mut(&mut self) -> Option<&mut Match> {
        self.matches.iter_mut().find(|game| !game.is_finished())
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Round {}", self.index)
    }
}
