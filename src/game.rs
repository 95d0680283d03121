use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Id,
    score::{Score, Winner},
};

/// One game of chess between two enrolled players.
///
/// The scores only ever move through [`Match::set_score`], which keeps
/// their sum at zero (not yet played) or one full point (settled).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Match {
    pub player1: Id,
    pub player2: Id,
    pub score1: Score,
    pub score2: Score,
}

impl Match {
    #[must_use]
    pub fn new(player1: Id, player2: Id) -> Self {
        Self {
            player1,
            player2,
            score1: Score::Zero,
            score2: Score::Zero,
        }
    }

    /// The match is finished once a full point has been handed out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.score1.half_points() + self.score2.half_points() == 2
    }

    /// The given player's score in this match, `Zero` for a non-participant.
    #[must_use]
    pub fn score(&self, player: Id) -> Score {
        if player == self.player1 {
            self.score1
        } else if player == self.player2 {
            self.score2
        } else {
            Score::Zero
        }
    }

    /// Settle the match: a full point to the winner, or half a point each
    /// for a draw. A winner who is not part of the match counts as a draw.
    pub fn set_score(&mut self, winner: Winner) {
        (self.score1, self.score2) = match winner {
            Winner::Player(player) if player == self.player1 => (Score::One, Score::Zero),
            Winner::Player(player) if player == self.player2 => (Score::Zero, Score::One),
            Winner::Player(_) | Winner::Draw => (Score::Half, Score::Half),
        };
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finished() {
            write!(
                f,
                "{}: {} vs {}: {}",
                self.player1, self.score1, self.player2, self.score2
            )
        } else {
            write!(f, "{} vs {}", self.player1, self.player2)
        }
    }
}
