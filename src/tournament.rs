// This file is part of chess-tournament.
//
// chess-tournament is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// chess-tournament is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{cmp::Reverse, collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    Id,
    game::Match,
    player::Player,
    round::Round,
    score::Points,
    store::{Record, Store},
};

/// How many rounds a tournament runs unless told otherwise.
pub const DEFAULT_ROUNDS: usize = 4;

/// A Swiss-style tournament.
///
/// The roster fills up to `nb_rounds * 2` players, then rounds are paired
/// one at a time until `nb_rounds` of them have been played out. Whether a
/// tournament is ready or finished is always derived from the roster and
/// the rounds; there is no stored state flag.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Tournament {
    #[serde(skip)]
    pub id: Option<Id>,
    pub name: String,
    pub nb_rounds: usize,
    /// Enrolled player ids, in enrollment order.
    pub players: Vec<Id>,
    /// Played and in-play rounds, append-only, in index order.
    pub rounds: Vec<Round>,
}

impl Tournament {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            nb_rounds: DEFAULT_ROUNDS,
            players: Vec::new(),
            rounds: Vec::new(),
        }
    }

    /// Every seat is taken: two players per round.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.players.len() == self.nb_rounds * 2
    }

    /// Every round has been generated and played out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.rounds.len() == self.nb_rounds && self.rounds.iter().all(Round::is_finished)
    }

    /// Add a player to the roster and persist the tournament.
    ///
    /// An already-enrolled player or a full roster leaves the tournament
    /// untouched; neither is an error.
    ///
    /// # Errors
    ///
    /// If the tournament can not be saved.
    pub fn enroll(&mut self, store: &Store, player: Id) -> anyhow::Result<()> {
        if !self.players.contains(&player) && !self.is_ready() {
            self.players.push(player);
            store.save(self)?;
        }

        Ok(())
    }

    /// The player's cumulative score over every match played so far.
    #[must_use]
    pub fn total_score(&self, player: Id) -> Points {
        Points(
            self.rounds
                .iter()
                .flat_map(|round| &round.matches)
                .map(|game| game.score(player).half_points())
                .sum(),
        )
    }

    /// Enrolled player ids ordered by cumulative score, ties broken by
    /// rank, both descending.
    ///
    /// The sort is stable, so players level on both keys stay in
    /// enrollment order. A player missing from the store sorts with rank 0.
    ///
    /// # Errors
    ///
    /// If the player table can not be read.
    pub fn sorted_players(&self, store: &Store) -> anyhow::Result<Vec<Id>> {
        let mut ranks = HashMap::new();
        for id in &self.players {
            let rank = store.get::<Player>(*id)?.map_or(0, |player| player.rank);
            ranks.insert(*id, rank);
        }

        let mut players = self.players.clone();
        players.sort_by_key(|id| {
            Reverse((
                self.total_score(*id),
                ranks.get(id).copied().unwrap_or_default(),
            ))
        });

        Ok(players)
    }

    /// Pair the next round, append it, and persist the tournament.
    ///
    /// Nothing happens unless the tournament is ready and either no round
    /// exists yet or the last one is finished with rounds to spare. The
    /// first round pairs the top half of the standings against the bottom
    /// half; later rounds pair neighbours in the standings. There is no
    /// rematch avoidance and no color assignment.
    ///
    /// # Errors
    ///
    /// If the store can not be read or written.
    pub fn generate_next_round(&mut self, store: &Store) -> anyhow::Result<()> {
        if !self.is_ready() {
            return Ok(());
        }

        let first_round = self.rounds.is_empty();
        if !first_round {
            let finished = self.rounds.last().is_some_and(Round::is_finished);
            if !finished || self.rounds.len() >= self.nb_rounds {
                return Ok(());
            }
        }

        let players = self.sorted_players(store)?;
        let matches: Vec<Match> = if first_round {
            let (top, bottom) = players.split_at(self.nb_rounds);
            top.iter()
                .zip(bottom)
                .map(|(one, two)| Match::new(*one, *two))
                .collect()
        } else {
            let mut standings = players.into_iter();
            let mut matches = Vec::with_capacity(self.nb_rounds);
            while let (Some(one), Some(two)) = (standings.next(), standings.next()) {
                matches.push(Match::new(one, two));
            }
            matches
        };

        self.rounds.push(Round::new(self.rounds.len() + 1, matches));
        store.save(self)?;

        Ok(())
    }

    /// The round currently in play, generating it first when the previous
    /// one is done and capacity remains. `None` once the tournament is
    /// over.
    ///
    /// # Errors
    ///
    /// If the store can not be read or written.
    pub fn active_round(&mut self, store: &Store) -> anyhow::Result<Option<&mut Round>> {
        let wants_round = match self.rounds.last() {
            None => true,
            Some(round) => round.is_finished() && self.rounds.len() < self.nb_rounds,
        };

        if wants_round {
            self.generate_next_round(store)?;
        }

        match self.rounds.last_mut() {
            Some(round) if !round.is_finished() => Ok(Some(round)),
            _ => Ok(None),
        }
    }

    /// The next match waiting on a result, `None` once the tournament is
    /// over.
    ///
    /// # Errors
    ///
    /// If the store can not be read or written.
    pub fn active_match(&mut self, store: &Store) -> anyhow::Result<Option<&mut Match>> {
        Ok(self.active_round(store)?.and_then(Round::active_match_mut))
    }

    /// Tournaments still waiting on enrollments.
    ///
    /// # Errors
    ///
    /// If the tournament table can not be read.
    pub fn unready(store: &Store) -> anyhow::Result<Vec<Tournament>> {
        let mut tournaments = store.all::<Tournament>()?;
        tournaments.retain(|tournament| !tournament.is_ready());

        Ok(tournaments)
    }

    /// Tournaments with a full roster.
    ///
    /// # Errors
    ///
    /// If the tournament table can not be read.
    pub fn ready(store: &Store) -> anyhow::Result<Vec<Tournament>> {
        let mut tournaments = store.all::<Tournament>()?;
        tournaments.retain(Tournament::is_ready);

        Ok(tournaments)
    }

    /// Tournaments with a full roster and matches still to play.
    ///
    /// # Errors
    ///
    /// If the tournament table can not be read.
    pub fn unfinished(store: &Store) -> anyhow::Result<Vec<Tournament>> {
        let mut tournaments = store.all::<Tournament>()?;
        tournaments.retain(|tournament| tournament.is_ready() && !tournament.is_finished());

        Ok(tournaments)
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_ready() {
            write!(
                f,
                "{} ({}/{} players)",
                self.name,
                self.players.len(),
                self.nb_rounds * 2
            )
        } else if !self.is_finished() {
            write!(
                f,
                "{} ({}/{} rounds)",
                self.name,
                self.rounds.len(),
                self.nb_rounds
            )
        } else {
            write!(f, "{} (finished)", self.name)
        }
    }
}

impl Record for Tournament {
    const TABLE: &'static str = "tournament";

    fn id(&self) -> Option<Id> {
        self.id
    }

    fn set_id(&mut self, id: Id) {
        self.id = Some(id);
    }
}
