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

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Id, store::Record};

/// A registered player.
///
/// Only the rank ever changes after registration. Matches and tournaments
/// hold players by id, so a rank update is visible everywhere at once.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Player {
    #[serde(skip)]
    pub id: Option<Id>,
    pub first_name: String,
    pub last_name: String,
    pub sex: String,
    pub rank: i64,
}

impl Player {
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, sex: &str, rank: i64) -> Self {
        Self {
            id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            sex: sex.to_string(),
            rank,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

// Two players are the same player when they are the same database record.
impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Record for Player {
    const TABLE: &'static str = "player";

    fn id(&self) -> Option<Id> {
        self.id
    }

    fn set_id(&mut self, id: Id) {
        self.id = Some(id);
    }
}
