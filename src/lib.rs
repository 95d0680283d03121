//! A manager for Swiss-style chess tournaments.
//!
//! Players enroll into a tournament until every seat is taken, then the
//! pairing engine deals out rounds one at a time: the first round crosses
//! the top half of the standings with the bottom half, later rounds pair
//! neighbours, with standings ordered by cumulative score and rank. Every
//! entity round-trips through a RON document store, one table file per
//! entity type.
//!
//! The `chess-tournament` binary wraps the engine in a text menu client.

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

#![deny(clippy::panic)]

pub mod game;
pub mod player;
pub mod round;
pub mod score;
pub mod store;
pub mod tournament;
pub mod utils;

pub type Id = u64;

pub const HOME: &str = "chess-tournament";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2025-2026 Developers of the chess-tournament project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2025-2026 Developers of the chess-tournament project
Licensed under the AGPLv3"
);
