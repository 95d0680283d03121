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

use std::{io::Write as _, path::PathBuf};

use chess_tournament::{COPYRIGHT, LONG_VERSION};
use clap::{CommandFactory, Parser};

/// Chess Tournament Manager
///
/// This runs Swiss-style tournaments from a text menu.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Chess Tournament Manager")]
pub(crate) struct Args {
    /// Where to keep the table files instead of the user data folder
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Whether to log on the debug level
    #[arg(long)]
    pub debug: bool,

    /// Whether to skip the greeting
    #[arg(long)]
    pub skip_greeting: bool,

    /// Build the manpage
    #[arg(long)]
    pub man: bool,
}

impl Args {
    pub(crate) fn generate_man_page() -> anyhow::Result<()> {
        let mut buffer: Vec<u8> = Vec::default();
        let cmd = Self::command().name("chess-tournament").long_version(None);
        let man = clap_mangen::Man::new(cmd).date("2026-08-07");

        man.render(&mut buffer)?;
        write!(buffer, "{COPYRIGHT}")?;

        std::fs::write("chess-tournament.1", buffer)?;
        Ok(())
    }
}
