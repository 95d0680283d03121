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

#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

mod command_line;
mod menu;

use chess_tournament::{
    Id,
    game::Match,
    player::Player,
    score::Winner,
    store::Store,
    tournament::Tournament,
    utils,
};
use clap::Parser;
use log::info;

use crate::command_line::Args;

const GREETING: &str = "
===============================================================================
    Welcome to the chess tournament manager.

    Have a nice game!
===============================================================================
";

#[derive(Clone, Copy)]
enum Screen {
    App,
    Players,
    Tournaments,
}

#[derive(Clone, Copy)]
enum AppAction {
    Tournaments,
    Players,
    Exit,
}

const APP_MENU: &[(&str, AppAction)] = &[
    ("Manage tournaments", AppAction::Tournaments),
    ("Manage players", AppAction::Players),
    ("Exit program", AppAction::Exit),
];

#[derive(Clone, Copy)]
enum PlayerAction {
    Create,
    UpdateRank,
    ListByRank,
    ListByName,
    Back,
}

const PLAYER_MENU: &[(&str, PlayerAction)] = &[
    ("Create new player", PlayerAction::Create),
    ("Update a player's rank", PlayerAction::UpdateRank),
    ("Display all players by rank", PlayerAction::ListByRank),
    ("Display all players by name", PlayerAction::ListByName),
    ("Back", PlayerAction::Back),
];

#[derive(Clone, Copy)]
enum TournamentAction {
    Create,
    Enroll,
    EnterResult,
    Standings,
    Report,
    ListAll,
    Back,
}

const TOURNAMENT_MENU: &[(&str, TournamentAction)] = &[
    ("Create new tournament", TournamentAction::Create),
    ("Enroll player to tournament", TournamentAction::Enroll),
    ("Enter a match result", TournamentAction::EnterResult),
    ("Display standings", TournamentAction::Standings),
    ("Display full report", TournamentAction::Report),
    ("Display all tournaments", TournamentAction::ListAll),
    ("Back", TournamentAction::Back),
];

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug);

    if args.man {
        return Args::generate_man_page();
    }

    let folder = match args.data_dir {
        Some(folder) => folder,
        None => utils::create_data_folder()?,
    };
    let store = Store::open(folder)?;
    info!("store: {}", store.folder().display());

    if !args.skip_greeting {
        println!("{GREETING}");
        menu::pause()?;
    }

    run(&store)
}

fn run(store: &Store) -> anyhow::Result<()> {
    let mut screen = Screen::App;

    loop {
        menu::clear_screen()?;

        match screen {
            Screen::App => {
                match menu::select_option("Select an action from the menu:", APP_MENU)? {
                    AppAction::Tournaments => screen = Screen::Tournaments,
                    AppAction::Players => screen = Screen::Players,
                    AppAction::Exit => return Ok(()),
                }
            }
            Screen::Players => {
                match menu::select_option("Select an action from the menu:", PLAYER_MENU)? {
                    PlayerAction::Create => create_player(store)?,
                    PlayerAction::UpdateRank => update_rank(store)?,
                    PlayerAction::ListByRank => list_players_by_rank(store)?,
                    PlayerAction::ListByName => list_players_by_name(store)?,
                    PlayerAction::Back => screen = Screen::App,
                }
            }
            Screen::Tournaments => {
                match menu::select_option("Select an action from the menu:", TOURNAMENT_MENU)? {
                    TournamentAction::Create => create_tournament(store)?,
                    TournamentAction::Enroll => enroll_player(store)?,
                    TournamentAction::EnterResult => enter_result(store)?,
                    TournamentAction::Standings => standings(store)?,
                    TournamentAction::Report => report(store)?,
                    TournamentAction::ListAll => list_tournaments(store)?,
                    TournamentAction::Back => screen = Screen::App,
                }
            }
        }
    }
}

fn create_player(store: &Store) -> anyhow::Result<()> {
    let first_name = menu::prompt_value("Enter first name")?;
    let last_name = menu::prompt_value("Enter last name")?;
    let sex = menu::prompt_value("Enter sex")?;
    let rank = menu::prompt_number("Enter rank")?;

    let mut player = Player::new(&first_name, &last_name, &sex, rank);
    store.save(&mut player)?;
    info!("created player {player}");

    Ok(())
}

fn update_rank(store: &Store) -> anyhow::Result<()> {
    let mut players = store.all::<Player>()?;
    if players.is_empty() {
        println!("There is currently no registered player.");
        return menu::pause();
    }

    println!("Please select a player from the list below:");
    let index = menu::select_from(&players)?;
    let rank = menu::prompt_number("Enter the new rank")?;

    if let Some(player) = players.get_mut(index) {
        player.rank = rank;
        store.save(player)?;
        info!("updated rank of {player} to {rank}");
    }

    Ok(())
}

fn list_players_by_rank(store: &Store) -> anyhow::Result<()> {
    let mut players = store.all::<Player>()?;
    players.sort_by_key(|player| player.rank);

    list_players(&players)
}

fn list_players_by_name(store: &Store) -> anyhow::Result<()> {
    let mut players = store.all::<Player>()?;
    players.sort_by(|one, two| {
        (&one.first_name, &one.last_name).cmp(&(&two.first_name, &two.last_name))
    });

    list_players(&players)
}

fn list_players(players: &[Player]) -> anyhow::Result<()> {
    if players.is_empty() {
        println!("There is currently no registered player.");
    } else {
        println!("List of all registered players:");
        let lines: Vec<String> = players
            .iter()
            .map(|player| format!("{player}, rank {}", player.rank))
            .collect();
        menu::display_list(&lines);
    }

    menu::pause()
}

fn create_tournament(store: &Store) -> anyhow::Result<()> {
    let name = menu::prompt_value("Enter a name for the new tournament")?;

    let mut tournament = Tournament::new(&name);
    store.save(&mut tournament)?;
    info!("created tournament {}", tournament.name);

    Ok(())
}

fn enroll_player(store: &Store) -> anyhow::Result<()> {
    let mut tournaments = Tournament::unready(store)?;
    let Some(index) = menu::choose_one(
        "Please select a tournament from the list below:",
        &tournaments,
    )?
    else {
        println!("There is no open tournament.");
        return menu::pause();
    };
    let Some(tournament) = tournaments.get_mut(index) else {
        return Ok(());
    };

    let players: Vec<Player> = store
        .all::<Player>()?
        .into_iter()
        .filter(|player| {
            player
                .id
                .is_some_and(|id| !tournament.players.contains(&id))
        })
        .collect();
    if players.is_empty() {
        println!("There is no player left to enroll.");
        return menu::pause();
    }

    println!("Please select a player from the list below:");
    let pick = menu::select_from(&players)?;
    if let Some(player) = players.get(pick)
        && let Some(id) = player.id
    {
        tournament.enroll(store, id)?;
        info!("enrolled {player} in {}", tournament.name);
    }

    Ok(())
}

fn enter_result(store: &Store) -> anyhow::Result<()> {
    let mut tournaments = Tournament::unfinished(store)?;
    let Some(index) = menu::choose_one(
        "Please select a tournament from the list below:",
        &tournaments,
    )?
    else {
        println!("There is no tournament in play.");
        return menu::pause();
    };
    let Some(tournament) = tournaments.get_mut(index) else {
        return Ok(());
    };

    let Some(game) = tournament.active_match(store)? else {
        println!("There is no match waiting on a result.");
        return menu::pause();
    };

    let options = [
        player_name(store, game.player1)?,
        player_name(store, game.player2)?,
        "draw".to_string(),
    ];
    println!("Please select the winner of the match:");
    let winner = match menu::select_from(&options)? {
        0 => Winner::Player(game.player1),
        1 => Winner::Player(game.player2),
        _ => Winner::Draw,
    };
    game.set_score(winner);

    store.save(tournament)?;
    info!("recorded {winner} in {}", tournament.name);

    Ok(())
}

fn standings(store: &Store) -> anyhow::Result<()> {
    let tournaments = Tournament::ready(store)?;
    let Some(index) = menu::choose_one(
        "Please select a tournament from the list below:",
        &tournaments,
    )?
    else {
        println!("There is no tournament to report on.");
        return menu::pause();
    };
    let Some(tournament) = tournaments.get(index) else {
        return Ok(());
    };

    println!("Standings for {}:", tournament.name);
    menu::display_list(&standings_lines(store, tournament)?);

    menu::pause()
}

fn report(store: &Store) -> anyhow::Result<()> {
    let tournaments = Tournament::ready(store)?;
    let Some(index) = menu::choose_one(
        "Please select a tournament from the list below:",
        &tournaments,
    )?
    else {
        println!("There is no tournament to report on.");
        return menu::pause();
    };
    let Some(tournament) = tournaments.get(index) else {
        return Ok(());
    };

    println!("{tournament}");
    println!("Players:");
    menu::display_list(&standings_lines(store, tournament)?);

    for round in &tournament.rounds {
        println!("\n{round}:");
        let mut lines = Vec::new();
        for game in &round.matches {
            lines.push(match_line(store, game)?);
        }
        menu::display_list(&lines);
    }

    menu::pause()
}

fn list_tournaments(store: &Store) -> anyhow::Result<()> {
    let tournaments = store.all::<Tournament>()?;
    if tournaments.is_empty() {
        println!("There is currently no registered tournament.");
    } else {
        println!("List of all registered tournaments:");
        menu::display_list(&tournaments);
    }

    menu::pause()
}

fn standings_lines(store: &Store, tournament: &Tournament) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for id in tournament.sorted_players(store)? {
        let name = player_name(store, id)?;
        lines.push(format!("{name}: {}", tournament.total_score(id)));
    }

    Ok(lines)
}

fn match_line(store: &Store, game: &Match) -> anyhow::Result<String> {
    let name1 = player_name(store, game.player1)?;
    let name2 = player_name(store, game.player2)?;

    if game.is_finished() {
        Ok(format!(
            "{name1}: {} vs {name2}: {}",
            game.score1, game.score2
        ))
    } else {
        Ok(format!("{name1} vs {name2}"))
    }
}

fn player_name(store: &Store, id: Id) -> anyhow::Result<String> {
    Ok(store
        .get::<Player>(id)?
        .map_or_else(|| format!("player {id}"), |player| player.to_string()))
}
