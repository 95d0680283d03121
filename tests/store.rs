use chess_tournament::{
    game::Match,
    player::Player,
    round::Round,
    score::{Score, Winner},
    store::Store,
    tournament::Tournament,
};

fn store() -> anyhow::Result<(tempfile::TempDir, Store)> {
    let folder = tempfile::tempdir()?;
    let store = Store::open(folder.path())?;
    Ok((folder, store))
}

#[test]
fn fresh_store_is_empty() -> anyhow::Result<()> {
    let (_folder, store) = store()?;

    assert!(store.all::<Player>()?.is_empty());
    assert!(store.all::<Tournament>()?.is_empty());
    assert!(store.get::<Player>(1)?.is_none());

    Ok(())
}

#[test]
fn assigns_ids_from_one() -> anyhow::Result<()> {
    let (_folder, store) = store()?;

    let mut player = Player::new("Chuck", "Nourris", "M", 100);
    assert_eq!(player.id, None);
    store.save(&mut player)?;
    assert_eq!(player.id, Some(1));

    let mut other = Player::new("Harry", "Potter", "M", 120);
    store.save(&mut other)?;
    assert_eq!(other.id, Some(2));

    Ok(())
}

#[test]
fn round_trips_a_player() -> anyhow::Result<()> {
    let (_folder, store) = store()?;

    let mut player = Player::new("Chuck", "Nourris", "M", 100);
    store.save(&mut player)?;

    let Some(loaded) = store.get::<Player>(1)? else {
        return Err(anyhow::Error::msg("expected a player"));
    };

    assert_eq!(loaded.id, Some(1));
    assert_eq!(loaded.first_name, "Chuck");
    assert_eq!(loaded.last_name, "Nourris");
    assert_eq!(loaded.sex, "M");
    assert_eq!(loaded.rank, 100);

    Ok(())
}

#[test]
fn round_trips_a_tournament_with_rounds() -> anyhow::Result<()> {
    let (_folder, store) = store()?;

    let mut tournament = Tournament::new("spring open");
    tournament.players = vec![1, 2, 3, 4];
    let mut game = Match::new(4, 2);
    game.set_score(Winner::Player(4));
    tournament
        .rounds
        .push(Round::new(1, vec![game, Match::new(3, 1)]));
    store.save(&mut tournament)?;

    let Some(loaded) = store.get::<Tournament>(1)? else {
        return Err(anyhow::Error::msg("expected a tournament"));
    };

    assert_eq!(loaded.id, Some(1));
    assert_eq!(loaded.name, "spring open");
    assert_eq!(loaded.nb_rounds, 4);
    assert_eq!(loaded.players, vec![1, 2, 3, 4]);
    assert_eq!(loaded.rounds, tournament.rounds);
    assert_eq!(loaded.rounds[0].matches[0].score1, Score::One);
    assert_eq!(loaded.rounds[0].matches[0].score2, Score::Zero);

    Ok(())
}

#[test]
fn get_missing_record_is_none() -> anyhow::Result<()> {
    let (_folder, store) = store()?;

    let mut player = Player::new("Chuck", "Nourris", "M", 100);
    store.save(&mut player)?;

    assert!(store.get::<Player>(7)?.is_none());

    Ok(())
}

#[test]
fn saving_again_upserts_in_place() -> anyhow::Result<()> {
    let (_folder, store) = store()?;

    let mut player = Player::new("Chuck", "Nourris", "M", 100);
    store.save(&mut player)?;

    player.rank = 90;
    store.save(&mut player)?;
    assert_eq!(player.id, Some(1));

    let players = store.all::<Player>()?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].rank, 90);

    Ok(())
}

#[test]
fn all_enumerates_in_id_order() -> anyhow::Result<()> {
    let (_folder, store) = store()?;

    for (first_name, rank) in [("Chuck", 100), ("Harry", 120), ("Gerald", 150)] {
        let mut player = Player::new(first_name, "Player", "M", rank);
        store.save(&mut player)?;
    }

    let players = store.all::<Player>()?;
    let ids: Vec<_> = players.iter().map(|player| player.id).collect();
    let names: Vec<_> = players.iter().map(|player| player.first_name.as_str()).collect();

    assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    assert_eq!(names, vec!["Chuck", "Harry", "Gerald"]);

    Ok(())
}

#[test]
fn tables_do_not_share_ids() -> anyhow::Result<()> {
    let (_folder, store) = store()?;

    let mut player = Player::new("Chuck", "Nourris", "M", 100);
    store.save(&mut player)?;
    let mut tournament = Tournament::new("spring open");
    store.save(&mut tournament)?;

    // each table counts from one on its own
    assert_eq!(player.id, Some(1));
    assert_eq!(tournament.id, Some(1));
    assert!(store.get::<Player>(1)?.is_some());
    assert!(store.get::<Tournament>(1)?.is_some());

    Ok(())
}

#[test]
fn store_survives_reopening() -> anyhow::Result<()> {
    let (folder, store) = store()?;

    let mut player = Player::new("Chuck", "Nourris", "M", 100);
    store.save(&mut player)?;
    drop(store);

    let reopened = Store::open(folder.path())?;
    let Some(loaded) = reopened.get::<Player>(1)? else {
        return Err(anyhow::Error::msg("expected a player"));
    };
    assert_eq!(loaded.first_name, "Chuck");

    Ok(())
}
