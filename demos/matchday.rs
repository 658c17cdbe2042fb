use anyhow::Context;
use clubdesk::{GameStatus, NewGame, NewScoreLog, ScoreKind, Store};

fn main() -> anyhow::Result<()> {
    let mut store = Store::new();

    let team = store
        .team(&"team-1".into())
        .context("seed team missing")?
        .id
        .clone();
    let home_name = store
        .team(&team)
        .context("seed team missing")?
        .name
        .clone();

    let captain = store.add_person("Asha Moyo".to_owned()).id.clone();
    let keeper = store.add_person("Jonas Till".to_owned()).id.clone();
    let coach = store.add_person("Flora Benn".to_owned()).id.clone();
    store.add_team_member(captain.clone(), team.clone(), "role-player".into());
    store.add_team_member(keeper, team.clone(), "role-player".into());
    store.add_team_member(coach, team.clone(), "role-coach".into());

    println!("{} matchday squad:", home_name);
    for member in store.team_members(&team) {
        println!(
            "  {:<8} {}",
            member.role_name.as_deref().unwrap_or("?"),
            member.name
        );
    }
    println!();

    let away_name = "Riverton Rovers";
    let game = store
        .add_game(NewGame {
            event_id: "event-1".into(),
            home_team_id: team.clone(),
            away_team_id: "team-riverton".into(),
            away_team_name: Some(away_name.to_owned()),
            start_time: "15:00".to_owned(),
        })
        .id
        .clone();

    store.update_game_status(&game, GameStatus::Live)?;
    println!("  KO  {} 0 - 0 {}", home_name, away_name);

    let moments = [
        ("12'", 1, 0, Some(&captain), "curled in from the edge of the box"),
        ("41'", 1, 1, None, "Rovers level from the penalty spot"),
        ("77'", 2, 1, Some(&captain), "header from the corner"),
    ];
    for (time, home_score, away_score, scorer, description) in moments {
        let live = store
            .update_score(&game, home_score, away_score)
            .context("game vanished mid-match")?;
        println!(
            "{:>4}  {} {} - {} {}  ({})",
            time, home_name, live.home_score, live.away_score, away_name, description
        );
        store.add_score_log(NewScoreLog {
            game_id: game.clone(),
            time: time.to_owned(),
            kind: ScoreKind::Goal,
            player_id: scorer.cloned(),
            description: description.to_owned(),
        });
    }

    let full_time = store.update_game_status(&game, GameStatus::Finished)?;
    println!(
        "  FT  {} {} - {} {}",
        home_name, full_time.home_score, full_time.away_score, away_name
    );

    println!("\nTimeline:");
    for entry in store.score_logs(&game) {
        println!("  {:>4} {:?}: {}", entry.time, entry.kind, entry.description);
    }

    // The lifecycle only runs forward; a finished game stays finished.
    if let Err(refused) = store.update_game_status(&game, GameStatus::Live) {
        println!("\n(re-opening refused: {})", refused);
    }

    Ok(())
}
