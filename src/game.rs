use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id::{EventId, GameId, PersonId, ScoreLogId, TeamId};
use crate::util::appended;
use crate::Store;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Game {
    pub id: GameId,
    #[serde(alias = "eventId")]
    pub event_id: EventId,
    #[serde(alias = "homeTeamId")]
    pub home_team_id: TeamId,
    // Opponents from outside the store carry a display name instead of a
    // resolvable id.
    #[serde(alias = "awayTeamId")]
    pub away_team_id: TeamId,
    #[serde(alias = "awayTeamName")]
    pub away_team_name: Option<String>,
    #[serde(alias = "startTime")]
    pub start_time: String,
    pub status: GameStatus,
    #[serde(alias = "homeScore")]
    pub home_score: u32,
    #[serde(alias = "awayScore")]
    pub away_score: u32,
}

impl Game {
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewGame {
    pub event_id: EventId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub away_team_name: Option<String>,
    pub start_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameStatus {
    Scheduled,
    Live,
    Finished,
}

impl GameStatus {
    // The lifecycle only ever moves forward; anything else has to be a new
    // game. Same-status writes are rejected like any other backward move.
    pub fn allows(self, next: GameStatus) -> bool {
        matches!(
            (self, next),
            (GameStatus::Scheduled, GameStatus::Live) | (GameStatus::Live, GameStatus::Finished)
        )
    }

    pub fn word(self) -> &'static str {
        match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::Live => "Live",
            GameStatus::Finished => "Finished",
        }
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("no game with id {0}")]
    UnknownGame(GameId),
    #[error("a {from} game cannot move to {to}")]
    Rejected { from: GameStatus, to: GameStatus },
}

// The audit-trail entry behind a score change or notable moment. Entries
// are never rewritten and never replayed into the game's score fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct ScoreLog {
    pub id: ScoreLogId,
    #[serde(alias = "gameId")]
    pub game_id: GameId,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: ScoreKind,
    #[serde(alias = "playerId")]
    pub player_id: Option<PersonId>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ScoreKind {
    Goal,
    Try,
    Point,
    Foul,
    Other,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewScoreLog {
    pub game_id: GameId,
    pub time: String,
    pub kind: ScoreKind,
    pub player_id: Option<PersonId>,
    pub description: String,
}

impl Store {
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game(&self, id: &GameId) -> Option<&Game> {
        self.games.iter().find(|game| game.id == *id)
    }

    pub fn add_game(&mut self, new: NewGame) -> &Game {
        appended(
            &mut self.games,
            Game {
                id: GameId::new(),
                event_id: new.event_id,
                home_team_id: new.home_team_id,
                away_team_id: new.away_team_id,
                away_team_name: new.away_team_name,
                start_time: new.start_time,
                // Every game enters the schedule board with a clean sheet,
                // whatever the caller had in mind.
                status: GameStatus::Scheduled,
                home_score: 0,
                away_score: 0,
            },
        )
    }

    pub fn update_game_status(
        &mut self,
        id: &GameId,
        status: GameStatus,
    ) -> Result<&Game, StatusError> {
        let game = self
            .games
            .iter_mut()
            .find(|game| game.id == *id)
            .ok_or_else(|| StatusError::UnknownGame(id.clone()))?;
        if !game.status.allows(status) {
            return Err(StatusError::Rejected {
                from: game.status,
                to: status,
            });
        }
        game.status = status;
        Ok(game)
    }

    pub fn update_score(
        &mut self,
        id: &GameId,
        home_score: u32,
        away_score: u32,
    ) -> Option<&Game> {
        let game = self.games.iter_mut().find(|game| game.id == *id)?;
        // Absolute values, not deltas: the caller does its own arithmetic
        // and the last write wins.
        game.home_score = home_score;
        game.away_score = away_score;
        Some(game)
    }

    pub fn add_score_log(&mut self, new: NewScoreLog) -> &ScoreLog {
        appended(
            &mut self.score_logs,
            ScoreLog {
                id: ScoreLogId::new(),
                game_id: new.game_id,
                time: new.time,
                kind: new.kind,
                player_id: new.player_id,
                description: new.description,
            },
        )
    }

    pub fn score_logs(&self, game: &GameId) -> Vec<&ScoreLog> {
        self.score_logs
            .iter()
            .filter(|entry| entry.game_id == *game)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{GameStatus, NewGame, NewScoreLog, ScoreKind, StatusError};
    use crate::id::GameId;
    use crate::Store;

    fn friendly(store: &mut Store) -> GameId {
        store
            .add_game(NewGame {
                event_id: "event-1".into(),
                home_team_id: "team-1".into(),
                away_team_id: "team-ext".into(),
                away_team_name: Some("Riverton Rovers".to_owned()),
                start_time: "2024-03-02T14:00".to_owned(),
            })
            .id
            .clone()
    }

    #[test]
    fn new_games_are_scheduled_at_nil_nil() {
        let mut store = Store::new();
        let id = friendly(&mut store);

        let game = store.game(&id).unwrap();
        assert_eq!(game.status, GameStatus::Scheduled);
        assert_eq!((game.home_score, game.away_score), (0, 0));
        assert!(!game.is_finished());
    }

    #[test]
    fn the_lifecycle_walks_scheduled_live_finished() {
        let mut store = Store::new();
        let id = friendly(&mut store);

        assert_eq!(
            store.update_game_status(&id, GameStatus::Live).unwrap().status,
            GameStatus::Live
        );
        let finished = store
            .update_game_status(&id, GameStatus::Finished)
            .unwrap();
        assert!(finished.is_finished());
    }

    #[test]
    fn backward_and_skipping_transitions_are_rejected() {
        let mut store = Store::new();
        let id = friendly(&mut store);

        // Scheduled games cannot jump straight to Finished.
        let err = store
            .update_game_status(&id, GameStatus::Finished)
            .unwrap_err();
        assert_eq!(
            err,
            StatusError::Rejected {
                from: GameStatus::Scheduled,
                to: GameStatus::Finished,
            }
        );
        // Same-status writes count as backward moves.
        assert!(store.update_game_status(&id, GameStatus::Scheduled).is_err());

        store.update_game_status(&id, GameStatus::Live).unwrap();
        store.update_game_status(&id, GameStatus::Finished).unwrap();

        // A finished game is immutable to the status machine.
        assert!(store.update_game_status(&id, GameStatus::Live).is_err());
        assert_eq!(store.game(&id).unwrap().status, GameStatus::Finished);
    }

    #[test]
    fn status_errors_name_the_unknown_game() {
        let mut store = Store::new();
        let err = store
            .update_game_status(&"game-missing".into(), GameStatus::Live)
            .unwrap_err();
        assert_eq!(err, StatusError::UnknownGame("game-missing".into()));
    }

    #[test]
    fn score_writes_are_absolute_and_last_write_wins() {
        let mut store = Store::new();
        let id = friendly(&mut store);
        store.update_game_status(&id, GameStatus::Live).unwrap();

        store.update_score(&id, 3, 2).unwrap();
        let game = store.update_score(&id, 1, 1).unwrap();
        assert_eq!((game.home_score, game.away_score), (1, 1));
    }

    // Only the status machine is guarded; the score fields themselves are
    // writable whatever state the game is in.
    #[test]
    fn scores_mutate_at_any_status() {
        let mut store = Store::new();
        let id = friendly(&mut store);

        store.update_score(&id, 0, 1).unwrap();
        assert_eq!(store.game(&id).unwrap().away_score, 1);

        store.update_game_status(&id, GameStatus::Live).unwrap();
        store.update_game_status(&id, GameStatus::Finished).unwrap();

        let corrected = store.update_score(&id, 2, 1).unwrap();
        assert_eq!((corrected.home_score, corrected.away_score), (2, 1));
    }

    #[test]
    fn score_writes_to_unknown_games_are_silent() {
        let mut store = Store::new();
        assert!(store.update_score(&"game-missing".into(), 3, 3).is_none());
    }

    #[test]
    fn score_logs_append_per_game_in_order() {
        let mut store = Store::new();
        let first = friendly(&mut store);
        let second = friendly(&mut store);

        store.add_score_log(NewScoreLog {
            game_id: first.clone(),
            time: "12'".to_owned(),
            kind: ScoreKind::Goal,
            player_id: None,
            description: "Opening goal".to_owned(),
        });
        store.add_score_log(NewScoreLog {
            game_id: second.clone(),
            time: "3'".to_owned(),
            kind: ScoreKind::Foul,
            player_id: None,
            description: "Early challenge".to_owned(),
        });
        store.add_score_log(NewScoreLog {
            game_id: first.clone(),
            time: "44'".to_owned(),
            kind: ScoreKind::Goal,
            player_id: None,
            description: "Header from the corner".to_owned(),
        });

        let timeline: Vec<&str> = store
            .score_logs(&first)
            .iter()
            .map(|entry| entry.time.as_str())
            .collect();
        assert_eq!(timeline, ["12'", "44'"]);
        assert_eq!(store.score_logs(&second).len(), 1);
    }
}
