//! Gateways the scoring engine's callers read and write through.
//!
//! Every read returns a fresh copy; mutating it never touches stored state.
//! Writes are last-write-wins per document.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use fairway_core::course::Course;
use fairway_core::match_play::Match;
use fairway_core::player::Player;
use fairway_core::scorecard::{Scorecard, TeamScorecard};

use crate::error::StoreError;

/// A scorecard that was just written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScorecardChange {
    Individual { card: Scorecard },
    Team { card: TeamScorecard },
}

pub trait PlayerRepository {
    fn get_player(&self, id: &str) -> impl Future<Output = Result<Player, StoreError>> + Send;

    /// All players, ordered by name.
    fn list_players(&self) -> impl Future<Output = Result<Vec<Player>, StoreError>> + Send;

    /// Store a player, assigning a fresh id when `id` is empty. Returns the
    /// stored record.
    fn upsert_player(&self, player: Player)
    -> impl Future<Output = Result<Player, StoreError>> + Send;
}

pub trait MatchRepository {
    fn get_match(&self, id: &str) -> impl Future<Output = Result<Match, StoreError>> + Send;

    /// Store a match, assigning a fresh id when `id` is empty, and notify
    /// subscribers.
    fn upsert_match(&self, m: Match) -> impl Future<Output = Result<Match, StoreError>> + Send;

    /// Receive every match written after this call. Dropping the receiver
    /// unsubscribes.
    fn subscribe_matches(&self) -> broadcast::Receiver<Match>;
}

pub trait ScorecardRepository {
    /// The individual card for `player_id`.
    fn get_scorecard(
        &self,
        player_id: &str,
    ) -> impl Future<Output = Result<Scorecard, StoreError>> + Send;

    fn upsert_scorecard(
        &self,
        card: Scorecard,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn get_team_scorecard(
        &self,
        team_id: &str,
    ) -> impl Future<Output = Result<TeamScorecard, StoreError>> + Send;

    fn upsert_team_scorecard(
        &self,
        card: TeamScorecard,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn subscribe_scorecards(&self) -> broadcast::Receiver<ScorecardChange>;
}

pub trait CourseRepository {
    /// Courses are keyed by name.
    fn get_course(&self, name: &str) -> impl Future<Output = Result<Course, StoreError>> + Send;

    fn upsert_course(&self, course: Course) -> impl Future<Output = Result<(), StoreError>> + Send;
}
