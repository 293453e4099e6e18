use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use fairway_core::course::Course;
use fairway_core::player::PlayerId;
use fairway_core::scorecard::{Scorecard, ScorecardStatus};

use crate::scorecard::net_to_par;

/// What an individual leaderboard ranks on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardKind {
    /// Lowest net to par over the holes played first.
    Stroke,
    /// Most Stableford points first.
    Stableford,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// `1`, `2`, or `T3` when the place is shared.
    pub position: String,
    pub player_id: PlayerId,
    pub name: String,
    /// Net to par for stroke play, total points for Stableford.
    pub score: i32,
    /// Holes played so far.
    pub thru: usize,
    pub status: ScorecardStatus,
}

/// Rank individual cards. Stroke play compares net to par so players part
/// way through a round rank fairly against those who have finished.
/// Players who have not started sort last and are never given a tied
/// position with players on the course. Names fall back to the player id.
pub fn individual_leaderboard(
    scorecards: &[Scorecard],
    course: &Course,
    names: &HashMap<PlayerId, String>,
    kind: LeaderboardKind,
) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<(&Scorecard, i32, (bool, i32))> = scorecards
        .iter()
        .map(|card| {
            let score = score_of(card, course, kind);
            let key = (card.status == ScorecardStatus::NotStarted, rank_key(score, kind));
            (card, score, key)
        })
        .collect();
    ranked.sort_by_key(|&(_, _, key)| key);

    let mut entries = Vec::with_capacity(ranked.len());
    let mut place = 0;
    for (i, &(card, score, key)) in ranked.iter().enumerate() {
        if i == 0 || key != ranked[i - 1].2 {
            place = i + 1;
        }
        let tied = ranked.iter().filter(|r| r.2 == key).count() > 1;
        entries.push(LeaderboardEntry {
            position: if tied { format!("T{place}") } else { place.to_string() },
            player_id: card.player_id.clone(),
            name: names
                .get(&card.player_id)
                .cloned()
                .unwrap_or_else(|| card.player_id.clone()),
            score,
            thru: card.holes_played(),
            status: card.status,
        });
    }
    entries
}

fn score_of(card: &Scorecard, course: &Course, kind: LeaderboardKind) -> i32 {
    match kind {
        LeaderboardKind::Stroke => net_to_par(card, course),
        LeaderboardKind::Stableford => i32::try_from(card.total_points).unwrap_or(i32::MAX),
    }
}

fn rank_key(score: i32, kind: LeaderboardKind) -> i32 {
    match kind {
        LeaderboardKind::Stroke => score,
        LeaderboardKind::Stableford => -score,
    }
}
