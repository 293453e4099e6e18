use serde::{Deserialize, Serialize};

use fairway_core::course::HOLES_PER_ROUND;
use fairway_core::match_play::{MatchResult, MatchStatus, ResolvedHole};

const ROUND: u8 = HOLES_PER_ROUND as u8;

/// Running state of a match after the holes played so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatusSummary {
    /// Holes team 1 is ahead by (negative when team 2 leads).
    pub team1_up: i32,
    pub holes_played: u8,
    pub holes_remaining: u8,
    pub is_complete: bool,
    /// Display text: `AS`, `<leader> 2 UP` or `<leader> 3&2`.
    pub status: String,
}

impl MatchStatusSummary {
    /// Lifecycle state implied by this summary.
    pub fn state(&self) -> MatchStatus {
        if self.is_complete {
            MatchStatus::Completed
        } else if self.holes_played == 0 {
            MatchStatus::NotStarted
        } else {
            MatchStatus::InProgress
        }
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.is_complete
            .then(|| MatchResult::from_differential(self.team1_up))
    }
}

/// Fold resolved holes `1..=current_hole` into the match differential.
///
/// The match is over once 18 holes are resolved or the leader is further
/// ahead than there are holes left; holes resolved after that point do not
/// count.
pub fn calculate_match_status<H: ResolvedHole>(
    hole_scores: &[H],
    current_hole: u8,
    team1_name: &str,
    team2_name: &str,
) -> MatchStatusSummary {
    let limit = usize::from(current_hole.min(ROUND)).min(hole_scores.len());
    let mut team1_up = 0i32;
    let mut holes_played = 0u8;

    for winner in hole_scores[..limit].iter().filter_map(ResolvedHole::winner) {
        team1_up += winner.differential();
        holes_played += 1;
        if is_decided(team1_up, holes_played) {
            break;
        }
    }

    let holes_remaining = ROUND - holes_played;
    let is_complete = is_decided(team1_up, holes_played);
    let status = status_text(team1_up, holes_remaining, is_complete, team1_name, team2_name);

    MatchStatusSummary {
        team1_up,
        holes_played,
        holes_remaining,
        is_complete,
        status,
    }
}

fn is_decided(team1_up: i32, holes_played: u8) -> bool {
    let remaining = i32::from(ROUND - holes_played);
    holes_played == ROUND || team1_up.abs() > remaining
}

fn status_text(
    team1_up: i32,
    holes_remaining: u8,
    is_complete: bool,
    team1_name: &str,
    team2_name: &str,
) -> String {
    if team1_up == 0 {
        return "AS".to_string();
    }
    let leader = if team1_up > 0 { team1_name } else { team2_name };
    let margin = team1_up.abs();
    if is_complete && holes_remaining > 0 {
        format!("{leader} {margin}&{holes_remaining}")
    } else {
        format!("{leader} {margin} UP")
    }
}

/// Final result of the match, or `None` while it is still alive.
pub fn get_match_result<H: ResolvedHole>(hole_scores: &[H]) -> Option<MatchResult> {
    calculate_match_status(hole_scores, ROUND, "", "").result()
}

/// Result the match would have if it stopped now. Used for live standings;
/// never `None` (an unstarted match projects as halved).
pub fn get_provisional_result<H: ResolvedHole>(hole_scores: &[H]) -> MatchResult {
    MatchResult::from_differential(calculate_match_status(hole_scores, ROUND, "", "").team1_up)
}
