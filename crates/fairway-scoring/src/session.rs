//! Match lifecycle transitions. Callers persist the returned match.

use fairway_core::course::HOLES_PER_ROUND;
use fairway_core::error::ScoringError;
use fairway_core::match_play::{HoleScore, Match, MatchStatus};

use crate::match_status::{MatchStatusSummary, calculate_match_status};

/// Store a scored hole and return the match's next state.
///
/// The input match is left untouched. Status only moves forward: any
/// recorded hole starts the match, and it completes as soon as the status
/// engine says it is decided, at which point `result` is fixed. A side may
/// field fewer players than its format allows but never more.
pub fn record_hole(m: &Match, hole_number: u8, score: HoleScore) -> Result<Match, ScoringError> {
    if !(1..=HOLES_PER_ROUND as u8).contains(&hole_number) {
        tracing::debug!(match_id = %m.id, hole = hole_number, "Rejected hole outside the round");
        return Err(ScoringError::HoleOutOfRange(hole_number));
    }
    if m.is_complete() {
        tracing::debug!(match_id = %m.id, hole = hole_number, "Rejected hole for a finished match");
        return Err(ScoringError::MatchCompleted(m.id.clone()));
    }
    let found = score.entry.format();
    if found != m.format {
        return Err(ScoringError::FormatMismatch {
            expected: m.format,
            found,
        });
    }
    if let Some(players) = [m.team1_players.len(), m.team2_players.len()]
        .into_iter()
        .find(|&n| n > m.format.side_size())
    {
        return Err(ScoringError::TooManyPlayers {
            format: m.format,
            players,
        });
    }

    let mut next = m.clone();
    next.hole_scores.resize(HOLES_PER_ROUND, None);
    next.hole_scores[usize::from(hole_number - 1)] = Some(score);
    next.current_hole = next.current_hole.max(hole_number);

    let summary = summarize(&next);
    if summary.is_complete {
        next.status = MatchStatus::Completed;
        next.result = summary.result();
        tracing::debug!(
            match_id = %next.id,
            result = ?next.result,
            holes_played = summary.holes_played,
            "Match complete"
        );
    } else {
        next.status = next.status.max(MatchStatus::InProgress);
    }
    Ok(next)
}

/// Status of a stored match, labelled with its sides' display names.
pub fn match_summary(m: &Match, team1_name: &str, team2_name: &str) -> MatchStatusSummary {
    calculate_match_status(&m.hole_scores, m.current_hole, team1_name, team2_name)
}

fn summarize(m: &Match) -> MatchStatusSummary {
    match_summary(m, "", "")
}
