use fairway_core::course::Course;
use fairway_core::player::Player;
use fairway_core::scorecard::{Scorecard, ScorecardHole, ScorecardStatus};

use crate::stableford::{net_score, stableford_points};

/// Build an individual card from gross strokes in course order.
///
/// Holes without a score (missing, `None` or zero) stay blank and do not
/// count toward the totals.
pub fn build_scorecard(
    player: &Player,
    course: &Course,
    gross_by_hole: &[Option<u8>],
) -> Scorecard {
    let holes: Vec<ScorecardHole> = course
        .holes
        .iter()
        .enumerate()
        .map(|(i, hole)| {
            let gross = gross_by_hole.get(i).copied().flatten().filter(|&g| g > 0);
            let net = net_score(gross, player.handicap, hole.stroke_index);
            ScorecardHole {
                gross,
                net,
                points: net.map(|_| {
                    stableford_points(gross, hole.par, hole.stroke_index, player.handicap)
                }),
            }
        })
        .collect();

    let entered = holes.iter().filter(|h| h.is_entered());
    let total_gross = entered.clone().filter_map(|h| h.gross).map(u32::from).sum();
    let total_net = entered.clone().filter_map(|h| h.net).sum();
    let total_points = entered.filter_map(|h| h.points).map(u32::from).sum();
    let played = holes.iter().filter(|h| h.is_entered()).count();

    Scorecard {
        player_id: player.id.clone(),
        status: ScorecardStatus::from_progress(played, course.holes.len()),
        holes,
        total_gross,
        total_net,
        total_points,
    }
}

/// Net strokes relative to par over the holes played so far.
pub fn net_to_par(card: &Scorecard, course: &Course) -> i32 {
    card.holes
        .iter()
        .zip(&course.holes)
        .filter_map(|(h, hole)| h.net.map(|net| net - i32::from(hole.par)))
        .sum()
}

/// Render a to-par figure the way leaderboards show it: `E`, `+3`, `-2`.
pub fn format_to_par(to_par: i32) -> String {
    match to_par {
        0 => "E".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}
