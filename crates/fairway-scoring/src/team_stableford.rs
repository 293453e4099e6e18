use serde::{Deserialize, Serialize};

use fairway_core::player::PlayerGross;

use crate::stableford::stableford_points;

/// Stableford result for one hole of a best-ball team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStablefordHole {
    /// The best individual score on the hole.
    pub team_points: u8,
    /// Each player's points, in the order the players were given.
    pub player_points: Vec<u8>,
}

/// Score each player independently, then count the best.
pub fn calculate_team_stableford_hole(
    players: &[PlayerGross],
    par: u8,
    stroke_index: u8,
) -> TeamStablefordHole {
    let player_points: Vec<u8> = players
        .iter()
        .map(|p| stableford_points(p.gross, par, stroke_index, p.handicap))
        .collect();
    let team_points = player_points.iter().copied().max().unwrap_or(0);
    TeamStablefordHole {
        team_points,
        player_points,
    }
}
