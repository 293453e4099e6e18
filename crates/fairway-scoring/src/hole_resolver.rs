use std::cmp::Ordering;
use std::collections::HashMap;

use fairway_core::course::Hole;
use fairway_core::error::ScoringError;
use fairway_core::match_play::{HoleEntry, HoleNets, HoleScore, HoleWinner, Match};
use fairway_core::player::PlayerId;

use crate::stableford::net_score;
use crate::team_handicap::foursomes_handicap;

/// Decide a match-play hole from precomputed net scores.
///
/// Lower net wins, equal nets halve. Four-ball sides count their better
/// ball; a partner without a score is left out rather than treated as zero.
/// Returns `None` while any side still lacks a score for the hole.
pub fn determine_hole_winner(nets: &HoleNets) -> Option<HoleWinner> {
    let (team1, team2) = match *nets {
        HoleNets::Singles { team1, team2 } | HoleNets::Foursomes { team1, team2 } => {
            (team1?, team2?)
        },
        HoleNets::Fourball { team1, team2 } => (best_ball(&team1)?, best_ball(&team2)?),
    };
    Some(match team1.cmp(&team2) {
        Ordering::Less => HoleWinner::Team1,
        Ordering::Greater => HoleWinner::Team2,
        Ordering::Equal => HoleWinner::Halved,
    })
}

fn best_ball(nets: &[Option<i32>]) -> Option<i32> {
    nets.iter().flatten().copied().min()
}

/// Playing handicaps for each side of a match, in the same order as the
/// match's player lists.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchHandicaps {
    pub team1: Vec<f64>,
    pub team2: Vec<f64>,
}

impl MatchHandicaps {
    /// Resolve every player in the match against a handicap table.
    pub fn lookup(m: &Match, handicaps: &HashMap<PlayerId, f64>) -> Result<Self, ScoringError> {
        let side = |ids: &[PlayerId]| {
            ids.iter()
                .map(|id| {
                    handicaps
                        .get(id)
                        .copied()
                        .ok_or_else(|| ScoringError::MissingHandicap(id.clone()))
                })
                .collect::<Result<Vec<_>, _>>()
        };
        Ok(Self {
            team1: side(&m.team1_players)?,
            team2: side(&m.team2_players)?,
        })
    }
}

fn player_handicap(side: &[f64], index: usize, label: &str) -> Result<f64, ScoringError> {
    side.get(index)
        .copied()
        .ok_or_else(|| ScoringError::MissingHandicap(format!("{label} player {}", index + 1)))
}

/// Convert entered gross strokes into net scores for the hole.
///
/// Singles and four-ball players net off their own handicap; a foursomes
/// side nets off `foursomes_allowance_percent` of the pair's combined
/// handicap.
pub fn net_hole(
    entry: &HoleEntry,
    handicaps: &MatchHandicaps,
    hole: &Hole,
    foursomes_allowance_percent: f64,
) -> Result<HoleNets, ScoringError> {
    let si = hole.stroke_index;
    let nets = match *entry {
        HoleEntry::Singles { team1, team2 } => HoleNets::Singles {
            team1: net_score(team1, player_handicap(&handicaps.team1, 0, "team1")?, si),
            team2: net_score(team2, player_handicap(&handicaps.team2, 0, "team2")?, si),
        },
        HoleEntry::Foursomes { team1, team2 } => {
            let h1 = foursomes_handicap(&handicaps.team1, foursomes_allowance_percent);
            let h2 = foursomes_handicap(&handicaps.team2, foursomes_allowance_percent);
            HoleNets::Foursomes {
                team1: net_score(team1, h1, si),
                team2: net_score(team2, h2, si),
            }
        },
        HoleEntry::Fourball { team1, team2 } => HoleNets::Fourball {
            team1: fourball_nets(&team1, &handicaps.team1, "team1", si)?,
            team2: fourball_nets(&team2, &handicaps.team2, "team2", si)?,
        },
    };
    Ok(nets)
}

/// Net each four-ball partner who has a score. A side may field a single
/// player, so an empty slot never needs a handicap.
fn fourball_nets(
    gross: &[Option<u8>; 2],
    side: &[f64],
    label: &str,
    stroke_index: u8,
) -> Result<[Option<i32>; 2], ScoringError> {
    let mut nets = [None; 2];
    for (i, (net, &g)) in nets.iter_mut().zip(gross).enumerate() {
        if g.is_some_and(|g| g > 0) {
            *net = net_score(g, player_handicap(side, i, label)?, stroke_index);
        }
    }
    Ok(nets)
}

/// Net the entry and resolve the hole in one step.
pub fn score_hole(
    entry: &HoleEntry,
    handicaps: &MatchHandicaps,
    hole: &Hole,
    foursomes_allowance_percent: f64,
) -> Result<HoleScore, ScoringError> {
    let nets = net_hole(entry, handicaps, hole, foursomes_allowance_percent)?;
    let winner = determine_hole_winner(&nets);
    tracing::trace!(hole = hole.number, ?winner, "Resolved hole");
    Ok(HoleScore {
        entry: *entry,
        nets,
        winner,
    })
}
