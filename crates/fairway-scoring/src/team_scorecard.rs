use fairway_core::allowance::AllowanceMethod;
use fairway_core::course::{Course, Hole};
use fairway_core::error::ScoringError;
use fairway_core::format::RoundFormat;
use fairway_core::player::{Player, PlayerGross, TeamId};
use fairway_core::scorecard::{ScorecardStatus, TeamHole, TeamScorecard};

use crate::stableford::{net_score, stableford_points};
use crate::team_handicap::team_handicap;
use crate::team_stableford::calculate_team_stableford_hole;

/// Build a combined team card.
///
/// `gross_rows` holds gross strokes in course order: a single team row for
/// a scramble, otherwise one row per player in the order of `players`.
/// Scramble nets off the team handicap from `method`; best-ball and shamble
/// count the best individual net; team Stableford counts the best points.
pub fn build_team_scorecard(
    format: RoundFormat,
    team_id: impl Into<TeamId>,
    players: &[Player],
    course: &Course,
    gross_rows: &[Vec<Option<u8>>],
    method: &AllowanceMethod,
) -> Result<TeamScorecard, ScoringError> {
    let mut team_hcp = None;
    let holes: Vec<TeamHole> = match format {
        RoundFormat::Scramble => {
            let handicaps: Vec<f64> = players.iter().map(|p| p.handicap).collect();
            let th = team_handicap(&handicaps, method).ok_or(
                ScoringError::TeamHandicapUnavailable {
                    team_size: players.len(),
                },
            )?;
            team_hcp = Some(th);
            let row = gross_rows.first().map(Vec::as_slice).unwrap_or_default();
            course
                .holes
                .iter()
                .enumerate()
                .map(|(i, hole)| scramble_hole(gross_at(row, i), th, hole))
                .collect()
        },
        RoundFormat::BestBall | RoundFormat::Shamble => course
            .holes
            .iter()
            .enumerate()
            .map(|(i, hole)| best_ball_hole(&player_grosses(players, gross_rows, i), hole))
            .collect(),
        RoundFormat::TeamStableford => course
            .holes
            .iter()
            .enumerate()
            .map(|(i, hole)| stableford_hole(&player_grosses(players, gross_rows, i), hole))
            .collect(),
        other => return Err(ScoringError::NotTeamFormat(other)),
    };

    let played = holes.iter().filter(|h| h.is_entered()).count();
    Ok(TeamScorecard {
        team_id: team_id.into(),
        format,
        player_ids: players.iter().map(|p| p.id.clone()).collect(),
        team_handicap: team_hcp,
        total_gross: holes.iter().filter_map(|h| h.gross).map(u32::from).sum(),
        total_net: holes.iter().filter_map(|h| h.net).sum(),
        total_points: holes.iter().filter_map(|h| h.points).map(u32::from).sum(),
        status: ScorecardStatus::from_progress(played, course.holes.len()),
        holes,
    })
}

fn gross_at(row: &[Option<u8>], hole_index: usize) -> Option<u8> {
    row.get(hole_index).copied().flatten().filter(|&g| g > 0)
}

fn player_grosses(
    players: &[Player],
    rows: &[Vec<Option<u8>>],
    hole_index: usize,
) -> Vec<PlayerGross> {
    players
        .iter()
        .enumerate()
        .map(|(p, player)| {
            let gross = rows.get(p).and_then(|row| gross_at(row, hole_index));
            PlayerGross::new(gross, player.handicap)
        })
        .collect()
}

fn scramble_hole(gross: Option<u8>, team_handicap: f64, hole: &Hole) -> TeamHole {
    let net = net_score(gross, team_handicap, hole.stroke_index);
    TeamHole {
        gross,
        net,
        points: net.map(|_| stableford_points(gross, hole.par, hole.stroke_index, team_handicap)),
        contributions: vec![gross],
    }
}

fn best_ball_hole(players: &[PlayerGross], hole: &Hole) -> TeamHole {
    let best = players
        .iter()
        .filter_map(|p| net_score(p.gross, p.handicap, hole.stroke_index).map(|net| (net, p.gross)))
        .min_by_key(|&(net, _)| net);
    TeamHole {
        gross: best.and_then(|(_, gross)| gross),
        net: best.map(|(net, _)| net),
        points: None,
        contributions: players.iter().map(|p| p.gross).collect(),
    }
}

fn stableford_hole(players: &[PlayerGross], hole: &Hole) -> TeamHole {
    let scored = players.iter().any(|p| p.gross.is_some_and(|g| g > 0));
    let result = calculate_team_stableford_hole(players, hole.par, hole.stroke_index);
    TeamHole {
        gross: None,
        net: None,
        points: scored.then_some(result.team_points),
        contributions: players.iter().map(|p| p.gross).collect(),
    }
}
