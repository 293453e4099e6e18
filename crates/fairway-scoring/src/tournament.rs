use serde::{Deserialize, Serialize};

use fairway_core::config::PointsConfig;
use fairway_core::match_play::{Match, MatchResult, MatchStatus};
use fairway_core::scorecard::{ScorecardStatus, TeamScorecard};

use crate::match_status::get_provisional_result;

/// Tournament points per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamPoints {
    pub team1: f64,
    pub team2: f64,
}

impl TeamPoints {
    fn award(&mut self, result: MatchResult, points: &PointsConfig) {
        match result {
            MatchResult::Team1Win => self.team1 += points.win,
            MatchResult::Team2Win => self.team2 += points.win,
            MatchResult::Halved => {
                self.team1 += points.halve;
                self.team2 += points.halve;
            },
        }
    }
}

/// Points already won plus points currently projected from live play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStandings {
    pub certain: TeamPoints,
    pub projected: TeamPoints,
}

impl TeamStandings {
    /// Certain and projected points together.
    pub fn total(&self) -> TeamPoints {
        TeamPoints {
            team1: self.certain.team1 + self.projected.team1,
            team2: self.certain.team2 + self.projected.team2,
        }
    }
}

/// Sum decided match results with the default point values.
pub fn calculate_tournament_points(matches: &[Match]) -> TeamPoints {
    calculate_tournament_points_with(matches, &PointsConfig::default())
}

/// Sum decided match results. Matches without a result add nothing.
pub fn calculate_tournament_points_with(matches: &[Match], points: &PointsConfig) -> TeamPoints {
    let mut totals = TeamPoints::default();
    for result in matches.iter().filter_map(|m| m.result) {
        totals.award(result, points);
    }
    totals
}

/// Certain points from finished matches plus the provisional outcome of
/// matches still on the course. Unstarted matches add nothing.
pub fn projected_tournament_points(matches: &[Match], points: &PointsConfig) -> TeamStandings {
    let mut standings = TeamStandings::default();
    for m in matches {
        match (m.result, m.status) {
            (Some(result), _) => standings.certain.award(result, points),
            (None, MatchStatus::InProgress) => {
                standings
                    .projected
                    .award(get_provisional_result(&m.hole_scores), points);
            },
            (None, _) => {},
        }
    }
    standings
}

/// Points from team cards: a completed card earns its team one win's worth
/// of certain points, a card in progress one win's worth projected. Cards
/// for other teams are ignored.
pub fn scorecard_team_points(
    cards: &[TeamScorecard],
    team1_id: &str,
    team2_id: &str,
    points: &PointsConfig,
) -> TeamStandings {
    let mut standings = TeamStandings::default();
    for card in cards {
        let result = if card.team_id == team1_id {
            MatchResult::Team1Win
        } else if card.team_id == team2_id {
            MatchResult::Team2Win
        } else {
            continue;
        };
        match card.status {
            ScorecardStatus::Completed => standings.certain.award(result, points),
            ScorecardStatus::InProgress => standings.projected.award(result, points),
            ScorecardStatus::NotStarted => {},
        }
    }
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::format::{MatchFormat, RoundFormat};
    use fairway_core::match_play::{HoleEntry, HoleNets, HoleScore, HoleWinner};

    fn decided(id: &str, result: Option<MatchResult>) -> Match {
        let mut m = Match::new(id, MatchFormat::Singles, vec![], vec![]);
        m.result = result;
        if result.is_some() {
            m.status = MatchStatus::Completed;
        }
        m
    }

    fn live(id: &str, winners: &[HoleWinner]) -> Match {
        let mut m = Match::new(id, MatchFormat::Singles, vec![], vec![]);
        for (slot, &winner) in m.hole_scores.iter_mut().zip(winners) {
            *slot = Some(HoleScore {
                entry: HoleEntry::Singles {
                    team1: Some(4),
                    team2: Some(4),
                },
                nets: HoleNets::Singles {
                    team1: Some(4),
                    team2: Some(4),
                },
                winner: Some(winner),
            });
        }
        m.current_hole = winners.len() as u8;
        m.status = MatchStatus::InProgress;
        m
    }

    fn card(team: &str, status: ScorecardStatus) -> TeamScorecard {
        TeamScorecard {
            team_id: team.to_string(),
            format: RoundFormat::Scramble,
            player_ids: vec![],
            team_handicap: None,
            holes: vec![],
            total_gross: 0,
            total_net: 0,
            total_points: 0,
            status,
        }
    }

    #[test]
    fn wins_and_halves() {
        let matches = [
            decided("a", Some(MatchResult::Team1Win)),
            decided("b", Some(MatchResult::Team2Win)),
            decided("c", Some(MatchResult::Halved)),
            decided("d", Some(MatchResult::Team1Win)),
        ];
        let points = calculate_tournament_points(&matches);
        assert_eq!(points, TeamPoints { team1: 2.5, team2: 1.5 });
    }

    #[test]
    fn unresolved_matches_add_nothing() {
        let matches = [decided("a", None), live("b", &[HoleWinner::Team1])];
        assert_eq!(calculate_tournament_points(&matches), TeamPoints::default());
    }

    #[test]
    fn custom_point_values() {
        let config = PointsConfig { win: 2.0, halve: 1.0 };
        let matches = [
            decided("a", Some(MatchResult::Team2Win)),
            decided("b", Some(MatchResult::Halved)),
        ];
        let points = calculate_tournament_points_with(&matches, &config);
        assert_eq!(points, TeamPoints { team1: 1.0, team2: 3.0 });
    }

    #[test]
    fn projection_uses_live_leader() {
        let matches = [
            decided("a", Some(MatchResult::Team1Win)),
            live("b", &[HoleWinner::Team2, HoleWinner::Halved]),
            live("c", &[HoleWinner::Team1, HoleWinner::Team2]),
            decided("d", None),
        ];
        let standings = projected_tournament_points(&matches, &PointsConfig::default());
        assert_eq!(standings.certain, TeamPoints { team1: 1.0, team2: 0.0 });
        assert_eq!(standings.projected, TeamPoints { team1: 0.5, team2: 1.5 });
        assert_eq!(standings.total(), TeamPoints { team1: 1.5, team2: 1.5 });
    }

    #[test]
    fn team_cards_by_status() {
        let cards = [
            card("red", ScorecardStatus::Completed),
            card("blue", ScorecardStatus::InProgress),
            card("red", ScorecardStatus::NotStarted),
            card("green", ScorecardStatus::Completed),
        ];
        let standings = scorecard_team_points(&cards, "red", "blue", &PointsConfig::default());
        assert_eq!(standings.certain, TeamPoints { team1: 1.0, team2: 0.0 });
        assert_eq!(standings.projected, TeamPoints { team1: 0.0, team2: 1.0 });
    }
}
