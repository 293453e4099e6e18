pub mod handicap;
pub mod hole_resolver;
pub mod leaderboard;
pub mod match_status;
pub mod scorecard;
pub mod session;
pub mod stableford;
pub mod team_handicap;
pub mod team_scorecard;
pub mod team_stableford;
pub mod tournament;

use std::collections::HashMap;

use fairway_core::config::ScoringConfig;
use fairway_core::course::Course;
use fairway_core::error::ScoringError;
use fairway_core::format::RoundFormat;
use fairway_core::match_play::{HoleEntry, Match};
use fairway_core::player::{Player, PlayerId, TeamId};
use fairway_core::scorecard::TeamScorecard;

use crate::hole_resolver::{MatchHandicaps, score_hole};
use crate::tournament::{TeamPoints, TeamStandings};

/// Scoring operations bound to one tournament's configuration.
///
/// Every function in this crate is also usable on its own; the engine only
/// threads the configured allowances and point values through them.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Net an entry for `hole_number`, resolve it and record it on the match.
    pub fn play_hole(
        &self,
        m: &Match,
        course: &Course,
        handicaps: &HashMap<PlayerId, f64>,
        hole_number: u8,
        entry: &HoleEntry,
    ) -> Result<Match, ScoringError> {
        let hole = course
            .hole(hole_number)
            .ok_or(ScoringError::MissingHole(hole_number))?;
        let side_handicaps = MatchHandicaps::lookup(m, handicaps)?;
        let score = score_hole(
            entry,
            &side_handicaps,
            hole,
            self.config.handicap.foursomes_allowance_percent,
        )?;
        session::record_hole(m, hole_number, score)
    }

    /// Build a team card using the configured default allowance.
    pub fn team_scorecard(
        &self,
        format: RoundFormat,
        team_id: impl Into<TeamId>,
        players: &[Player],
        course: &Course,
        gross_rows: &[Vec<Option<u8>>],
    ) -> Result<TeamScorecard, ScoringError> {
        team_scorecard::build_team_scorecard(
            format,
            team_id,
            players,
            course,
            gross_rows,
            &self.config.team.default_allowance,
        )
    }

    pub fn tournament_points(&self, matches: &[Match]) -> TeamPoints {
        tournament::calculate_tournament_points_with(matches, &self.config.points)
    }

    pub fn projected_points(&self, matches: &[Match]) -> TeamStandings {
        tournament::projected_tournament_points(matches, &self.config.points)
    }

    pub fn scorecard_points(
        &self,
        cards: &[TeamScorecard],
        team1_id: &str,
        team2_id: &str,
    ) -> TeamStandings {
        tournament::scorecard_team_points(cards, team1_id, team2_id, &self.config.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::format::MatchFormat;
    use fairway_core::match_play::{MatchResult, MatchStatus};
    use fairway_core::test_helpers::{make_players, standard_course};

    fn handicaps(players: &[Player]) -> HashMap<PlayerId, f64> {
        players.iter().map(|p| (p.id.clone(), p.handicap)).collect()
    }

    #[test]
    fn play_hole_nets_and_records() {
        let engine = ScoringEngine::default();
        let course = standard_course();
        let players = make_players(&[18.0, 0.0]);
        let m = Match::new(
            "m1",
            MatchFormat::Singles,
            vec!["p1".to_string()],
            vec!["p2".to_string()],
        );
        // Hole 1 SI 7: p1 gets a stroke, 5 net 4 halves p2's 4
        let entry = HoleEntry::Singles {
            team1: Some(5),
            team2: Some(4),
        };
        let next = engine
            .play_hole(&m, &course, &handicaps(&players), 1, &entry)
            .unwrap();
        assert_eq!(next.status, MatchStatus::InProgress);
        let summary = session::match_summary(&next, "A", "B");
        assert_eq!(summary.holes_played, 1);
        assert_eq!(summary.status, "AS");
    }

    #[test]
    fn play_hole_foursomes_uses_configured_allowance() {
        let mut config = ScoringConfig::default();
        config.handicap.foursomes_allowance_percent = 100.0;
        let engine = ScoringEngine::new(config);
        let course = standard_course();
        let players = make_players(&[4.0, 4.0, 0.0, 0.0]);
        let m = Match::new(
            "m2",
            MatchFormat::Foursomes,
            vec!["p1".to_string(), "p2".to_string()],
            vec!["p3".to_string(), "p4".to_string()],
        );
        // Hole 4 is SI 1; team 1 plays off 8 and receives a stroke
        let entry = HoleEntry::Foursomes {
            team1: Some(5),
            team2: Some(5),
        };
        let next = engine
            .play_hole(&m, &course, &handicaps(&players), 4, &entry)
            .unwrap();
        assert_eq!(session::match_summary(&next, "A", "B").team1_up, 1);
        assert_eq!(next.current_hole, 4);
    }

    #[test]
    fn play_hole_fourball_with_one_player_side() {
        let engine = ScoringEngine::default();
        let course = standard_course();
        let players = make_players(&[0.0, 0.0, 0.0]);
        let m = Match::new(
            "m4",
            MatchFormat::Fourball,
            vec!["p1".to_string()],
            vec!["p2".to_string(), "p3".to_string()],
        );
        let entry = HoleEntry::Fourball {
            team1: [Some(4), None],
            team2: [Some(5), Some(5)],
        };
        let next = engine
            .play_hole(&m, &course, &handicaps(&players), 1, &entry)
            .unwrap();
        assert_eq!(session::match_summary(&next, "A", "B").team1_up, 1);
    }

    #[test]
    fn play_hole_errors() {
        let engine = ScoringEngine::default();
        let course = standard_course();
        let m = Match::new(
            "m3",
            MatchFormat::Singles,
            vec!["p1".to_string()],
            vec!["ghost".to_string()],
        );
        let entry = HoleEntry::Singles {
            team1: Some(4),
            team2: Some(4),
        };
        let table = handicaps(&make_players(&[10.0]));
        assert_eq!(
            engine.play_hole(&m, &course, &table, 1, &entry),
            Err(ScoringError::MissingHandicap("ghost".to_string()))
        );
        assert_eq!(
            engine.play_hole(&m, &course, &table, 19, &entry),
            Err(ScoringError::MissingHole(19))
        );
    }

    #[test]
    fn points_use_configured_values() {
        let mut config = ScoringConfig::default();
        config.points.win = 3.0;
        config.points.halve = 1.0;
        let engine = ScoringEngine::new(config);
        let mut won = Match::new("a", MatchFormat::Singles, vec![], vec![]);
        won.result = Some(MatchResult::Team1Win);
        won.status = MatchStatus::Completed;
        let mut halved = won.clone();
        halved.result = Some(MatchResult::Halved);
        let points = engine.tournament_points(&[won, halved]);
        assert_eq!(points, TeamPoints { team1: 4.0, team2: 1.0 });
    }

    #[test]
    fn team_scorecard_uses_default_allowance() {
        let engine = ScoringEngine::default();
        let course = standard_course();
        let players = make_players(&[20.0, 8.0]);
        let card = engine
            .team_scorecard(RoundFormat::Scramble, "t1", &players, &course, &[])
            .unwrap();
        assert_eq!(card.team_handicap, Some(5.8));
    }
}
