use serde::{Deserialize, Serialize};

use crate::course::HOLES_PER_ROUND;
use crate::format::MatchFormat;
use crate::player::PlayerId;

/// Winner of a single match-play hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleWinner {
    Team1,
    Team2,
    Halved,
}

impl HoleWinner {
    /// The same result seen from the other side.
    pub fn swapped(self) -> Self {
        match self {
            Self::Team1 => Self::Team2,
            Self::Team2 => Self::Team1,
            Self::Halved => Self::Halved,
        }
    }

    /// Change to the team 1 differential.
    pub fn differential(self) -> i32 {
        match self {
            Self::Team1 => 1,
            Self::Team2 => -1,
            Self::Halved => 0,
        }
    }
}

/// Final (or projected) outcome of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Team1Win,
    Team2Win,
    Halved,
}

impl MatchResult {
    /// Outcome implied by the sign of the team 1 differential.
    pub fn from_differential(team1_up: i32) -> Self {
        match team1_up.signum() {
            1 => Self::Team1Win,
            -1 => Self::Team2Win,
            _ => Self::Halved,
        }
    }
}

/// Lifecycle of a match. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// Raw gross strokes entered for one hole, shaped by the match format.
/// `None` means that side or player has not entered a score yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum HoleEntry {
    Singles {
        team1: Option<u8>,
        team2: Option<u8>,
    },
    /// One ball per side.
    Foursomes {
        team1: Option<u8>,
        team2: Option<u8>,
    },
    Fourball {
        team1: [Option<u8>; 2],
        team2: [Option<u8>; 2],
    },
}

impl HoleEntry {
    pub fn format(&self) -> MatchFormat {
        match self {
            Self::Singles { .. } => MatchFormat::Singles,
            Self::Foursomes { .. } => MatchFormat::Foursomes,
            Self::Fourball { .. } => MatchFormat::Fourball,
        }
    }
}

/// Net scores for one hole, already adjusted for handicap strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum HoleNets {
    Singles {
        team1: Option<i32>,
        team2: Option<i32>,
    },
    Foursomes {
        team1: Option<i32>,
        team2: Option<i32>,
    },
    Fourball {
        team1: [Option<i32>; 2],
        team2: [Option<i32>; 2],
    },
}

impl HoleNets {
    pub fn format(&self) -> MatchFormat {
        match self {
            Self::Singles { .. } => MatchFormat::Singles,
            Self::Foursomes { .. } => MatchFormat::Foursomes,
            Self::Fourball { .. } => MatchFormat::Fourball,
        }
    }

    /// The same nets with the two sides exchanged.
    pub fn swapped(&self) -> Self {
        match *self {
            Self::Singles { team1, team2 } => Self::Singles {
                team1: team2,
                team2: team1,
            },
            Self::Foursomes { team1, team2 } => Self::Foursomes {
                team1: team2,
                team2: team1,
            },
            Self::Fourball { team1, team2 } => Self::Fourball {
                team1: team2,
                team2: team1,
            },
        }
    }
}

/// A scored match-play hole: what was entered, what it nets to, who won.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleScore {
    pub entry: HoleEntry,
    pub nets: HoleNets,
    pub winner: Option<HoleWinner>,
}

/// Anything that can report the resolved winner of a hole.
pub trait ResolvedHole {
    fn winner(&self) -> Option<HoleWinner>;
}

impl ResolvedHole for HoleWinner {
    fn winner(&self) -> Option<HoleWinner> {
        Some(*self)
    }
}

impl ResolvedHole for HoleScore {
    fn winner(&self) -> Option<HoleWinner> {
        self.winner
    }
}

impl<T: ResolvedHole> ResolvedHole for Option<T> {
    fn winner(&self) -> Option<HoleWinner> {
        self.as_ref().and_then(ResolvedHole::winner)
    }
}

/// A match-play contest between two sides over 18 holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub format: MatchFormat,
    pub team1_players: Vec<PlayerId>,
    pub team2_players: Vec<PlayerId>,
    /// One slot per hole; `None` until the hole is scored.
    pub hole_scores: Vec<Option<HoleScore>>,
    /// Highest hole number reached so far, 0 before the first hole.
    pub current_hole: u8,
    pub status: MatchStatus,
    /// Set exactly when `status` is `Completed`.
    pub result: Option<MatchResult>,
}

impl Match {
    pub fn new(
        id: impl Into<String>,
        format: MatchFormat,
        team1_players: Vec<PlayerId>,
        team2_players: Vec<PlayerId>,
    ) -> Self {
        Self {
            id: id.into(),
            format,
            team1_players,
            team2_players,
            hole_scores: vec![None; HOLES_PER_ROUND],
            current_hole: 0,
            status: MatchStatus::NotStarted,
            result: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == MatchStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match_has_eighteen_empty_holes() {
        let m = Match::new(
            "m1",
            MatchFormat::Singles,
            vec!["a".to_string()],
            vec!["b".to_string()],
        );
        assert_eq!(m.hole_scores.len(), 18);
        assert!(m.hole_scores.iter().all(Option::is_none));
        assert_eq!(m.status, MatchStatus::NotStarted);
        assert!(m.result.is_none());
        assert!(!m.is_complete());
    }

    #[test]
    fn result_from_differential_sign() {
        assert_eq!(MatchResult::from_differential(3), MatchResult::Team1Win);
        assert_eq!(MatchResult::from_differential(-1), MatchResult::Team2Win);
        assert_eq!(MatchResult::from_differential(0), MatchResult::Halved);
    }

    #[test]
    fn status_ordering_is_forward() {
        assert!(MatchStatus::NotStarted < MatchStatus::InProgress);
        assert!(MatchStatus::InProgress < MatchStatus::Completed);
    }

    #[test]
    fn resolved_hole_through_option() {
        let holes: Vec<Option<HoleWinner>> = vec![Some(HoleWinner::Team2), None];
        assert_eq!(holes[0].winner(), Some(HoleWinner::Team2));
        assert_eq!(holes[1].winner(), None);
    }

    #[test]
    fn hole_entry_json_is_tagged_by_format() {
        let entry = HoleEntry::Fourball {
            team1: [Some(4), None],
            team2: [Some(5), Some(3)],
        };
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["format"], "fourball");
        assert_eq!(json["team1"], serde_json::json!([4, null]));
        let back: HoleEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
        assert_eq!(back.format(), MatchFormat::Fourball);
    }

    #[test]
    fn match_msgpack_roundtrip() {
        let mut m = Match::new(
            "m2",
            MatchFormat::Foursomes,
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        );
        m.hole_scores[0] = Some(HoleScore {
            entry: HoleEntry::Foursomes {
                team1: Some(4),
                team2: Some(5),
            },
            nets: HoleNets::Foursomes {
                team1: Some(3),
                team2: Some(5),
            },
            winner: Some(HoleWinner::Team1),
        });
        m.current_hole = 1;
        m.status = MatchStatus::InProgress;
        let bytes = rmp_serde::to_vec_named(&m).unwrap();
        let back: Match = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(back, m);
    }
}
