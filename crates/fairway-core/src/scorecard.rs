use serde::{Deserialize, Serialize};

use crate::format::RoundFormat;
use crate::player::{PlayerId, TeamId};

/// Progress of a stroke-play or Stableford card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorecardStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl ScorecardStatus {
    /// Status of a card with `entered` of `total` holes scored.
    pub fn from_progress(entered: usize, total: usize) -> Self {
        if entered == 0 {
            Self::NotStarted
        } else if entered >= total {
            Self::Completed
        } else {
            Self::InProgress
        }
    }
}

/// One hole on an individual card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorecardHole {
    pub gross: Option<u8>,
    #[serde(default)]
    pub net: Option<i32>,
    #[serde(default)]
    pub points: Option<u8>,
}

impl ScorecardHole {
    pub fn is_entered(&self) -> bool {
        self.gross.is_some_and(|g| g > 0)
    }
}

/// An individual player's card for a stroke-play or Stableford round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub player_id: PlayerId,
    pub holes: Vec<ScorecardHole>,
    pub total_gross: u32,
    pub total_net: i32,
    pub total_points: u32,
    pub status: ScorecardStatus,
}

impl Scorecard {
    pub fn holes_played(&self) -> usize {
        self.holes.iter().filter(|h| h.is_entered()).count()
    }
}

/// One hole on a team card: the counted team score plus what each player
/// contributed (gross for best-ball formats, points for team Stableford).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamHole {
    pub gross: Option<u8>,
    pub net: Option<i32>,
    pub points: Option<u8>,
    #[serde(default)]
    pub contributions: Vec<Option<u8>>,
}

impl TeamHole {
    pub fn is_entered(&self) -> bool {
        self.gross.is_some_and(|g| g > 0) || self.points.is_some()
    }
}

/// A combined card for scramble, best-ball, shamble and team Stableford.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamScorecard {
    pub team_id: TeamId,
    pub format: RoundFormat,
    pub player_ids: Vec<PlayerId>,
    /// Allowance used for scramble formats.
    #[serde(default)]
    pub team_handicap: Option<f64>,
    pub holes: Vec<TeamHole>,
    pub total_gross: u32,
    pub total_net: i32,
    pub total_points: u32,
    pub status: ScorecardStatus,
}
