use serde::{Deserialize, Serialize};

/// Identifier of a player as persisted by the surrounding application.
pub type PlayerId = String;

/// Identifier of a tournament team (one side of a team event).
pub type TeamId = String;

/// The scoring view of a player. The handicap is a snapshot taken for one
/// computation; handicap history is kept elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Course handicap, 0.0 to 54.0 with one decimal place.
    pub handicap: f64,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, handicap: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            handicap,
        }
    }
}

/// A player's gross strokes on one hole together with the handicap used to
/// net them. `gross` of `None` (or zero) means no score has been entered yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerGross {
    pub gross: Option<u8>,
    pub handicap: f64,
}

impl PlayerGross {
    pub const fn new(gross: Option<u8>, handicap: f64) -> Self {
        Self { gross, handicap }
    }
}
