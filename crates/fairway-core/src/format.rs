use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Match-play formats understood by the hole resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    /// One player against one player.
    Singles,
    /// Pairs playing alternate shots on a single ball.
    Foursomes,
    /// Pairs each playing their own ball; the better ball counts.
    Fourball,
}

impl MatchFormat {
    pub const ALL: [MatchFormat; 3] = [Self::Singles, Self::Foursomes, Self::Fourball];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Singles => "singles",
            Self::Foursomes => "foursomes",
            Self::Fourball => "fourball",
        }
    }

    /// Players per side.
    pub fn side_size(self) -> usize {
        match self {
            Self::Singles => 1,
            Self::Foursomes | Self::Fourball => 2,
        }
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownFormat(s.to_string()))
    }
}

/// Tournament round formats, serialized with their persisted identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundFormat {
    IndividualStroke,
    IndividualStableford,
    MatchPlaySingles,
    FourBall,
    Foursomes,
    Scramble,
    BestBall,
    TeamStableford,
    Shamble,
}

impl RoundFormat {
    pub const ALL: [RoundFormat; 9] = [
        Self::IndividualStroke,
        Self::IndividualStableford,
        Self::MatchPlaySingles,
        Self::FourBall,
        Self::Foursomes,
        Self::Scramble,
        Self::BestBall,
        Self::TeamStableford,
        Self::Shamble,
    ];

    /// Persisted identifier (underscore style).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IndividualStroke => "individual_stroke",
            Self::IndividualStableford => "individual_stableford",
            Self::MatchPlaySingles => "match_play_singles",
            Self::FourBall => "four_ball",
            Self::Foursomes => "foursomes",
            Self::Scramble => "scramble",
            Self::BestBall => "best_ball",
            Self::TeamStableford => "team_stableford",
            Self::Shamble => "shamble",
        }
    }

    /// Route path identifier (hyphen style).
    pub fn route_slug(self) -> &'static str {
        match self {
            Self::IndividualStroke => "individual-stroke",
            Self::IndividualStableford => "individual-stableford",
            Self::MatchPlaySingles => "match-play-singles",
            Self::FourBall => "four-ball",
            Self::Foursomes => "foursomes",
            Self::Scramble => "scramble",
            Self::BestBall => "best-ball",
            Self::TeamStableford => "team-stableford",
            Self::Shamble => "shamble",
        }
    }

    pub fn from_route_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.route_slug() == slug)
    }

    /// The match-play format played under this round format, if any.
    pub fn match_format(self) -> Option<MatchFormat> {
        match self {
            Self::MatchPlaySingles => Some(MatchFormat::Singles),
            Self::FourBall => Some(MatchFormat::Fourball),
            Self::Foursomes => Some(MatchFormat::Foursomes),
            _ => None,
        }
    }

    pub fn is_match_play(self) -> bool {
        self.match_format().is_some()
    }

    /// Formats scored on one combined card per team.
    pub fn is_team_scorecard(self) -> bool {
        matches!(
            self,
            Self::Scramble | Self::BestBall | Self::TeamStableford | Self::Shamble
        )
    }

    /// Formats ranked by Stableford points rather than strokes.
    pub fn uses_stableford(self) -> bool {
        matches!(self, Self::IndividualStableford | Self::TeamStableford)
    }
}

impl fmt::Display for RoundFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_to_route_and_back() {
        for format in RoundFormat::ALL {
            let slug = format.route_slug();
            assert_eq!(RoundFormat::from_route_slug(slug), Some(format));
        }
    }

    #[test]
    fn route_to_persisted_and_back() {
        let slugs = [
            "individual-stroke",
            "individual-stableford",
            "match-play-singles",
            "four-ball",
            "foursomes",
            "scramble",
            "best-ball",
            "team-stableford",
            "shamble",
        ];
        for slug in slugs {
            let format = RoundFormat::from_route_slug(slug).unwrap();
            let persisted: RoundFormat = format.as_str().parse().unwrap();
            assert_eq!(persisted.route_slug(), slug);
        }
    }

    #[test]
    fn route_slug_rejects_persisted_style() {
        assert_eq!(RoundFormat::from_route_slug("four_ball"), None);
        assert!("four-ball".parse::<RoundFormat>().is_err());
    }

    #[test]
    fn serde_uses_persisted_identifiers() {
        for format in RoundFormat::ALL {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{}\"", format.as_str()));
            let back: RoundFormat = serde_json::from_str(&json).unwrap();
            assert_eq!(back, format);
        }
        assert_eq!(
            serde_json::to_string(&MatchFormat::Fourball).unwrap(),
            "\"fourball\""
        );
    }

    #[test]
    fn match_play_round_formats_map_to_match_formats() {
        assert_eq!(
            RoundFormat::MatchPlaySingles.match_format(),
            Some(MatchFormat::Singles)
        );
        assert_eq!(
            RoundFormat::FourBall.match_format(),
            Some(MatchFormat::Fourball)
        );
        assert_eq!(
            RoundFormat::Foursomes.match_format(),
            Some(MatchFormat::Foursomes)
        );
        assert!(!RoundFormat::Scramble.is_match_play());
        assert!(RoundFormat::Shamble.is_team_scorecard());
        assert!(RoundFormat::TeamStableford.uses_stableford());
        assert!(!RoundFormat::IndividualStroke.uses_stableford());
    }

    #[test]
    fn unknown_match_format_is_an_error() {
        let err = "greensomes".parse::<MatchFormat>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownFormat("greensomes".to_string()));
        assert_eq!("singles".parse::<MatchFormat>(), Ok(MatchFormat::Singles));
    }

    #[test]
    fn side_sizes() {
        assert_eq!(MatchFormat::Singles.side_size(), 1);
        assert_eq!(MatchFormat::Foursomes.side_size(), 2);
        assert_eq!(MatchFormat::Fourball.side_size(), 2);
    }
}
