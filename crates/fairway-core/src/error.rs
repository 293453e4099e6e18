use std::fmt;

use crate::format::{MatchFormat, RoundFormat};

/// Rejected caller input (course setup, player records, config).
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    HandicapOutOfRange(f64),
    HandicapPrecision(f64),
    StrokeIndexOutOfRange(u8),
    DuplicateStrokeIndex(u8),
    HoleNumberOutOfRange(u8),
    DuplicateHoleNumber(u8),
    ParOutOfRange { hole: u8, par: u8 },
    WrongHoleCount(usize),
    UnknownFormat(String),
    Config(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HandicapOutOfRange(h) => write!(f, "handicap {h} outside 0.0..=54.0"),
            Self::HandicapPrecision(h) => {
                write!(f, "handicap {h} has more than one decimal place")
            },
            Self::StrokeIndexOutOfRange(si) => write!(f, "stroke index {si} outside 1..=18"),
            Self::DuplicateStrokeIndex(si) => write!(f, "stroke index {si} used more than once"),
            Self::HoleNumberOutOfRange(n) => write!(f, "hole number {n} outside 1..=18"),
            Self::DuplicateHoleNumber(n) => write!(f, "hole {n} defined more than once"),
            Self::ParOutOfRange { hole, par } => write!(f, "hole {hole} has invalid par {par}"),
            Self::WrongHoleCount(n) => write!(f, "course has {n} holes, expected 18"),
            Self::UnknownFormat(s) => write!(f, "unknown format: {s}"),
            Self::Config(m) => write!(f, "invalid config: {m}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A scoring operation that cannot produce a result from its inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringError {
    HoleOutOfRange(u8),
    FormatMismatch {
        expected: MatchFormat,
        found: MatchFormat,
    },
    MatchCompleted(String),
    TooManyPlayers { format: MatchFormat, players: usize },
    TeamHandicapUnavailable { team_size: usize },
    MissingHandicap(String),
    MissingHole(u8),
    NotTeamFormat(RoundFormat),
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HoleOutOfRange(n) => write!(f, "hole {n} outside 1..=18"),
            Self::FormatMismatch { expected, found } => {
                write!(f, "{found} score submitted to a {expected} match")
            },
            Self::MatchCompleted(id) => write!(f, "match {id} is already complete"),
            Self::TooManyPlayers { format, players } => write!(
                f,
                "{players} players on one side of a {format} match, at most {} allowed",
                format.side_size()
            ),
            Self::TeamHandicapUnavailable { team_size } => {
                write!(f, "no team handicap allowance for a team of {team_size}")
            },
            Self::MissingHandicap(id) => write!(f, "no handicap for player {id}"),
            Self::MissingHole(n) => write!(f, "course has no hole {n}"),
            Self::NotTeamFormat(format) => write!(f, "{format} is not played on a team card"),
        }
    }
}

impl std::error::Error for ScoringError {}
