use serde::{Deserialize, Serialize};

/// Number of holes in a full round.
pub const HOLES_PER_ROUND: usize = 18;

/// A single hole as defined on the course card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    /// Hole number, 1 to 18.
    pub number: u8,
    pub par: u8,
    /// Difficulty ranking used to allocate handicap strokes (1 = hardest).
    pub stroke_index: u8,
    #[serde(default)]
    pub yardage: Option<u32>,
}

impl Hole {
    pub const fn new(number: u8, par: u8, stroke_index: u8) -> Self {
        Self {
            number,
            par,
            stroke_index,
            yardage: None,
        }
    }
}

/// A course card: a name and its holes in playing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Course {
    pub fn new(name: impl Into<String>, holes: Vec<Hole>) -> Self {
        Self {
            name: name.into(),
            holes,
        }
    }

    /// Look up a hole by its number (1-based).
    pub fn hole(&self, number: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }

    pub fn par_total(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par)).sum()
    }
}
