pub mod allowance;
pub mod config;
pub mod course;
pub mod error;
pub mod format;
pub mod match_play;
pub mod player;
pub mod scorecard;
pub mod validation;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::course::{Course, Hole};
    use crate::match_play::HoleWinner;
    use crate::player::Player;

    /// Par and stroke index for each hole of the fixture course (par 72).
    const CARD: [(u8, u8); 18] = [
        (4, 7),
        (5, 13),
        (3, 15),
        (4, 1),
        (4, 9),
        (3, 17),
        (5, 5),
        (4, 11),
        (4, 3),
        (4, 8),
        (3, 16),
        (5, 2),
        (4, 12),
        (4, 6),
        (3, 18),
        (4, 10),
        (5, 14),
        (4, 4),
    ];

    /// An 18-hole, par 72 course whose stroke indices are a permutation of 1..=18.
    pub fn standard_course() -> Course {
        let holes = CARD
            .iter()
            .enumerate()
            .map(|(i, &(par, si))| Hole::new(i as u8 + 1, par, si))
            .collect();
        Course::new("Test Links", holes)
    }

    /// Create players with ids `p1..pn` and the given handicaps.
    pub fn make_players(handicaps: &[f64]) -> Vec<Player> {
        handicaps
            .iter()
            .enumerate()
            .map(|(i, &h)| Player::new(format!("p{}", i + 1), format!("Player{}", i + 1), h))
            .collect()
    }

    /// Parse a compact hole-by-hole result string: `1` team 1 won, `2` team 2
    /// won, `H` halved, `-` not played. Whitespace is ignored.
    pub fn hole_results(pattern: &str) -> Vec<Option<HoleWinner>> {
        pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '1' => Some(HoleWinner::Team1),
                '2' => Some(HoleWinner::Team2),
                'H' | 'h' => Some(HoleWinner::Halved),
                _ => None,
            })
            .collect()
    }
}
