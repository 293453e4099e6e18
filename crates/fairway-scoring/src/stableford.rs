use crate::handicap::strokes_received;

/// Net strokes on a hole, or `None` when no score has been entered.
///
/// A gross of zero is the "not yet played" sentinel, never a real score.
pub fn net_score(gross: Option<u8>, handicap: f64, stroke_index: u8) -> Option<i32> {
    match gross {
        Some(g) if g > 0 => {
            Some(i32::from(g) - i32::from(strokes_received(handicap, stroke_index)))
        },
        _ => None,
    }
}

/// Stableford points for a hole on the standard scale:
///
/// | Net vs par          | Points |
/// |---------------------|--------|
/// | 3 or more under     | 5      |
/// | 2 under (eagle)     | 4      |
/// | 1 under (birdie)    | 3      |
/// | par                 | 2      |
/// | 1 over (bogey)      | 1      |
/// | 2 or more over      | 0      |
///
/// No score entered gives 0.
pub fn stableford_points(gross: Option<u8>, par: u8, stroke_index: u8, handicap: f64) -> u8 {
    let Some(net) = net_score(gross, handicap, stroke_index) else {
        return 0;
    };
    points_for_diff(i32::from(par) - net)
}

fn points_for_diff(diff: i32) -> u8 {
    match diff {
        d if d >= 3 => 5,
        2 => 4,
        1 => 3,
        0 => 2,
        -1 => 1,
        _ => 0,
    }
}
