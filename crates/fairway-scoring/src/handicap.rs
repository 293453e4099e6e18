use fairway_core::course::Course;

/// Handicap strokes a player receives on a hole.
///
/// Allocation uses the whole part of the handicap: one stroke on every hole
/// whose stroke index is within the handicap, a second once the handicap
/// passes 18, a third once it passes 36. 18 gives one stroke on every hole,
/// 54 gives three.
pub fn strokes_received(handicap: f64, stroke_index: u8) -> u8 {
    let full = handicap.floor() as i32;
    let si = i32::from(stroke_index);
    [0, 18, 36]
        .into_iter()
        .filter(|offset| si <= full - offset)
        .count() as u8
}

/// Strokes received on each hole of the course, in course order.
pub fn strokes_by_hole(handicap: f64, course: &Course) -> Vec<u8> {
    course
        .holes
        .iter()
        .map(|h| strokes_received(handicap, h.stroke_index))
        .collect()
}

pub fn total_strokes(handicap: f64, course: &Course) -> u32 {
    strokes_by_hole(handicap, course)
        .into_iter()
        .map(u32::from)
        .sum()
}
