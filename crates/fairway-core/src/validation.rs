//! Input checks for the data the engine assumes is well formed.
//!
//! The scoring functions never call these themselves; course setup and
//! player management run them before data reaches the engine.

use crate::course::{Course, HOLES_PER_ROUND, Hole};
use crate::error::ValidationError;

pub const MAX_HANDICAP: f64 = 54.0;

/// Handicap must be within 0.0..=54.0 with at most one decimal place.
pub fn validate_handicap(handicap: f64) -> Result<(), ValidationError> {
    if !(0.0..=MAX_HANDICAP).contains(&handicap) {
        return Err(ValidationError::HandicapOutOfRange(handicap));
    }
    let tenths = handicap * 10.0;
    if (tenths - tenths.round()).abs() > 1e-6 {
        return Err(ValidationError::HandicapPrecision(handicap));
    }
    Ok(())
}

pub fn validate_stroke_index(stroke_index: u8) -> Result<(), ValidationError> {
    if (1..=HOLES_PER_ROUND as u8).contains(&stroke_index) {
        Ok(())
    } else {
        Err(ValidationError::StrokeIndexOutOfRange(stroke_index))
    }
}

pub fn validate_hole(hole: &Hole) -> Result<(), ValidationError> {
    if !(1..=HOLES_PER_ROUND as u8).contains(&hole.number) {
        return Err(ValidationError::HoleNumberOutOfRange(hole.number));
    }
    if !(3..=5).contains(&hole.par) {
        return Err(ValidationError::ParOutOfRange {
            hole: hole.number,
            par: hole.par,
        });
    }
    validate_stroke_index(hole.stroke_index)
}

/// A full course: 18 valid holes, numbers unique, stroke indices a
/// permutation of 1..=18.
pub fn validate_course(course: &Course) -> Result<(), ValidationError> {
    if course.holes.len() != HOLES_PER_ROUND {
        return Err(ValidationError::WrongHoleCount(course.holes.len()));
    }
    let mut seen_numbers = [false; HOLES_PER_ROUND];
    let mut seen_indices = [false; HOLES_PER_ROUND];
    for hole in &course.holes {
        validate_hole(hole)?;
        let n = usize::from(hole.number - 1);
        if std::mem::replace(&mut seen_numbers[n], true) {
            return Err(ValidationError::DuplicateHoleNumber(hole.number));
        }
        let si = usize::from(hole.stroke_index - 1);
        if std::mem::replace(&mut seen_indices[si], true) {
            return Err(ValidationError::DuplicateStrokeIndex(hole.stroke_index));
        }
    }
    Ok(())
}
