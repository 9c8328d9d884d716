//! Point markers colored by the digit sum of each Y value.

use crate::geom::ScreenPoint;

/// Digit sums at or above this value use the high marker color.
pub const DIGIT_SUM_THRESHOLD: u32 = 10;

/// Marker color class for a data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerClass {
    /// Digit sum below [`DIGIT_SUM_THRESHOLD`].
    Low,
    /// Digit sum of [`DIGIT_SUM_THRESHOLD`] or more.
    High,
}

impl MarkerClass {
    /// Classify a Y value by the digit sum of its truncated absolute value.
    pub fn of(y: f64) -> Self {
        if digit_sum(y) < DIGIT_SUM_THRESHOLD {
            Self::Low
        } else {
            Self::High
        }
    }
}

/// Sum of the decimal digits of `trunc(|y|)`.
///
/// The integer part saturates at `u64::MAX`; NaN counts as zero.
pub fn digit_sum(y: f64) -> u32 {
    // `as` saturates for out-of-range floats and maps NaN to 0.
    let mut value = y.abs().trunc() as u64;
    let mut sum = 0;
    while value > 0 {
        sum += (value % 10) as u32;
        value /= 10;
    }
    sum
}

/// Vertices of the marker triangle around `center`.
///
/// The apex sits `half_size` pixels below the center and the base corners
/// `half_size` pixels above it, to either side.
pub fn marker_triangle(center: ScreenPoint, half_size: f32) -> [ScreenPoint; 3] {
    [
        center.offset(0.0, half_size),
        center.offset(-half_size, -half_size),
        center.offset(half_size, -half_size),
    ]
}
