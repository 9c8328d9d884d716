//! Geometric primitives used by the plotting pipeline.
//!
//! [`Point`] is a data-space coordinate. [`ScreenPoint`] and [`ScreenRect`]
//! are device-space (pixel) values with the origin at the top-left corner and
//! Y growing downward.

/// A point in data space.
///
/// Use this when providing explicit X/Y values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A point in device space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in pixels.
    pub x: f32,
    /// Y value in pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Return this point moved by the given pixel deltas.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A rectangle in device space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle anchored at the origin with the given size.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(width, height))
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive, finite area.
    pub fn is_valid(&self) -> bool {
        self.width().is_finite()
            && self.height().is_finite()
            && self.width() > 0.0
            && self.height() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_area_rect_is_invalid() {
        assert!(!ScreenRect::from_size(0.0, 100.0).is_valid());
        assert!(!ScreenRect::from_size(100.0, 0.0).is_valid());
        assert!(!ScreenRect::from_size(f32::NAN, 10.0).is_valid());
        assert!(ScreenRect::from_size(1.0, 1.0).is_valid());
    }

    #[test]
    fn point_finiteness() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }
}
