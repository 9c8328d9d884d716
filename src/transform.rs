//! Coordinate transforms between data and device space.

use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::view::DataBounds;

/// Uniform scale-and-offset map from data space into device space.
///
/// A transform is computed fresh for each render pass and shared by every
/// drawing step of that pass. X and Y use the same scale, so the aspect ratio
/// of the data is preserved and the plot is centered on the unused axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    bounds: DataBounds,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl ViewTransform {
    /// Fit already padded `bounds` into a canvas of the given size.
    ///
    /// Returns `None` when the canvas has no area or the bounds have no span.
    pub fn fit(bounds: DataBounds, width: f32, height: f32) -> Option<Self> {
        let screen = ScreenRect::from_size(width, height);
        if !screen.is_valid() || !bounds.is_valid() {
            return None;
        }
        let width = f64::from(width);
        let height = f64::from(height);
        let scale_x = width / bounds.x.span();
        let scale_y = height / bounds.y.span();
        let scale = scale_x.min(scale_y);
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        Some(Self {
            bounds,
            scale,
            offset_x: (width - bounds.x.span() * scale) / 2.0,
            offset_y: (height - bounds.y.span() * scale) / 2.0,
        })
    }

    /// Fit raw data bounds: give zero-span axes a span of `degenerate_span`, pad by
    /// `padding_frac` of the span on both ends, then fit the canvas.
    pub fn fit_data(
        raw: DataBounds,
        padding_frac: f64,
        degenerate_span: f64,
        width: f32,
        height: f32,
    ) -> Option<Self> {
        let bounds = raw.with_zero_span_fallback(degenerate_span).padded(padding_frac);
        Self::fit(bounds, width, height)
    }

    /// Padded data bounds covered by this transform.
    pub fn bounds(&self) -> DataBounds {
        self.bounds
    }

    /// Pixels per data unit on both axes.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Horizontal centering offset in pixels.
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Vertical centering offset in pixels.
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Map a data point into device space. Device Y grows downward.
    pub fn to_device(&self, point: Point) -> ScreenPoint {
        let x = (point.x - self.bounds.x.min) * self.scale + self.offset_x;
        let y = (self.bounds.y.max - point.y) * self.scale + self.offset_y;
        ScreenPoint::new(x as f32, y as f32)
    }

    /// Map a device point back into data space.
    pub fn to_data(&self, point: ScreenPoint) -> Point {
        let x = (f64::from(point.x) - self.offset_x) / self.scale + self.bounds.x.min;
        let y = self.bounds.y.max - (f64::from(point.y) - self.offset_y) / self.scale;
        Point::new(x, y)
    }
}
