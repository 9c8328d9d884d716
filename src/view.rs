//! Data ranges and bounds.

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range.
    pub fn center(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Check whether the value lies inside the inclusive bounds.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Check whether the range includes zero, i.e. an axis line can be drawn.
    pub fn straddles_zero(&self) -> bool {
        self.contains(0.0)
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Add a fractional margin of the span on both ends.
    ///
    /// A zero-span range stays zero-span; combine with
    /// [`Range::with_zero_span_fallback`] first when that matters.
    pub fn padded(&self, frac: f64) -> Self {
        let padding = self.span().abs() * frac;
        Self {
            min: self.min - padding,
            max: self.max + padding,
        }
    }

    /// Replace a zero-span range with one of `span` units around its value.
    ///
    /// Ranges with any positive span are returned unchanged.
    pub fn with_zero_span_fallback(&self, span: f64) -> Self {
        if self.span() != 0.0 {
            return *self;
        }
        let half = span * 0.5;
        Self {
            min: self.min - half,
            max: self.max + half,
        }
    }
}

/// Data bounds on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl DataBounds {
    /// Create bounds from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// Check whether both axes are valid.
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }

    /// Give any zero-span axis a synthetic span of `span` units.
    pub fn with_zero_span_fallback(&self, span: f64) -> Self {
        Self {
            x: self.x.with_zero_span_fallback(span),
            y: self.y.with_zero_span_fallback(span),
        }
    }

    /// Apply fractional padding to both axes.
    pub fn padded(&self, frac: f64) -> Self {
        Self {
            x: self.x.padded(frac),
            y: self.y.padded(frac),
        }
    }
}
