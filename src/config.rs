//! Geometric configuration for the plot view.

/// Configuration for plot layout and decorations.
///
/// All pixel values are in logical pixels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotViewConfig {
    /// Fraction of each axis span added as margin on both ends.
    pub padding_frac: f64,
    /// Span substituted for a zero-width data range before padding.
    pub degenerate_span: f64,
    /// Half the width (and height) of a point marker.
    pub marker_half_size: f32,
    /// Arrowhead length; the arrow base is twice this wide.
    pub arrow_size: f32,
    /// Offset of the "y" label baseline from the top of the Y axis.
    pub y_label_offset: (f32, f32),
    /// Offset of the "x" label baseline from the right end of the X axis.
    pub x_label_offset: (f32, f32),
}

impl Default for PlotViewConfig {
    fn default() -> Self {
        Self {
            padding_frac: 0.1,
            degenerate_span: 1.0,
            marker_half_size: 7.0,
            arrow_size: 10.0,
            y_label_offset: (10.0, 30.0),
            x_label_offset: (-20.0, 30.0),
        }
    }
}
