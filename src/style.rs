//! Colors and strokes used when drawing a plot.

use crate::render::{Color, LineStyle, TextStyle};

/// Dash pattern of the data polyline, in pixels.
pub const GRAPH_DASH: [f32; 9] = [8.0, 2.0, 4.0, 2.0, 2.0, 2.0, 4.0, 2.0, 8.0];

/// Visual theme for plots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    /// Background fill.
    pub background: Color,
    /// Data polyline stroke.
    pub line: LineStyle,
    /// Axis line and arrowhead stroke.
    pub axis: LineStyle,
    /// Axis label text.
    pub axis_label: TextStyle,
    /// Marker outline width.
    pub marker_stroke_width: f32,
    /// Marker color when the digit sum is below 10.
    pub marker_low: Color,
    /// Marker color when the digit sum is 10 or more.
    pub marker_high: Color,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Black on white, matching a classic desktop panel.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            line: LineStyle::solid(Color::RED, 4.0).with_dash(GRAPH_DASH),
            axis: LineStyle::solid(Color::BLACK, 2.0),
            axis_label: TextStyle {
                color: Color::BLACK,
                size: 36.0,
                family: "Serif".to_string(),
                bold: true,
            },
            marker_stroke_width: 1.0,
            marker_low: Color::BLUE,
            marker_high: Color::RED,
        }
    }

    /// Light strokes on a dark background.
    pub fn dark() -> Self {
        let foreground = Color::new(0.9, 0.9, 0.92, 1.0);
        let light = Self::light();
        Self {
            background: Color::new(0.08, 0.08, 0.1, 1.0),
            line: LineStyle {
                color: Color::new(0.95, 0.35, 0.3, 1.0),
                ..light.line
            },
            axis: LineStyle::solid(foreground, 2.0),
            axis_label: TextStyle {
                color: foreground,
                ..light.axis_label
            },
            marker_low: Color::new(0.35, 0.6, 1.0, 1.0),
            marker_high: Color::new(1.0, 0.4, 0.35, 1.0),
            ..light
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
