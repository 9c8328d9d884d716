//! Rendering primitives and the drawing-surface seam.
//!
//! These types are backend-agnostic. A render pass produces a [`RenderList`]
//! which is then replayed onto any [`Surface`] (for example the GPUI backend).

use crate::geom::ScreenPoint;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
}

/// Line stroke styling.
///
/// The width and dash lengths are expressed in logical pixels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Alternating on/off lengths. Empty means a solid line.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dash: Vec<f32>,
}

impl LineStyle {
    /// Create a solid line style.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: Vec::new(),
        }
    }

    /// Set the dash pattern.
    pub fn with_dash(mut self, dash: impl Into<Vec<f32>>) -> Self {
        self.dash = dash.into();
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
    /// Font family name.
    pub family: String,
    /// Use a bold weight.
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
            family: "Serif".to_string(),
            bold: false,
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }

    /// Segment length in pixels.
    pub fn length(&self) -> f32 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at parameter `t` in `0.0..=1.0` along the segment.
    fn lerp(&self, t: f32) -> ScreenPoint {
        ScreenPoint::new(
            self.start.x + (self.end.x - self.start.x) * t,
            self.start.y + (self.end.y - self.start.y) * t,
        )
    }
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill the whole surface.
    Clear(Color),
    /// Stroke line segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f32,
    },
    /// Draw a closed polygon; the outline is stroked before the fill.
    Polygon {
        /// Polygon vertices in order.
        points: Vec<ScreenPoint>,
        /// Fill color, if filled.
        fill: Option<Color>,
        /// Outline color and width, if stroked.
        stroke: Option<(Color, f32)>,
    },
    /// Draw text with its baseline starting at `position`.
    Text {
        /// Baseline origin.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the list has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Draw every command, in order, onto the surface.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match command {
                RenderCommand::Clear(color) => surface.clear(*color),
                RenderCommand::LineSegments {
                    segments,
                    color,
                    width,
                } => {
                    if !segments.is_empty() {
                        surface.stroke_segments(segments, *color, *width);
                    }
                }
                RenderCommand::Polygon {
                    points,
                    fill,
                    stroke,
                } => {
                    if points.len() < 3 {
                        continue;
                    }
                    if let Some((color, width)) = stroke {
                        surface.stroke_polygon(points, *color, *width);
                    }
                    if let Some(color) = fill {
                        surface.fill_polygon(points, *color);
                    }
                }
                RenderCommand::Text {
                    position,
                    text,
                    style,
                } => {
                    if !text.is_empty() {
                        surface.draw_text(*position, text, style);
                    }
                }
            }
        }
    }
}

/// A 2D drawing target in device space.
///
/// Coordinates are relative to the top-left corner of the drawing area.
pub trait Surface {
    /// Fill the whole drawing area with a color.
    fn clear(&mut self, color: Color);

    /// Stroke independent line segments.
    fn stroke_segments(&mut self, segments: &[LineSegment], color: Color, width: f32);

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color);

    /// Stroke the outline of a closed polygon.
    fn stroke_polygon(&mut self, points: &[ScreenPoint], color: Color, width: f32);

    /// Draw text with its baseline starting at `position`.
    fn draw_text(&mut self, position: ScreenPoint, text: &str, style: &TextStyle);
}

/// Build the visible segments of a polyline stroked with a dash pattern.
///
/// The pattern alternates on/off lengths and continues across vertices. An
/// odd-length pattern flips phase on each repetition. An empty pattern, or
/// one without a positive length, yields a solid line.
pub fn build_polyline_segments(points: &[ScreenPoint], dash: &[f32], out: &mut Vec<LineSegment>) {
    out.clear();
    if points.len() < 2 {
        return;
    }
    let dashed = dash.iter().all(|len| len.is_finite() && *len >= 0.0)
        && dash.iter().any(|len| *len > 0.0);
    if !dashed {
        out.extend(
            points
                .windows(2)
                .map(|pair| LineSegment::new(pair[0], pair[1])),
        );
        return;
    }

    let mut index = 0;
    let mut remaining = dash[0];
    let mut on = true;
    for pair in points.windows(2) {
        let segment = LineSegment::new(pair[0], pair[1]);
        let length = segment.length();
        if length <= 0.0 {
            continue;
        }
        let mut pos = 0.0_f32;
        while pos < length {
            let step = remaining.min(length - pos);
            if on && step > 0.0 {
                let start = segment.lerp(pos / length);
                let end = segment.lerp((pos + step) / length);
                out.push(LineSegment::new(start, end));
            }
            pos += step;
            remaining -= step;
            if remaining <= 0.0 {
                index = (index + 1) % dash.len();
                remaining = dash[index];
                on = !on;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(length: f32) -> Vec<ScreenPoint> {
        vec![ScreenPoint::new(0.0, 0.0), ScreenPoint::new(length, 0.0)]
    }

    fn assert_near(actual: ScreenPoint, expected: (f32, f32)) {
        assert!(
            (actual.x - expected.0).abs() < 1e-4 && (actual.y - expected.1).abs() < 1e-4,
            "{actual:?} != {expected:?}"
        );
    }

    fn assert_x_spans(out: &[LineSegment], expected: &[(f32, f32)]) {
        assert_eq!(out.len(), expected.len());
        for (segment, (start, end)) in out.iter().zip(expected) {
            assert_near(segment.start, (*start, 0.0));
            assert_near(segment.end, (*end, 0.0));
        }
    }

    #[test]
    fn solid_polyline_keeps_every_edge() {
        let points = [
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(10.0, 0.0),
            ScreenPoint::new(10.0, 10.0),
        ];
        let mut out = Vec::new();
        build_polyline_segments(&points, &[], &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].end, ScreenPoint::new(10.0, 10.0));
    }

    #[test]
    fn single_point_draws_nothing() {
        let mut out = vec![LineSegment::new(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(1.0, 1.0),
        )];
        build_polyline_segments(&[ScreenPoint::new(3.0, 3.0)], &[4.0, 2.0], &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn dash_pattern_splits_segment() {
        let mut out = Vec::new();
        build_polyline_segments(&horizontal(10.0), &[4.0, 2.0], &mut out);
        assert_x_spans(&out, &[(0.0, 4.0), (6.0, 10.0)]);
    }

    #[test]
    fn dash_continues_across_vertices() {
        let points = [
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(3.0, 0.0),
            ScreenPoint::new(3.0, 5.0),
        ];
        let mut out = Vec::new();
        build_polyline_segments(&points, &[4.0, 2.0], &mut out);
        assert_eq!(out.len(), 3);
        assert_near(out[1].start, (3.0, 0.0));
        assert_near(out[1].end, (3.0, 1.0));
        assert_near(out[2].start, (3.0, 3.0));
        assert_near(out[2].end, (3.0, 5.0));
    }

    #[test]
    fn odd_dash_pattern_alternates_phase() {
        let mut out = Vec::new();
        build_polyline_segments(&horizontal(12.0), &[2.0, 1.0, 3.0], &mut out);
        // on 2, off 1, on 3, off 2, on 1, off 3
        assert_x_spans(&out, &[(0.0, 2.0), (3.0, 6.0), (8.0, 9.0)]);
    }

    #[test]
    fn all_zero_pattern_is_solid() {
        let mut out = Vec::new();
        build_polyline_segments(&horizontal(5.0), &[0.0, 0.0], &mut out);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn replay_skips_degenerate_commands() {
        #[derive(Default)]
        struct Counter {
            calls: usize,
        }
        impl Surface for Counter {
            fn clear(&mut self, _: Color) {
                self.calls += 1;
            }
            fn stroke_segments(&mut self, _: &[LineSegment], _: Color, _: f32) {
                self.calls += 1;
            }
            fn fill_polygon(&mut self, _: &[ScreenPoint], _: Color) {
                self.calls += 1;
            }
            fn stroke_polygon(&mut self, _: &[ScreenPoint], _: Color, _: f32) {
                self.calls += 1;
            }
            fn draw_text(&mut self, _: ScreenPoint, _: &str, _: &TextStyle) {
                self.calls += 1;
            }
        }

        let mut list = RenderList::new();
        list.push(RenderCommand::LineSegments {
            segments: Vec::new(),
            color: Color::BLACK,
            width: 1.0,
        });
        list.push(RenderCommand::Polygon {
            points: vec![ScreenPoint::new(0.0, 0.0), ScreenPoint::new(1.0, 0.0)],
            fill: Some(Color::RED),
            stroke: None,
        });
        list.push(RenderCommand::Text {
            position: ScreenPoint::new(0.0, 0.0),
            text: String::new(),
            style: TextStyle::default(),
        });
        let mut counter = Counter::default();
        list.replay(&mut counter);
        assert_eq!(counter.calls, 0);
    }
}
