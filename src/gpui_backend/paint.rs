use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, FontWeight, PathBuilder, Pixels, TextRun, Window,
    font, point, px, quad,
};

use crate::geom::ScreenPoint;
use crate::render::{Color, LineSegment, Surface, TextStyle};

/// A [`Surface`] that paints into a GPUI window.
///
/// Device coordinates are taken relative to `bounds.origin`.
pub struct GpuiSurface<'a> {
    window: &'a mut Window,
    cx: &'a mut App,
    bounds: Bounds<Pixels>,
}

impl<'a> GpuiSurface<'a> {
    /// Wrap a window for painting inside `bounds`.
    pub fn new(window: &'a mut Window, cx: &'a mut App, bounds: Bounds<Pixels>) -> Self {
        Self { window, cx, bounds }
    }

    fn to_point(&self, pt: ScreenPoint) -> gpui::Point<Pixels> {
        point(self.bounds.origin.x + px(pt.x), self.bounds.origin.y + px(pt.y))
    }

    fn trace_outline(&self, points: &[ScreenPoint], builder: &mut PathBuilder) {
        let Some(first) = points.first() else {
            return;
        };
        builder.move_to(self.to_point(*first));
        for pt in &points[1..] {
            builder.line_to(self.to_point(*pt));
        }
        builder.line_to(self.to_point(*first));
    }
}

impl Surface for GpuiSurface<'_> {
    fn clear(&mut self, color: Color) {
        self.window.paint_quad(quad(
            self.bounds,
            Corners::all(px(0.0)),
            to_rgba(color),
            Edges::all(px(0.0)),
            to_rgba(color),
            BorderStyle::default(),
        ));
    }

    fn stroke_segments(&mut self, segments: &[LineSegment], color: Color, width: f32) {
        let mut builder = PathBuilder::stroke(px(width.max(0.5)));
        for segment in segments {
            builder.move_to(self.to_point(segment.start));
            builder.line_to(self.to_point(segment.end));
        }
        if let Ok(path) = builder.build() {
            self.window.paint_path(path, to_rgba(color));
        }
    }

    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        let mut builder = PathBuilder::fill();
        self.trace_outline(points, &mut builder);
        if let Ok(path) = builder.build() {
            self.window.paint_path(path, to_rgba(color));
        }
    }

    fn stroke_polygon(&mut self, points: &[ScreenPoint], color: Color, width: f32) {
        let mut builder = PathBuilder::stroke(px(width.max(0.5)));
        self.trace_outline(points, &mut builder);
        if let Ok(path) = builder.build() {
            self.window.paint_path(path, to_rgba(color));
        }
    }

    fn draw_text(&mut self, position: ScreenPoint, text: &str, style: &TextStyle) {
        let mut text_font = font(style.family.clone());
        if style.bold {
            text_font.weight = FontWeight::BOLD;
        }
        let run = TextRun {
            len: text.len(),
            font: text_font,
            color: to_hsla(style.color),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let shaped =
            self.window
                .text_system()
                .shape_line(text.to_string().into(), px(style.size), &[run], None);
        let line_height = shaped.ascent + shaped.descent;
        // GPUI lays text out from the top of the line, not the baseline.
        let baseline = self.to_point(position);
        let origin = point(baseline.x, baseline.y - shaped.ascent);
        let _ = shaped.paint(origin, line_height, self.window, self.cx);
    }
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
