//! A single render pass: scene snapshot in, render list out.

use std::sync::Arc;

use crate::axis::build_axes;
use crate::config::PlotViewConfig;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::marker::{MarkerClass, marker_triangle};
use crate::render::{RenderCommand, RenderList, build_polyline_segments};
use crate::series::Series;
use crate::style::Theme;
use crate::transform::ViewTransform;

/// Everything needed to draw one frame.
///
/// Cloning is cheap: the series is shared.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Series to draw, if any.
    pub series: Option<Arc<Series>>,
    /// Draw the coordinate axes.
    pub show_axis: bool,
    /// Draw a marker at every point.
    pub show_markers: bool,
    /// Colors and strokes.
    pub theme: Theme,
    /// Layout constants.
    pub config: PlotViewConfig,
}

impl Scene {
    /// Compute the transform used for a canvas of the given size.
    ///
    /// Returns `None` for a missing or empty series, a zero-area canvas, or
    /// bounds whose padded span overflows to infinity.
    pub fn transform(&self, width: f32, height: f32) -> Option<ViewTransform> {
        let raw = self.series.as_deref()?.bounds()?;
        ViewTransform::fit_data(
            raw,
            self.config.padding_frac,
            self.config.degenerate_span,
            width,
            height,
        )
    }

    /// Build the render list for a canvas of the given size.
    ///
    /// Order: background, axes, polyline, markers.
    pub fn build_frame(&self, width: f32, height: f32) -> RenderList {
        let mut render = RenderList::new();
        render.push(RenderCommand::Clear(self.theme.background));

        let Some(series) = self.series.as_deref().filter(|series| !series.is_empty()) else {
            tracing::debug!("no data to plot, drawing background only");
            return render;
        };
        let Some(transform) = self.transform(width, height) else {
            if ScreenRect::from_size(width, height).is_valid() {
                tracing::debug!(
                    points = series.len(),
                    "data range is not representable, drawing background only"
                );
            } else {
                tracing::debug!(width, height, "canvas has no area, drawing background only");
            }
            return render;
        };

        if self.show_axis {
            build_axes(&mut render, &transform, &self.theme, &self.config);
        }

        let device: Vec<ScreenPoint> = series
            .points()
            .iter()
            .map(|point| transform.to_device(*point))
            .collect();
        build_graph(&mut render, &device, &self.theme);

        if self.show_markers {
            build_markers(&mut render, series, &device, &self.theme, &self.config);
        }

        tracing::trace!(
            points = series.len(),
            commands = render.len(),
            scale = transform.scale(),
            "built plot frame"
        );
        render
    }
}

fn build_graph(render: &mut RenderList, device: &[ScreenPoint], theme: &Theme) {
    let mut segments = Vec::new();
    build_polyline_segments(device, &theme.line.dash, &mut segments);
    if segments.is_empty() {
        return;
    }
    render.push(RenderCommand::LineSegments {
        segments,
        color: theme.line.color,
        width: theme.line.width,
    });
}

fn build_markers(
    render: &mut RenderList,
    series: &Series,
    device: &[ScreenPoint],
    theme: &Theme,
    config: &PlotViewConfig,
) {
    for (point, center) in series.points().iter().zip(device) {
        let color = match MarkerClass::of(point.y) {
            MarkerClass::Low => theme.marker_low,
            MarkerClass::High => theme.marker_high,
        };
        render.push(RenderCommand::Polygon {
            points: marker_triangle(*center, config.marker_half_size).to_vec(),
            fill: Some(color),
            stroke: Some((color, theme.marker_stroke_width)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    fn scene(points: &[(f64, f64)]) -> Scene {
        Scene {
            series: Some(Arc::new(Series::new(points.iter().copied()).unwrap())),
            show_axis: true,
            show_markers: true,
            ..Scene::default()
        }
    }

    fn markers(render: &RenderList) -> Vec<Color> {
        render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Polygon {
                    fill: Some(color),
                    stroke: Some(_),
                    ..
                } => Some(*color),
                _ => None,
            })
            .collect()
    }

    fn labels(render: &RenderList) -> Vec<String> {
        render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn missing_or_empty_series_draws_background_only() {
        let theme = Theme::default();
        let absent = Scene::default().build_frame(200.0, 100.0);
        assert_eq!(absent.commands(), &[RenderCommand::Clear(theme.background)]);

        let empty = Scene {
            series: Some(Arc::new(Series::empty())),
            ..Scene::default()
        };
        assert_eq!(empty.build_frame(200.0, 100.0).len(), 1);
    }

    #[test]
    fn zero_area_canvas_draws_background_only() {
        let render = scene(&[(0.0, 1.0), (1.0, 2.0)]).build_frame(0.0, 0.0);
        assert_eq!(render.len(), 1);
    }

    #[test]
    fn draw_order_is_axes_graph_markers() {
        let render = scene(&[(-2.0, -1.0), (5.0, 3.0)]).build_frame(400.0, 300.0);
        let commands = render.commands();
        assert!(matches!(commands[0], RenderCommand::Clear(_)));
        let graph = commands
            .iter()
            .position(|command| {
                matches!(command, RenderCommand::LineSegments { width, .. } if *width == 4.0)
            })
            .expect("graph drawn");
        let last_label = commands
            .iter()
            .rposition(|command| matches!(command, RenderCommand::Text { .. }))
            .expect("labels drawn");
        assert!(last_label < graph);
        assert_eq!(commands.len() - graph - 1, 2);
    }

    #[test]
    fn axes_follow_zero_crossings() {
        let both = scene(&[(-2.0, -1.0), (5.0, 3.0)]).build_frame(400.0, 300.0);
        assert_eq!(labels(&both), vec!["y", "x"]);

        let no_y_axis = scene(&[(1.0, -1.0), (5.0, 3.0)]).build_frame(400.0, 300.0);
        assert_eq!(labels(&no_y_axis), vec!["x"]);

        let none = scene(&[(1.0, 1.0), (5.0, 3.0)]).build_frame(400.0, 300.0);
        assert!(labels(&none).is_empty());
    }

    #[test]
    fn hidden_axes_and_markers_are_skipped() {
        let mut scene = scene(&[(-2.0, -1.0), (5.0, 3.0)]);
        scene.show_axis = false;
        scene.show_markers = false;
        let render = scene.build_frame(400.0, 300.0);
        assert_eq!(render.len(), 2);
        assert!(labels(&render).is_empty());
        assert!(markers(&render).is_empty());
    }

    #[test]
    fn marker_colors_follow_digit_sum() {
        let theme = Theme::default();
        let render = scene(&[(0.0, -19.0), (1.0, 3.0), (2.0, 46.0)]).build_frame(400.0, 300.0);
        assert_eq!(
            markers(&render),
            vec![theme.marker_high, theme.marker_low, theme.marker_high]
        );
    }

    #[test]
    fn single_point_draws_markers_without_graph() {
        let mut scene = scene(&[(2.0, 2.0)]);
        scene.show_axis = false;
        let render = scene.build_frame(100.0, 100.0);
        assert_eq!(render.len(), 2);
        let RenderCommand::Polygon { points, .. } = &render.commands()[1] else {
            panic!("expected marker");
        };
        // Degenerate data is centered on the canvas.
        assert!((points[0].x - 50.0).abs() < 1e-3);
        assert!((points[0].y - 57.0).abs() < 1e-3);
    }

    #[test]
    fn constant_series_produces_finite_geometry() {
        let render = scene(&[(0.0, 4.0), (1.0, 4.0), (2.0, 4.0)]).build_frame(300.0, 200.0);
        for command in render.commands() {
            if let RenderCommand::LineSegments { segments, .. } = command {
                for segment in segments {
                    assert!(segment.start.x.is_finite() && segment.start.y.is_finite());
                    assert!(segment.end.x.is_finite() && segment.end.y.is_finite());
                }
            }
        }
    }

    #[test]
    fn sub_unit_ranges_pad_by_exact_fraction() {
        let scene = scene(&[(0.1, 1.0), (0.3, 1.1), (0.5, 1.2)]);
        let bounds = scene.transform(400.0, 400.0).unwrap().bounds();
        assert!((bounds.x.min - (0.1 - 0.1 * 0.4)).abs() < 1e-12);
        assert!((bounds.x.max - (0.5 + 0.1 * 0.4)).abs() < 1e-12);
        assert!((bounds.y.min - 0.98).abs() < 1e-12);
        assert!((bounds.y.max - 1.22).abs() < 1e-12);
    }

    #[test]
    fn sub_unit_range_away_from_zero_has_no_axis() {
        let render = scene(&[(0.1, 1.0), (0.5, 1.2)]).build_frame(400.0, 400.0);
        assert!(labels(&render).is_empty());
        assert!(!render.commands().iter().any(|command| {
            matches!(command, RenderCommand::LineSegments { width, .. } if *width == 2.0)
        }));

        let x_only = scene(&[(0.1, -0.2), (0.5, 0.3)]).build_frame(400.0, 400.0);
        assert_eq!(labels(&x_only), vec!["x"]);
    }

    #[test]
    fn overflowing_range_draws_background_only() {
        let render = scene(&[(-1e308, 0.0), (1e308, 1.0)]).build_frame(400.0, 300.0);
        assert_eq!(render.len(), 1);
    }
}
