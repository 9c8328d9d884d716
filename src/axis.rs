//! Coordinate axes: lines, arrowheads, and labels.
//!
//! An axis is only drawn when the padded data range of the *other* axis
//! includes zero, so the axis line always lies inside the plotted bounds.

use crate::config::PlotViewConfig;
use crate::geom::{Point, ScreenPoint};
use crate::render::{LineSegment, RenderCommand, RenderList};
use crate::style::Theme;
use crate::transform::ViewTransform;

/// Device-space geometry of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGeometry {
    /// Axis line, ending at the arrow tip.
    pub line: LineSegment,
    /// Filled arrowhead triangle, tip first.
    pub arrow: [ScreenPoint; 3],
    /// Label baseline origin.
    pub label_origin: ScreenPoint,
    /// Label text.
    pub label: &'static str,
}

/// Geometry for the vertical axis at `x = 0`, if it is visible.
pub fn y_axis(transform: &ViewTransform, config: &PlotViewConfig) -> Option<AxisGeometry> {
    let bounds = transform.bounds();
    if !bounds.x.straddles_zero() {
        return None;
    }
    let top = transform.to_device(Point::new(0.0, bounds.y.max));
    let bottom = transform.to_device(Point::new(0.0, bounds.y.min));
    let arrow = config.arrow_size;
    let (dx, dy) = config.y_label_offset;
    Some(AxisGeometry {
        line: LineSegment::new(top, bottom),
        arrow: [top, top.offset(-arrow, arrow), top.offset(arrow, arrow)],
        label_origin: top.offset(dx, dy),
        label: "y",
    })
}

/// Geometry for the horizontal axis at `y = 0`, if it is visible.
pub fn x_axis(transform: &ViewTransform, config: &PlotViewConfig) -> Option<AxisGeometry> {
    let bounds = transform.bounds();
    if !bounds.y.straddles_zero() {
        return None;
    }
    let left = transform.to_device(Point::new(bounds.x.min, 0.0));
    let right = transform.to_device(Point::new(bounds.x.max, 0.0));
    let arrow = config.arrow_size;
    let (dx, dy) = config.x_label_offset;
    Some(AxisGeometry {
        line: LineSegment::new(left, right),
        arrow: [right, right.offset(-arrow, -arrow), right.offset(-arrow, arrow)],
        label_origin: right.offset(dx, dy),
        label: "x",
    })
}

/// Append the visible axes to the render list.
///
/// Lines and arrowheads of both axes are emitted before either label.
pub(crate) fn build_axes(
    render: &mut RenderList,
    transform: &ViewTransform,
    theme: &Theme,
    config: &PlotViewConfig,
) {
    let axes: Vec<AxisGeometry> = [y_axis(transform, config), x_axis(transform, config)]
        .into_iter()
        .flatten()
        .collect();

    for axis in &axes {
        render.push(RenderCommand::LineSegments {
            segments: vec![axis.line],
            color: theme.axis.color,
            width: theme.axis.width,
        });
        render.push(RenderCommand::Polygon {
            points: axis.arrow.to_vec(),
            fill: Some(theme.axis.color),
            stroke: None,
        });
    }
    for axis in &axes {
        render.push(RenderCommand::Text {
            position: axis.label_origin,
            text: axis.label.to_string(),
            style: theme.axis_label.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{DataBounds, Range};

    fn transform(x: (f64, f64), y: (f64, f64)) -> ViewTransform {
        let bounds = DataBounds::new(Range::new(x.0, x.1), Range::new(y.0, y.1));
        ViewTransform::fit(bounds, 400.0, 400.0).expect("valid transform")
    }

    #[test]
    fn y_axis_only_when_x_range_straddles_zero() {
        let config = PlotViewConfig::default();
        assert!(y_axis(&transform((-2.0, 5.0), (1.0, 3.0)), &config).is_some());
        assert!(y_axis(&transform((1.0, 5.0), (1.0, 3.0)), &config).is_none());
    }

    #[test]
    fn x_axis_only_when_y_range_straddles_zero() {
        let config = PlotViewConfig::default();
        assert!(x_axis(&transform((1.0, 5.0), (-1.0, 3.0)), &config).is_some());
        assert!(x_axis(&transform((1.0, 5.0), (0.5, 3.0)), &config).is_none());
    }

    #[test]
    fn y_axis_spans_full_height_with_arrow_on_top() {
        let config = PlotViewConfig::default();
        // 10x10 data units over 400x400 px: scale 40, no centering offset.
        let axis = y_axis(&transform((-5.0, 5.0), (-5.0, 5.0)), &config).unwrap();
        assert_eq!(axis.line.start, ScreenPoint::new(200.0, 0.0));
        assert_eq!(axis.line.end, ScreenPoint::new(200.0, 400.0));
        assert_eq!(
            axis.arrow,
            [
                ScreenPoint::new(200.0, 0.0),
                ScreenPoint::new(190.0, 10.0),
                ScreenPoint::new(210.0, 10.0),
            ]
        );
        assert_eq!(axis.label_origin, ScreenPoint::new(210.0, 30.0));
        assert_eq!(axis.label, "y");
    }

    #[test]
    fn x_axis_arrow_and_label_at_right_end() {
        let config = PlotViewConfig::default();
        let axis = x_axis(&transform((-5.0, 5.0), (-5.0, 5.0)), &config).unwrap();
        assert_eq!(axis.line.start, ScreenPoint::new(0.0, 200.0));
        assert_eq!(axis.line.end, ScreenPoint::new(400.0, 200.0));
        assert_eq!(
            axis.arrow,
            [
                ScreenPoint::new(400.0, 200.0),
                ScreenPoint::new(390.0, 190.0),
                ScreenPoint::new(390.0, 210.0),
            ]
        );
        assert_eq!(axis.label_origin, ScreenPoint::new(380.0, 230.0));
    }

    #[test]
    fn build_axes_emits_labels_last() {
        let mut render = RenderList::new();
        build_axes(
            &mut render,
            &transform((-5.0, 5.0), (-5.0, 5.0)),
            &Theme::default(),
            &PlotViewConfig::default(),
        );
        let kinds: Vec<&str> = render
            .commands()
            .iter()
            .map(|command| match command {
                RenderCommand::LineSegments { .. } => "line",
                RenderCommand::Polygon { .. } => "arrow",
                RenderCommand::Text { .. } => "label",
                RenderCommand::Clear(_) => "clear",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["line", "arrow", "line", "arrow", "label", "label"]
        );
    }
}
