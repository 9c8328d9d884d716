//! gpui_fnplot renders a single function plot (a polyline of samples) with
//! optional coordinate axes and digit-sum colored point markers.
//!
//! The core is backend-agnostic: [`PlotView`] builds a [`RenderList`] for the
//! current canvas size and replays it onto any [`Surface`]. Enable the `gpui`
//! feature for a ready-made GPUI view.

#![forbid(unsafe_code)]

pub mod axis;
pub mod config;
pub mod frame;
pub mod geom;
pub mod marker;
pub mod plot;
pub mod render;
pub mod series;
pub mod style;
pub mod transform;
pub mod view;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use axis::AxisGeometry;
pub use config::PlotViewConfig;
pub use frame::Scene;
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use marker::{MarkerClass, digit_sum};
pub use plot::{ListenerId, PlotView, RedrawRequest};
pub use render::{
    Color, LineSegment, LineStyle, RenderCommand, RenderList, Surface, TextStyle,
    build_polyline_segments,
};
pub use series::{Series, SeriesError};
pub use style::Theme;
pub use transform::ViewTransform;
pub use view::{DataBounds, Range};

#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiPlotView, GpuiSurface};
