//! GPUI integration for gpui_fnplot.
//!
//! [`GpuiPlotView`] wraps a [`PlotView`](crate::plot::PlotView) in a GPUI
//! view and paints each frame through [`GpuiSurface`].

mod paint;
mod view;

pub use paint::GpuiSurface;
pub use view::GpuiPlotView;
