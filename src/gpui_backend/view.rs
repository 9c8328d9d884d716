use gpui::prelude::*;
use gpui::{Window, canvas, div};

use crate::config::PlotViewConfig;
use crate::plot::PlotView;
use crate::series::Series;
use crate::style::Theme;

use super::paint::{GpuiSurface, to_hsla};

/// A GPUI view that renders a [`PlotView`].
///
/// Setters mirror those of [`PlotView`] and schedule a repaint; resizing the
/// window repaints with a freshly fitted transform.
pub struct GpuiPlotView {
    plot: PlotView,
}

impl GpuiPlotView {
    /// Create a view with an empty plot and the default configuration.
    pub fn new() -> Self {
        Self::from_plot(PlotView::new())
    }

    /// Create a view with a custom configuration.
    pub fn with_config(config: PlotViewConfig) -> Self {
        Self::from_plot(PlotView::with_config(config))
    }

    /// Wrap an existing plot.
    pub fn from_plot(mut plot: PlotView) -> Self {
        plot.subscribe(|request| tracing::debug!(?request, "plot redraw requested"));
        Self { plot }
    }

    /// Access the underlying plot.
    pub fn plot(&self) -> &PlotView {
        &self.plot
    }

    /// Mutate the underlying plot and repaint.
    pub fn update_plot<R>(
        &mut self,
        cx: &mut Context<Self>,
        f: impl FnOnce(&mut PlotView) -> R,
    ) -> R {
        let result = f(&mut self.plot);
        cx.notify();
        result
    }

    /// Replace the series and repaint.
    pub fn set_series(&mut self, series: Series, cx: &mut Context<Self>) {
        self.update_plot(cx, |plot| plot.set_series(series));
    }

    /// Toggle axis drawing and repaint.
    pub fn set_show_axis(&mut self, show_axis: bool, cx: &mut Context<Self>) {
        self.update_plot(cx, |plot| plot.set_show_axis(show_axis));
    }

    /// Toggle marker drawing and repaint.
    pub fn set_show_markers(&mut self, show_markers: bool, cx: &mut Context<Self>) {
        self.update_plot(cx, |plot| plot.set_show_markers(show_markers));
    }

    /// Replace the theme and repaint.
    pub fn set_theme(&mut self, theme: Theme, cx: &mut Context<Self>) {
        self.update_plot(cx, |plot| plot.set_theme(theme));
    }
}

impl Default for GpuiPlotView {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for GpuiPlotView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let scene = self.plot.scene();
        self.plot.mark_rendered();
        let background = to_hsla(scene.theme.background);

        div().size_full().bg(background).child(
            canvas(
                move |bounds, _, _| {
                    scene.build_frame(f32::from(bounds.size.width), f32::from(bounds.size.height))
                },
                move |bounds, frame, window, cx| {
                    let mut surface = GpuiSurface::new(window, cx, bounds);
                    frame.replay(&mut surface);
                },
            )
            .size_full(),
        )
    }
}
