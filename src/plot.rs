//! The plot view: display state, redraw notifications, and rendering.

use std::fmt;
use std::sync::Arc;

use crate::config::PlotViewConfig;
use crate::frame::Scene;
use crate::geom::Point;
use crate::render::Surface;
use crate::series::{Series, SeriesError};
use crate::style::Theme;

/// Why a redraw was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawRequest {
    /// The series was replaced or cleared.
    Series,
    /// Axis visibility was set.
    ShowAxis(bool),
    /// Marker visibility was set.
    ShowMarkers(bool),
    /// Theme or layout configuration changed.
    Style,
}

/// Identifier returned by [`PlotView::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(RedrawRequest)>;

/// A function plot with optional axes and point markers.
///
/// Every setter marks the view dirty and notifies subscribers; the host then
/// calls [`PlotView::render`] with the current canvas size.
pub struct PlotView {
    series: Option<Arc<Series>>,
    show_axis: bool,
    show_markers: bool,
    theme: Theme,
    config: PlotViewConfig,
    dirty: bool,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl PlotView {
    /// Create an empty view with axes and markers shown.
    pub fn new() -> Self {
        Self::with_config(PlotViewConfig::default())
    }

    /// Create an empty view with a custom configuration.
    pub fn with_config(config: PlotViewConfig) -> Self {
        Self {
            series: None,
            show_axis: true,
            show_markers: true,
            theme: Theme::default(),
            config,
            dirty: true,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Access the current series.
    pub fn series(&self) -> Option<&Series> {
        self.series.as_deref()
    }

    /// Replace the series.
    pub fn set_series(&mut self, series: Series) {
        tracing::debug!(points = series.len(), "series replaced");
        self.series = Some(Arc::new(series));
        self.request_redraw(RedrawRequest::Series);
    }

    /// Validate `points` as an X-sorted series and show it.
    ///
    /// On error the current series is kept.
    pub fn try_set_points<I, P>(&mut self, points: I) -> Result<(), SeriesError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        match Series::new(points) {
            Ok(series) => {
                self.set_series(series);
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, "rejected series");
                Err(error)
            }
        }
    }

    /// Remove the series; subsequent renders draw only the background.
    pub fn clear_series(&mut self) {
        tracing::debug!("series cleared");
        self.series = None;
        self.request_redraw(RedrawRequest::Series);
    }

    /// Check whether axes are drawn.
    pub fn show_axis(&self) -> bool {
        self.show_axis
    }

    /// Toggle axis drawing.
    pub fn set_show_axis(&mut self, show_axis: bool) {
        self.show_axis = show_axis;
        self.request_redraw(RedrawRequest::ShowAxis(show_axis));
    }

    /// Check whether markers are drawn.
    pub fn show_markers(&self) -> bool {
        self.show_markers
    }

    /// Toggle marker drawing.
    pub fn set_show_markers(&mut self, show_markers: bool) {
        self.show_markers = show_markers;
        self.request_redraw(RedrawRequest::ShowMarkers(show_markers));
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.request_redraw(RedrawRequest::Style);
    }

    /// Access the layout configuration.
    pub fn config(&self) -> &PlotViewConfig {
        &self.config
    }

    /// Replace the layout configuration.
    pub fn set_config(&mut self, config: PlotViewConfig) {
        self.config = config;
        self.request_redraw(RedrawRequest::Style);
    }

    /// Check whether state changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Register a callback invoked on every redraw request.
    pub fn subscribe(&mut self, listener: impl FnMut(RedrawRequest) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::debug!(listener = id.0, "redraw listener added");
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }

    /// Snapshot the state needed to draw a frame.
    pub fn scene(&self) -> Scene {
        Scene {
            series: self.series.clone(),
            show_axis: self.show_axis,
            show_markers: self.show_markers,
            theme: self.theme.clone(),
            config: self.config.clone(),
        }
    }

    /// Draw the plot onto `surface`, sized `width` x `height` pixels.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, width: f32, height: f32) {
        self.scene().build_frame(width, height).replay(surface);
        self.mark_rendered();
    }

    /// Record that the current state has been handed to a renderer.
    pub fn mark_rendered(&mut self) {
        self.dirty = false;
    }

    fn request_redraw(&mut self, request: RedrawRequest) {
        self.dirty = true;
        for (_, listener) in &mut self.listeners {
            listener(request);
        }
    }
}

impl Default for PlotView {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlotView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotView")
            .field("series", &self.series)
            .field("show_axis", &self.show_axis)
            .field("show_markers", &self.show_markers)
            .field("dirty", &self.dirty)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
