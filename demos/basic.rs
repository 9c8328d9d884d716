use std::time::Duration;

use gpui::{
    AppContext, Application, AsyncWindowContext, Bounds, Timer, WindowBounds, WindowOptions, px,
    size,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gpui_fnplot::{GpuiPlotView, Range, Series};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(480.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |window, cx| {
            let series = Series::from_fn(|x| 12.0 * (x * 0.8).sin() + x, Range::new(-6.0, 14.0), 40);

            let view = cx.new(|cx| {
                let mut view = GpuiPlotView::new();
                view.set_series(series, cx);
                view
            });

            let view_for_task = view.clone();
            window
                .spawn(cx, move |cx: &mut AsyncWindowContext| {
                    let mut cx = cx.clone();
                    async move {
                        let mut show_markers = true;
                        loop {
                            Timer::after(Duration::from_secs(2)).await;
                            show_markers = !show_markers;
                            let updated = cx.update(|_, cx| {
                                view_for_task.update(cx, |view, view_cx| {
                                    view.set_show_markers(show_markers, view_cx);
                                });
                            });
                            if updated.is_err() {
                                break;
                            }
                        }
                    }
                })
                .detach();

            view
        })
        .unwrap();
    });
}
