//! Scroll position normalised to [0, 1], shared with the frame loop.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::rig::error::RigError;

/// Page measurements sampled on scroll and resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Metrics {
    pub fn progress(&self) -> f32 {
        progress_for(self.scroll_y, self.document_height, self.viewport_height)
    }
}

/// `scroll_y / (document_height - viewport_height)`, clamped.
/// Zero when the page cannot scroll.
pub fn progress_for(scroll_y: f64, document_height: f64, viewport_height: f64) -> f32 {
    let range = document_height - viewport_height;
    if !(range > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0) as f32
}

/// Latest sampled state. Writers overwrite, readers see the newest value.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    progress: Rc<Cell<f32>>,
    viewport: Rc<Cell<(f64, f64)>>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, metrics: Metrics) -> f32 {
        let progress = metrics.progress();
        self.progress.set(progress);
        self.viewport
            .set((metrics.viewport_width, metrics.viewport_height));
        progress
    }

    pub fn subscribe(&self) -> ProgressReader {
        ProgressReader {
            progress: self.progress.clone(),
            viewport: self.viewport.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProgressReader {
    progress: Rc<Cell<f32>>,
    viewport: Rc<Cell<(f64, f64)>>,
}

impl ProgressReader {
    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.viewport.get()
    }
}

fn sample(window: &Window) -> Option<Metrics> {
    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    Some(Metrics {
        scroll_y: window.scroll_y().ok()?,
        document_height,
        viewport_width: window.inner_width().ok()?.as_f64()?,
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

/// Keeps the `scroll` and `resize` listeners registered while alive.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(tracker: ScrollTracker) -> Result<Self, RigError> {
        let window = web_sys::window().ok_or(RigError::NoWindow)?;

        // Initial sample so the first frame sees the real position.
        if let Some(metrics) = sample(&window) {
            tracker.record(metrics);
        }

        let callback = {
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                if let Some(metrics) = sample(&window) {
                    tracker.record(metrics);
                }
            }) as Box<dyn FnMut()>)
        };

        for event in ["scroll", "resize"] {
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        }

        Ok(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        for event in ["scroll", "resize"] {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_scroll_over_range() {
        assert_eq!(progress_for(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_for(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(progress_for(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn progress_is_clamped() {
        // overscroll on touch devices
        assert_eq!(progress_for(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_for(2100.0, 3000.0, 1000.0), 1.0);
        assert_eq!(progress_for(f64::NAN, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_page_has_zero_progress() {
        assert_eq!(progress_for(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(progress_for(50.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn subscribers_see_the_last_write() {
        let tracker = ScrollTracker::new();
        let reader = tracker.subscribe();
        assert_eq!(reader.progress(), 0.0);

        for y in [100.0, 900.0, 300.0] {
            tracker.record(Metrics {
                scroll_y: y,
                document_height: 2200.0,
                viewport_width: 1280.0,
                viewport_height: 1000.0,
            });
        }
        assert_eq!(reader.progress(), 0.25);
        assert_eq!(reader.viewport(), (1280.0, 1000.0));

        tracker.record(Metrics {
            scroll_y: 0.0,
            document_height: 500.0,
            viewport_width: 640.0,
            viewport_height: 900.0,
        });
        assert_eq!(reader.progress(), 0.0);
        assert_eq!(reader.viewport(), (640.0, 900.0));
    }
}
