//! Per-frame callback loop that stops cleanly when dropped.
//!
//! Scheduled callbacks only hold a weak reference to the loop, so dropping
//! the [`FrameLoop`] cancels the pending frame and frees whatever the frame
//! closure captured.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::rig::error::RigError;

pub trait FrameScheduler {
    type Handle: Copy;

    /// Run `callback` once on the next frame.
    fn request(&self, callback: Rc<dyn Fn(f64)>) -> Result<Self::Handle, RigError>;

    fn cancel(&self, handle: Self::Handle);
}

struct Inner<S: FrameScheduler> {
    scheduler: S,
    running: Cell<bool>,
    pending: Cell<Option<S::Handle>>,
    on_frame: RefCell<Box<dyn FnMut(f64)>>,
}

pub struct FrameLoop<S: FrameScheduler + 'static> {
    inner: Rc<Inner<S>>,
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    pub fn new(scheduler: S, on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                scheduler,
                running: Cell::new(false),
                pending: Cell::new(None),
                on_frame: RefCell::new(Box::new(on_frame)),
            }),
        }
    }

    pub fn start(&self) -> Result<(), RigError> {
        if self.inner.running.replace(true) {
            return Ok(());
        }
        schedule(&self.inner).map_err(|err| {
            self.inner.running.set(false);
            err
        })
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(handle) = self.inner.pending.take() {
            self.inner.scheduler.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<S: FrameScheduler + 'static>(inner: &Rc<Inner<S>>) -> Result<(), RigError> {
    let weak: Weak<Inner<S>> = Rc::downgrade(inner);
    let callback: Rc<dyn Fn(f64)> = Rc::new(move |timestamp| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        inner.pending.set(None);
        if !inner.running.get() {
            return;
        }
        {
            let mut on_frame = inner.on_frame.borrow_mut();
            (*on_frame)(timestamp);
        }
        if let Err(err) = schedule(&inner) {
            warn!("Frame loop stopped: {}", err);
            inner.running.set(false);
        }
    });
    let handle = inner.scheduler.request(callback)?;
    inner.pending.set(Some(handle));
    Ok(())
}

/// `requestAnimationFrame` backed scheduler. One JS closure is reused for
/// every frame; the Rust callback for the next frame sits in `next`.
pub struct RafScheduler {
    window: Window,
    next: Rc<RefCell<Option<Rc<dyn Fn(f64)>>>>,
    closure: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new() -> Result<Self, RigError> {
        let window = web_sys::window().ok_or(RigError::NoWindow)?;
        let next: Rc<RefCell<Option<Rc<dyn Fn(f64)>>>> = Rc::new(RefCell::new(None));
        let slot = next.clone();
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            let callback = slot.borrow_mut().take();
            if let Some(callback) = callback {
                callback(timestamp);
            }
        }) as Box<dyn FnMut(f64)>);
        Ok(Self { window, next, closure })
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&self, callback: Rc<dyn Fn(f64)>) -> Result<i32, RigError> {
        *self.next.borrow_mut() = Some(callback);
        Ok(self
            .window
            .request_animation_frame(self.closure.as_ref().unchecked_ref())?)
    }

    fn cancel(&self, handle: i32) {
        self.next.borrow_mut().take();
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            warn!("cancelAnimationFrame failed: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Queue = Rc<RefCell<Vec<(u32, Rc<dyn Fn(f64)>)>>>;

    #[derive(Clone, Default)]
    struct ManualScheduler {
        queue: Queue,
        next_id: Rc<Cell<u32>>,
    }

    impl ManualScheduler {
        fn fire(&self, timestamp: f64) {
            let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for (_, callback) in due {
                callback(timestamp);
            }
        }

        fn pending_count(&self) -> usize {
            self.queue.borrow().len()
        }
    }

    impl FrameScheduler for ManualScheduler {
        type Handle = u32;

        fn request(&self, callback: Rc<dyn Fn(f64)>) -> Result<u32, RigError> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            Ok(id)
        }

        fn cancel(&self, handle: u32) {
            self.queue.borrow_mut().retain(|(id, _)| *id != handle);
        }
    }

    struct Unavailable;

    impl FrameScheduler for Unavailable {
        type Handle = ();

        fn request(&self, _: Rc<dyn Fn(f64)>) -> Result<(), RigError> {
            Err(RigError::NoWindow)
        }

        fn cancel(&self, _: ()) {}
    }

    fn counting_loop(scheduler: &ManualScheduler) -> (FrameLoop<ManualScheduler>, Rc<Cell<u32>>) {
        let frames = Rc::new(Cell::new(0));
        let counter = frames.clone();
        let frame_loop = FrameLoop::new(scheduler.clone(), move |_| counter.set(counter.get() + 1));
        (frame_loop, frames)
    }

    #[test]
    fn runs_once_per_fired_frame() {
        let scheduler = ManualScheduler::default();
        let (frame_loop, frames) = counting_loop(&scheduler);
        frame_loop.start().unwrap();
        for i in 0..3 {
            scheduler.fire(i as f64 * 16.0);
        }
        assert_eq!(frames.get(), 3);
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn passes_timestamp_through() {
        let scheduler = ManualScheduler::default();
        let seen = Rc::new(Cell::new(0.0));
        let sink = seen.clone();
        let frame_loop = FrameLoop::new(scheduler.clone(), move |ts| sink.set(ts));
        frame_loop.start().unwrap();
        scheduler.fire(42.5);
        assert_eq!(seen.get(), 42.5);
    }

    #[test]
    fn starting_twice_keeps_a_single_pending_frame() {
        let scheduler = ManualScheduler::default();
        let (frame_loop, _) = counting_loop(&scheduler);
        frame_loop.start().unwrap();
        frame_loop.start().unwrap();
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn stop_cancels_pending_frame_and_restart_resumes() {
        let scheduler = ManualScheduler::default();
        let (frame_loop, frames) = counting_loop(&scheduler);
        frame_loop.start().unwrap();
        scheduler.fire(0.0);
        frame_loop.stop();
        assert_eq!(scheduler.pending_count(), 0);
        scheduler.fire(16.0);
        assert_eq!(frames.get(), 1);

        frame_loop.start().unwrap();
        scheduler.fire(32.0);
        assert_eq!(frames.get(), 2);
    }

    #[test]
    fn dropping_the_loop_releases_everything() {
        let scheduler = ManualScheduler::default();
        let state = Rc::new(Cell::new(0u32));
        let captured = state.clone();
        let frame_loop = FrameLoop::new(scheduler.clone(), move |_| captured.set(captured.get() + 1));
        frame_loop.start().unwrap();
        scheduler.fire(0.0);
        scheduler.fire(16.0);
        assert_eq!(state.get(), 2);
        assert_eq!(Rc::strong_count(&state), 2);

        drop(frame_loop);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(Rc::strong_count(&state), 1);
        scheduler.fire(32.0);
        assert_eq!(state.get(), 2);
    }

    #[test]
    fn stale_callback_is_a_no_op_after_drop() {
        let scheduler = ManualScheduler::default();
        let (frame_loop, frames) = counting_loop(&scheduler);
        frame_loop.start().unwrap();
        let stale = scheduler.queue.borrow()[0].1.clone();
        drop(frame_loop);
        stale(0.0);
        assert_eq!(frames.get(), 0);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn failed_request_leaves_loop_stopped() {
        let frame_loop = FrameLoop::new(Unavailable, |_| {});
        assert!(matches!(frame_loop.start(), Err(RigError::NoWindow)));
        assert!(!frame_loop.is_running());
    }
}
