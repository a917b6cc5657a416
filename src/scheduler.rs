//! Frame scheduling abstraction
//!
//! The host platform's frame primitive is a one-shot callback registration
//! (`requestAnimationFrame` in the browser). Hiding it behind a small trait
//! keeps the run loop testable: tests drive ticks synchronously through
//! [`ManualScheduler`] instead of a real display.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback invoked with a timestamp in milliseconds
pub type TickCallback = Box<dyn FnOnce(f64)>;

/// Cancellable handle for one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(pub i32);

/// One-shot frame scheduler
///
/// Each request covers a single frame; a continuous loop re-requests from
/// inside its own callback.
pub trait FrameScheduler {
    fn request_tick(&self, callback: TickCallback) -> TickHandle;
    fn cancel_tick(&self, handle: TickHandle);
}

/// Synchronous scheduler for tests and headless runs
///
/// Pending callbacks sit in a queue until [`ManualScheduler::fire`] is
/// called with an explicit timestamp. Clones share the same queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<ManualInner>,
}

#[derive(Default)]
struct ManualInner {
    pending: RefCell<Vec<(i32, TickCallback)>>,
    next_id: Cell<i32>,
    requested: Cell<u64>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every currently pending callback at the given timestamp
    ///
    /// Callbacks re-requesting a tick land in the next batch, not this one.
    pub fn fire(&self, time_ms: f64) {
        let batch: Vec<_> = self.inner.pending.borrow_mut().drain(..).collect();
        for (_, callback) in batch {
            callback(time_ms);
        }
    }

    /// Number of callbacks waiting for the next frame
    pub fn pending_count(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    /// Total requests ever made (for spying on scheduling behavior)
    pub fn total_requested(&self) -> u64 {
        self.inner.requested.get()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_tick(&self, callback: TickCallback) -> TickHandle {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.wrapping_add(1));
        self.inner.requested.set(self.inner.requested.get() + 1);
        self.inner.pending.borrow_mut().push((id, callback));
        TickHandle(id)
    }

    fn cancel_tick(&self, handle: TickHandle) {
        self.inner.pending.borrow_mut().retain(|(id, _)| *id != handle.0);
    }
}

/// `requestAnimationFrame`-backed scheduler (wasm only)
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct RafScheduler;

#[cfg(target_arch = "wasm32")]
impl RafScheduler {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
impl FrameScheduler for RafScheduler {
    fn request_tick(&self, callback: TickCallback) -> TickHandle {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let closure = Closure::once(move |time: f64| callback(time));
        let id = web_sys::window()
            .and_then(|w| {
                w.request_animation_frame(closure.as_ref().unchecked_ref())
                    .ok()
            })
            .unwrap_or(0);
        closure.forget();
        TickHandle(id)
    }

    fn cancel_tick(&self, handle: TickHandle) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle.0);
        }
    }
}
