//! Update-then-render frame loop
//!
//! Single-threaded and cooperative: each scheduled tick runs the physics
//! update to completion, renders the fully-integrated state, and only then
//! requests the next frame, so the loop is never re-entered. Stopping the
//! loop cancels the outstanding frame handle.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::scheduler::{FrameScheduler, TickHandle};
use crate::simulator::HexagonBallSimulator;

/// Callback rendering one frame; must not mutate simulation state
pub type RenderFn = Box<dyn FnMut(&HexagonBallSimulator)>;

/// A running simulation tied to a frame scheduler
pub struct SimLoop<S: FrameScheduler + 'static> {
    inner: Rc<LoopInner<S>>,
}

struct LoopInner<S> {
    scheduler: S,
    simulator: RefCell<HexagonBallSimulator>,
    render: RefCell<RenderFn>,
    handle: Cell<Option<TickHandle>>,
    running: Cell<bool>,
}

impl<S: FrameScheduler + 'static> SimLoop<S> {
    pub fn new(scheduler: S, simulator: HexagonBallSimulator, render: RenderFn) -> Self {
        Self {
            inner: Rc::new(LoopInner {
                scheduler,
                simulator: RefCell::new(simulator),
                render: RefCell::new(render),
                handle: Cell::new(None),
                running: Cell::new(false),
            }),
        }
    }

    /// Begin scheduling frames; idempotent
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);
        Self::schedule_next(&self.inner);
    }

    /// Stop the loop and cancel the pending frame
    ///
    /// After this returns no further frames are requested, even if a
    /// callback was already in flight.
    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(handle) = self.inner.handle.take() {
            self.inner.scheduler.cancel_tick(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Borrow the simulator (for live control or state read-back)
    pub fn with_simulator<R>(&self, f: impl FnOnce(&mut HexagonBallSimulator) -> R) -> R {
        f(&mut self.inner.simulator.borrow_mut())
    }

    /// Weak handle for listeners that must not keep the loop alive
    pub fn handle(&self) -> LoopHandle<S> {
        LoopHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn schedule_next(inner: &Rc<LoopInner<S>>) {
        let weak = Rc::downgrade(inner);
        let handle = inner.scheduler.request_tick(Box::new(move |time_ms| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.running.get() {
                return;
            }
            inner.handle.set(None);
            {
                // Physics strictly precedes rendering within a tick
                let mut simulator = inner.simulator.borrow_mut();
                simulator.advance(time_ms);
                (inner.render.borrow_mut())(&simulator);
            }
            Self::schedule_next(&inner);
        }));
        inner.handle.set(Some(handle));
    }
}

impl<S: FrameScheduler + 'static> Drop for SimLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Weak reference into a running loop
///
/// Event listeners hold one of these so a disposed loop can actually be
/// dropped; calls after the loop is gone are silent no-ops.
pub struct LoopHandle<S: FrameScheduler + 'static> {
    inner: Weak<LoopInner<S>>,
}

impl<S: FrameScheduler + 'static> LoopHandle<S> {
    pub fn with_simulator<R>(&self, f: impl FnOnce(&mut HexagonBallSimulator) -> R) -> Option<R> {
        self.inner
            .upgrade()
            .map(|inner| f(&mut inner.simulator.borrow_mut()))
    }
}
