use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::thread::ThreadId;

use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::FrameCallbackId;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;
type UiTask = Box<dyn FnOnce() + 'static>;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<FrameCallback>,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    needs_frame: Cell<bool>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<u64>,
    local_tasks: RefCell<VecDeque<UiTask>>,
    last_frame_nanos: Cell<Option<u64>>,
    ui_thread_id: ThreadId,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            needs_frame: Cell::new(false),
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            local_tasks: RefCell::new(VecDeque::new()),
            last_frame_nanos: Cell::new(None),
            ui_thread_id: std::thread::current().id(),
        }
    }

    fn schedule(&self) {
        self.needs_frame.set(true);
        self.scheduler.schedule_frame();
    }

    fn has_frame_callbacks(&self) -> bool {
        self.frame_callbacks
            .try_borrow()
            .map(|callbacks| !callbacks.is_empty())
            .unwrap_or(true)
    }

    fn has_pending_ui(&self) -> bool {
        self.local_tasks
            .try_borrow()
            .map(|tasks| !tasks.is_empty())
            .unwrap_or(true)
    }

    fn settle_needs_frame(&self) {
        if !self.has_frame_callbacks() && !self.has_pending_ui() {
            self.needs_frame.set(false);
        }
    }

    fn register_frame_callback(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        self.schedule();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        {
            let mut callbacks = self.frame_callbacks.borrow_mut();
            if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
                callbacks.remove(index);
            }
        }
        self.settle_needs_frame();
    }

    fn enqueue_ui_task(&self, task: UiTask) {
        self.local_tasks.borrow_mut().push_back(task);
        self.schedule();
    }

    fn drain_ui(&self) {
        loop {
            let task = {
                let mut local = self.local_tasks.borrow_mut();
                local.pop_front()
            };

            match task {
                Some(task) => task(),
                None => break,
            }
        }
        self.settle_needs_frame();
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        // Frame time never runs backwards, even if the host clock does.
        let frame_time_nanos = match self.last_frame_nanos.get() {
            Some(last) if frame_time_nanos < last => {
                log::trace!("clamping frame time {frame_time_nanos} to previous frame {last}");
                last
            }
            _ => frame_time_nanos,
        };
        self.last_frame_nanos.set(Some(frame_time_nanos));

        // Callbacks registered while draining run on the next frame.
        let pending: Vec<FrameCallback> = {
            let mut callbacks = self.frame_callbacks.borrow_mut();
            let mut pending = Vec::with_capacity(callbacks.len());
            while let Some(mut entry) = callbacks.pop_front() {
                if let Some(callback) = entry.callback.take() {
                    pending.push(callback);
                }
            }
            pending
        };
        for callback in pending {
            callback(frame_time_nanos);
        }
        self.settle_needs_frame();
    }
}

/// Owner of the cooperative UI execution context.
///
/// Everything that mutates deck state (gesture samples, animation frames
/// and completion continuations) runs on the thread that created the
/// runtime. The host drives it by calling [`Runtime::run_frame`] whenever
/// [`Runtime::needs_frame`] reports pending work.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
            ui_thread_id: self.inner.ui_thread_id,
        }
    }

    pub fn needs_frame(&self) -> bool {
        self.inner.needs_frame.get()
    }

    /// Runs one frame: every frame callback registered before this call,
    /// followed by the UI tasks those callbacks (or earlier events) queued.
    pub fn run_frame(&self, frame_time_nanos: u64) {
        self.inner.drain_frame_callbacks(frame_time_nanos);
        self.inner.drain_ui();
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Arc::new(DefaultScheduler))
    }
}

#[derive(Default)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Weak, cloneable access to a [`Runtime`].
///
/// Every operation is a no-op once the runtime has been dropped.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
    ui_thread_id: ThreadId,
}

impl RuntimeHandle {
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn schedule(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.schedule();
        }
    }

    /// Queues a task to run on the UI thread after the current frame's
    /// callbacks. Tasks run in FIFO order.
    pub fn enqueue_ui_task(&self, task: Box<dyn FnOnce() + 'static>) {
        self.assert_ui_thread();
        if let Some(inner) = self.inner.upgrade() {
            inner.enqueue_ui_task(task);
        } else {
            log::debug!("dropping UI task: runtime is gone");
        }
    }

    pub fn drain_ui(&self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_ui();
        }
    }

    pub fn has_pending_ui(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_pending_ui())
            .unwrap_or(false)
    }

    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    pub fn needs_frame(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.needs_frame.get())
            .unwrap_or(false)
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn assert_ui_thread(&self) {
        debug_assert_eq!(
            std::thread::current().id(),
            self.ui_thread_id,
            "deck state mutated off the runtime's UI thread"
        );
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
