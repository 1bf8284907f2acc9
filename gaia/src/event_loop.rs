use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

/// Cooperative queue of deferred tasks.
///
/// The host application calls [`EventLoop::run_pending`] once per turn of its own event loop. Tasks posted while a
/// turn is running, including the ones posted by tasks, run in the next turn. Clones share the same queue.
#[derive(Clone, Default)]
pub struct EventLoop {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl EventLoop {
    /// Creates an empty loop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a task for the next turn.
    pub fn post(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    /// Number of tasks waiting for the next turn.
    pub fn pending_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Runs the tasks that were posted before this call. Returns the number of executed tasks.
    pub fn run_pending(&self) -> usize {
        let tasks = std::mem::take(&mut *self.tasks.borrow_mut());
        let count = tasks.len();
        for task in tasks {
            task();
        }

        if count > 0 {
            log::trace!("Executed {count} deferred tasks");
        }

        count
    }
}

impl Debug for EventLoop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLoop")
            .field("pending", &self.pending_count())
            .finish()
    }
}
