use std::fmt::{Debug, Formatter};

/// Result of a camera move request, given to its [`Completion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The camera reached the requested position.
    Completed,
    /// Another move was dispatched before this one settled.
    Superseded,
    /// The camera already was at the requested position, nothing was done.
    NoOp,
}

impl MoveOutcome {
    /// Returns true only if the camera actually moved for the request.
    pub fn did_change(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// One-shot notification of a move request outcome.
///
/// Completing consumes the handle, so a request can be reported at most once.
///
/// The callback runs inside the scheduler call that settled the request. To chain another move, post it to an
/// [`EventLoop`](crate::EventLoop) and request it from there.
pub struct Completion(Box<dyn FnOnce(MoveOutcome)>);

impl Completion {
    /// Wraps the callback.
    pub fn new(callback: impl FnOnce(MoveOutcome) + 'static) -> Self {
        Self(Box::new(callback))
    }

    /// Reports the outcome.
    pub fn complete(self, outcome: MoveOutcome) {
        (self.0)(outcome)
    }
}

impl<F: FnOnce(MoveOutcome) + 'static> From<F> for Completion {
    fn from(callback: F) -> Self {
        Self::new(callback)
    }
}

impl Debug for Completion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Completion")
    }
}
