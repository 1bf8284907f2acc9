/// Identifies an observer registered with [`Observable::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer<T> = Box<dyn FnMut(&T, &T)>;

/// A change notification channel.
///
/// Observers are called with the new value and the previous value, in registration order. They run while the
/// scheduler that owns the channel is borrowed, so a follow-up camera move must be posted to an
/// [`EventLoop`](crate::EventLoop) instead of being requested directly.
pub struct Observable<T> {
    observers: Vec<(ObserverId, Observer<T>)>,
    next_id: u64,
}

impl<T> Default for Observable<T> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Observable<T> {
    /// Registers an observer. It is called as `observer(new, previous)`.
    pub fn observe(&mut self, observer: impl FnMut(&T, &T) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let count = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != count
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Calls every observer.
    pub(crate) fn notify(&mut self, new: &T, previous: &T) {
        for (_, observer) in &mut self.observers {
            observer(new, previous);
        }
    }
}

impl<T> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("observers", &self.observers.len())
            .finish()
    }
}
