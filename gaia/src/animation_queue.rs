use std::collections::VecDeque;

use crate::camera::CameraUpdateRequest;

/// Bounded list of camera requests waiting for the provider to finish animating.
///
/// New requests are pushed to the front and taken from the front, so the most recent intent is
/// dispatched first. When the queue is full the oldest request is evicted from the back.
#[derive(Debug)]
pub struct AnimationQueue {
    entries: VecDeque<CameraUpdateRequest>,
    capacity: usize,
}

impl AnimationQueue {
    /// Creates an empty queue. `capacity` must be at least 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of waiting requests.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of waiting requests.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a request to the front. Returns the request evicted to make room, if any.
    pub fn push(&mut self, request: CameraUpdateRequest) -> Option<CameraUpdateRequest> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_back()
        } else {
            None
        };

        self.entries.push_front(request);
        evicted
    }

    /// Takes the most recently pushed request.
    pub fn pop(&mut self) -> Option<CameraUpdateRequest> {
        self.entries.pop_front()
    }

    /// Iterates from the most recent request to the oldest one.
    pub fn iter(&self) -> impl Iterator<Item = &CameraUpdateRequest> {
        self.entries.iter()
    }
}
