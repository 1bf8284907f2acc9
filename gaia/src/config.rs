use gaia_types::Datum;

use crate::error::GaiaError;

const DEFAULT_QUEUE_CAPACITY: usize = 3;
const DEFAULT_MOVEMENT_THRESHOLD: f64 = 10.0;

/// What happens to a queued request evicted by a newer one when the queue is full.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPolicy {
    /// The request is dropped without calling its completion.
    #[default]
    Discard,
    /// The completion of the request is called with [`MoveOutcome::Superseded`](crate::MoveOutcome::Superseded).
    Supersede,
}

/// Configuration of a [`CameraUpdateScheduler`](crate::CameraUpdateScheduler).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerConfig {
    queue_capacity: usize,
    movement_threshold: f64,
    overflow_policy: OverflowPolicy,
    datum: Datum,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            movement_threshold: DEFAULT_MOVEMENT_THRESHOLD,
            overflow_policy: OverflowPolicy::default(),
            datum: Datum::WGS84,
        }
    }
}

impl SchedulerConfig {
    /// Maximum number of requests waiting while the provider animates.
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// Sets maximum number of requests waiting while the provider animates.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Sets maximum number of requests waiting while the provider animates.
    pub fn set_queue_capacity(&mut self, capacity: usize) {
        self.queue_capacity = capacity;
    }

    /// Minimum distance in meters between settled positions that is reported as a center change.
    pub fn movement_threshold(&self) -> f64 {
        self.movement_threshold
    }

    /// Sets minimum distance in meters between settled positions that is reported as a center change.
    pub fn with_movement_threshold(mut self, threshold: f64) -> Self {
        self.movement_threshold = threshold;
        self
    }

    /// Sets minimum distance in meters between settled positions that is reported as a center change.
    pub fn set_movement_threshold(&mut self, threshold: f64) {
        self.movement_threshold = threshold;
    }

    /// Handling of requests evicted from a full queue.
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow_policy
    }

    /// Sets handling of requests evicted from a full queue.
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Sets handling of requests evicted from a full queue.
    pub fn set_overflow_policy(&mut self, policy: OverflowPolicy) {
        self.overflow_policy = policy;
    }

    /// Datum used to measure distances.
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Sets datum used to measure distances.
    pub fn with_datum(mut self, datum: Datum) -> Self {
        self.datum = datum;
        self
    }

    /// Sets datum used to measure distances.
    pub fn set_datum(&mut self, datum: Datum) {
        self.datum = datum;
    }

    /// Checks that the configuration can be used by a scheduler.
    pub fn validate(&self) -> Result<(), GaiaError> {
        if self.queue_capacity == 0 {
            return Err(GaiaError::InvalidConfiguration(
                "queue capacity must be at least 1".into(),
            ));
        }

        if !self.movement_threshold.is_finite() || self.movement_threshold < 0.0 {
            return Err(GaiaError::InvalidConfiguration(format!(
                "movement threshold must be a non-negative number, got {}",
                self.movement_threshold
            )));
        }

        Ok(())
    }
}
