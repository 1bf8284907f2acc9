use gaia_types::{Coordinate, CoordinateBounds};

use crate::completion::Completion;

/// Camera transition handed to the [`MapProvider`](crate::MapProvider).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CameraUpdate {
    /// Pan to the target keeping the zoom level.
    Target(Coordinate),
    /// Pan to the target and change zoom level.
    TargetZoom(Coordinate, f32),
    /// Show the whole region.
    FitBounds(CoordinateBounds),
}

/// A camera change waiting to be dispatched to the provider.
#[derive(Debug)]
pub struct CameraUpdateRequest {
    /// Transition to perform.
    pub update: CameraUpdate,
    /// Logical destination of the camera.
    pub target: Coordinate,
    /// When set, observers are not notified when the move settles.
    pub silent: bool,
    /// Called once with the outcome of the request.
    pub completion: Option<Completion>,
}

impl CameraUpdateRequest {
    /// Creates a request that notifies observers and has no completion.
    pub fn new(update: CameraUpdate, target: Coordinate) -> Self {
        Self {
            update,
            target,
            silent: false,
            completion: None,
        }
    }

    /// Sets if observers are notified about the move.
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Sets the completion.
    pub fn with_completion(mut self, completion: Option<Completion>) -> Self {
        self.completion = completion;
        self
    }
}

/// Parameters of fitting a region into the camera view.
#[derive(Debug)]
pub struct FitRegionOptions {
    /// Do not notify observers about the move.
    pub silent: bool,
    /// If false, the current map center is kept and only the zoom changes.
    pub allow_pan: bool,
    /// Extra space to the south and east of the region as a fraction of its size. Used only when
    /// `allow_pan` is false.
    pub offset_factor: Option<f64>,
    /// Minimum visible diagonal distance in meters.
    pub min_distance: f64,
    /// Maximum visible diagonal distance in meters.
    pub max_distance: f64,
    /// Called once with the outcome of the move.
    pub completion: Option<Completion>,
}

impl Default for FitRegionOptions {
    fn default() -> Self {
        Self {
            silent: false,
            allow_pan: true,
            offset_factor: None,
            min_distance: 0.0,
            max_distance: f64::MAX,
            completion: None,
        }
    }
}

impl FitRegionOptions {
    /// Sets if observers are notified about the move.
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Keeps the current center when `allow_pan` is false.
    pub fn with_allow_pan(mut self, allow_pan: bool) -> Self {
        self.allow_pan = allow_pan;
        self
    }

    /// Sets the south-east offset factor.
    pub fn with_offset_factor(mut self, offset_factor: f64) -> Self {
        self.offset_factor = Some(offset_factor);
        self
    }

    /// Sets the allowed range of the visible diagonal distance in meters.
    pub fn with_distance_range(mut self, min_distance: f64, max_distance: f64) -> Self {
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self
    }

    /// Sets the completion.
    pub fn with_completion(mut self, completion: impl Into<Completion>) -> Self {
        self.completion = Some(completion.into());
        self
    }
}
