use gaia_types::{Coordinate, Datum};

use crate::observable::Observable;

/// Whether a state update is reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Observers are notified about changes above the thresholds.
    Notify,
    /// The state is updated without notifying anyone.
    Silent,
}

/// Last settled camera center and zoom, together with change channels for them.
///
/// * `camera_position_change` fires for every different camera position reported by the provider.
/// * `camera_zoom_change` fires when the zoom changes by more than `f32::EPSILON`.
/// * `center_position_change` fires when the settled center moves farther than the movement threshold.
#[derive(Debug)]
pub struct ObservableCenterState {
    center: Coordinate,
    zoom: f32,
    camera_position: Coordinate,
    movement_threshold: f64,
    datum: Datum,
    camera_position_change: Observable<Coordinate>,
    camera_zoom_change: Observable<f32>,
    center_position_change: Observable<Coordinate>,
}

impl ObservableCenterState {
    /// Creates the state with no known center. `movement_threshold` is in meters.
    pub fn new(movement_threshold: f64, datum: Datum) -> Self {
        Self {
            center: Coordinate::INVALID,
            zoom: -1.0,
            camera_position: Coordinate::INVALID,
            movement_threshold,
            datum,
            camera_position_change: Observable::default(),
            camera_zoom_change: Observable::default(),
            center_position_change: Observable::default(),
        }
    }

    /// Last settled center. [`Coordinate::INVALID`] until the first update.
    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// Last settled zoom. `-1.0` until the first update.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Minimum movement in meters that is reported as a center change.
    pub fn movement_threshold(&self) -> f64 {
        self.movement_threshold
    }

    /// Returns true if `position` is farther than the movement threshold from the current center.
    ///
    /// Any position counts as a movement while the center is unknown.
    pub fn moved_enough(&self, position: &Coordinate) -> bool {
        !self.center.is_valid()
            || self.center.distance_to(position, &self.datum) > self.movement_threshold
    }

    /// Stores a new settled center.
    pub(crate) fn set_center(&mut self, center: Coordinate, notification: Notification) {
        let moved_enough = self.moved_enough(&center);
        let previous = std::mem::replace(&mut self.center, center);

        if notification == Notification::Notify && moved_enough {
            self.center_position_change.notify(&center, &previous);
        }
    }

    /// Stores a new settled zoom.
    pub(crate) fn set_zoom(&mut self, zoom: f32, notification: Notification) {
        let previous = std::mem::replace(&mut self.zoom, zoom);

        if notification == Notification::Notify && (zoom - previous).abs() > f32::EPSILON {
            self.camera_zoom_change.notify(&zoom, &previous);
        }
    }

    /// Records an intermediate camera position reported while the camera moves.
    pub(crate) fn set_camera_position(&mut self, position: Coordinate, notification: Notification) {
        let previous = std::mem::replace(&mut self.camera_position, position);

        if notification == Notification::Notify && position != previous {
            self.camera_position_change.notify(&position, &previous);
        }
    }

    /// Channel for every camera position change.
    pub fn camera_position_change(&mut self) -> &mut Observable<Coordinate> {
        &mut self.camera_position_change
    }

    /// Channel for zoom changes.
    pub fn camera_zoom_change(&mut self) -> &mut Observable<f32> {
        &mut self.camera_zoom_change
    }

    /// Channel for debounced center changes.
    pub fn center_position_change(&mut self) -> &mut Observable<Coordinate> {
        &mut self.center_position_change
    }
}
