use std::rc::Rc;

use gaia_types::{Coordinate, CoordinateBounds};

use crate::camera::FitRegionOptions;
use crate::center_state::ObservableCenterState;
use crate::completion::Completion;
use crate::config::SchedulerConfig;
use crate::error::GaiaError;
use crate::event_loop::EventLoop;
use crate::marker::{HighlightableMarker, MarkerHighlighter};
use crate::observable::Observable;
use crate::provider::{MapProvider, ProviderDelegate};
use crate::scheduler::{CameraUpdateScheduler, IdleOutcome};

/// Map view backed by a native [`MapProvider`].
///
/// Camera changes go through a [`CameraUpdateScheduler`], so they never overlap on the provider. The provider
/// events must be given to the view through its [`ProviderDelegate`] implementation. When the camera comes to
/// rest, the highlighted marker is selected in the next turn of the [`EventLoop`], after the observers of the
/// center and zoom have been notified.
pub struct MapView<P> {
    scheduler: CameraUpdateScheduler<P>,
    highlighter: MarkerHighlighter,
    event_loop: EventLoop,
}

impl<P: MapProvider> MapView<P> {
    /// Creates a view with the default scheduler configuration.
    pub fn new(provider: P, event_loop: EventLoop) -> Self {
        Self {
            scheduler: CameraUpdateScheduler::new(provider),
            highlighter: MarkerHighlighter::default(),
            event_loop,
        }
    }

    /// Creates a view with a custom scheduler configuration.
    pub fn with_config(
        provider: P,
        config: SchedulerConfig,
        event_loop: EventLoop,
    ) -> Result<Self, GaiaError> {
        Ok(Self {
            scheduler: CameraUpdateScheduler::with_config(provider, config)?,
            highlighter: MarkerHighlighter::default(),
            event_loop,
        })
    }

    /// Camera scheduler of the view.
    pub fn scheduler(&self) -> &CameraUpdateScheduler<P> {
        &self.scheduler
    }

    /// Mutable access to the camera scheduler.
    pub fn scheduler_mut(&mut self) -> &mut CameraUpdateScheduler<P> {
        &mut self.scheduler
    }

    /// The map provider.
    pub fn provider(&self) -> &P {
        self.scheduler.provider()
    }

    /// Mutable access to the map provider.
    pub fn provider_mut(&mut self) -> &mut P {
        self.scheduler.provider_mut()
    }

    /// Event loop deferred tasks are posted to.
    pub fn event_loop(&self) -> &EventLoop {
        &self.event_loop
    }

    /// Current zoom level of the provider.
    pub fn zoom(&self) -> f32 {
        self.provider().zoom()
    }

    /// Current map center of the provider.
    pub fn center_position(&self) -> Coordinate {
        self.provider().center_position()
    }

    /// Returns true if the camera follows the user location.
    pub fn camera_follows_user(&self) -> bool {
        self.provider().camera_follows_user()
    }

    /// Enables or disables following the user location.
    pub fn set_camera_follows_user(&mut self, follows: bool) {
        self.provider_mut().set_camera_follows_user(follows);
    }

    /// Settled center and zoom.
    pub fn center_state(&self) -> &ObservableCenterState {
        self.scheduler.center_state()
    }

    /// Observers of every camera position change.
    pub fn camera_position_change(&mut self) -> &mut Observable<Coordinate> {
        self.scheduler.camera_position_change()
    }

    /// Observers of zoom level changes.
    pub fn camera_zoom_change(&mut self) -> &mut Observable<f32> {
        self.scheduler.camera_zoom_change()
    }

    /// Observers of settled map center changes.
    pub fn center_position_change(&mut self) -> &mut Observable<Coordinate> {
        self.scheduler.center_position_change()
    }

    /// Sets the closure called right before the camera moves, with `(is_gesture, target)`.
    pub fn set_will_move(&mut self, hook: impl FnMut(bool, Option<Coordinate>) + 'static) {
        self.scheduler.set_will_move(Some(Box::new(hook)));
    }

    /// Removes the closure set by [`MapView::set_will_move`].
    pub fn clear_will_move(&mut self) {
        self.scheduler.set_will_move(None);
    }

    /// Moves the camera to `target` without animation.
    pub fn set_target(&mut self, target: Coordinate, silent: bool) {
        self.scheduler.set_target(target, silent);
    }

    /// Animates the camera to `target`, changing the zoom level if `zoom` is set.
    pub fn animate_to_target(
        &mut self,
        target: Coordinate,
        zoom: Option<f32>,
        silent: bool,
        completion: Option<Completion>,
    ) {
        self.scheduler
            .animate_to_target(target, zoom, silent, completion);
    }

    /// Zooms the camera to the region containing all the coordinates.
    pub fn zoom_to_region(&mut self, coordinates: &[Coordinate], options: FitRegionOptions) {
        self.scheduler
            .request_move_to_fit_region(coordinates, options);
    }

    /// Zooms the camera to the bounds, moved to `center` if it is set.
    pub fn zoom_to_bounds(
        &mut self,
        bounds: CoordinateBounds,
        silent: bool,
        center: Option<Coordinate>,
        completion: Option<Completion>,
    ) {
        self.scheduler
            .request_move_to_bounds(bounds, silent, center, completion);
    }

    /// The marker that is currently highlighted.
    pub fn highlighted_marker(&self) -> Option<Rc<dyn HighlightableMarker>> {
        self.highlighter.highlighted()
    }

    /// Sets or removes the marker highlight. Returns true if the marker is highlighted after the call.
    ///
    /// Only one marker is highlighted at a time: the one closest to the current map center.
    pub fn set_marker_highlighted(
        &mut self,
        marker: &Rc<dyn HighlightableMarker>,
        highlighted: bool,
    ) -> bool {
        let center = self.center_position();
        let datum = self.scheduler.config().datum();
        self.highlighter
            .set_highlighted(marker, highlighted, center, &datum)
    }
}

impl<P: MapProvider> ProviderDelegate for MapView<P> {
    fn on_idle(&mut self, position: Coordinate) {
        let outcome = self.scheduler.on_provider_idle(position);
        if outcome == IdleOutcome::Settled {
            self.highlighter.post_select(&self.event_loop);
        }
    }

    fn on_gesture_will_move(&mut self, is_gesture: bool) {
        self.scheduler.on_gesture_will_move(is_gesture);
    }

    fn on_camera_position_changed(&mut self, position: Coordinate) {
        self.scheduler.on_camera_position_changed(position);
    }
}
