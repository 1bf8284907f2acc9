use std::fmt::{Debug, Formatter};

use gaia_types::{Coordinate, CoordinateBounds};

use crate::animation_queue::AnimationQueue;
use crate::camera::{CameraUpdate, CameraUpdateRequest, FitRegionOptions};
use crate::center_state::{Notification, ObservableCenterState};
use crate::completion::{Completion, MoveOutcome};
use crate::config::{OverflowPolicy, SchedulerConfig};
use crate::error::GaiaError;
use crate::observable::Observable;
use crate::provider::MapProvider;

/// Hook called right before the camera moves, with `(is_gesture, target)`.
pub type WillMoveHook = Box<dyn FnMut(bool, Option<Coordinate>)>;

/// What happened after the provider reported that the camera settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleOutcome {
    /// Nothing was waiting, the camera rests.
    Settled,
    /// The next queued request was taken from the queue.
    Resumed,
}

#[derive(Debug)]
struct InFlight {
    silent: bool,
    completion: Option<Completion>,
}

/// Serializes camera moves against a provider that animates asynchronously.
///
/// At most one request is in flight. Animated requests issued while the provider is animating wait in a bounded
/// [`AnimationQueue`]; each idle report completes the in-flight request and dispatches the most recent waiting one.
pub struct CameraUpdateScheduler<P> {
    provider: P,
    config: SchedulerConfig,
    queue: AnimationQueue,
    in_flight: Option<InFlight>,
    center: ObservableCenterState,
    will_move: Option<WillMoveHook>,
}

impl<P: Debug> Debug for CameraUpdateScheduler<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraUpdateScheduler")
            .field("provider", &self.provider)
            .field("config", &self.config)
            .field("queue", &self.queue)
            .field("in_flight", &self.in_flight)
            .field("center", &self.center)
            .finish_non_exhaustive()
    }
}

impl<P: MapProvider> CameraUpdateScheduler<P> {
    /// Creates a scheduler with the default configuration.
    pub fn new(provider: P) -> Self {
        Self::from_valid_config(provider, SchedulerConfig::default())
    }

    /// Creates a scheduler with the given configuration.
    pub fn with_config(provider: P, config: SchedulerConfig) -> Result<Self, GaiaError> {
        config.validate()?;
        Ok(Self::from_valid_config(provider, config))
    }

    fn from_valid_config(provider: P, config: SchedulerConfig) -> Self {
        Self {
            provider,
            queue: AnimationQueue::with_capacity(config.queue_capacity()),
            in_flight: None,
            center: ObservableCenterState::new(config.movement_threshold(), config.datum()),
            will_move: None,
            config,
        }
    }

    /// The map provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the map provider.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Configuration of the scheduler.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Requests waiting for the provider.
    pub fn queue(&self) -> &AnimationQueue {
        &self.queue
    }

    /// Returns true if a dispatched request has not settled yet.
    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Settled center and zoom with their change channels.
    pub fn center_state(&self) -> &ObservableCenterState {
        &self.center
    }

    /// Observers of every camera position change.
    pub fn camera_position_change(&mut self) -> &mut Observable<Coordinate> {
        self.center.camera_position_change()
    }

    /// Observers of zoom level changes.
    pub fn camera_zoom_change(&mut self) -> &mut Observable<f32> {
        self.center.camera_zoom_change()
    }

    /// Observers of settled map center changes.
    pub fn center_position_change(&mut self) -> &mut Observable<Coordinate> {
        self.center.center_position_change()
    }

    /// Sets the hook called right before the camera moves.
    pub fn set_will_move(&mut self, hook: Option<WillMoveHook>) {
        self.will_move = hook;
    }

    /// Moves the camera, or queues the move while the provider animates.
    ///
    /// Non-animated requests are always dispatched immediately. A dispatched request supersedes the one in flight.
    pub fn request_move(&mut self, request: CameraUpdateRequest, animated: bool) {
        if animated && self.provider.is_animating() {
            self.enqueue(request);
        } else {
            self.dispatch(request, animated);
        }
    }

    /// Animates the camera to `target`, changing zoom if `zoom` is set.
    ///
    /// If the camera already is at the target with the same zoom, the completion gets
    /// [`MoveOutcome::NoOp`] right away and nothing is dispatched or queued.
    pub fn animate_to_target(
        &mut self,
        target: Coordinate,
        zoom: Option<f32>,
        silent: bool,
        completion: Option<Completion>,
    ) {
        let current_zoom = self.provider.zoom();
        let zoom_changed = (zoom.unwrap_or(current_zoom) - current_zoom).abs() > f32::EPSILON;
        if target == self.provider.center_position() && !zoom_changed {
            log::trace!("Camera is already at {target:?}, skipping the move");
            if let Some(completion) = completion {
                completion.complete(MoveOutcome::NoOp);
            }
            return;
        }

        let update = match zoom {
            Some(zoom) => CameraUpdate::TargetZoom(target, zoom),
            None => CameraUpdate::Target(target),
        };

        let request = CameraUpdateRequest::new(update, target)
            .with_silent(silent)
            .with_completion(completion);
        self.request_move(request, true);
    }

    /// Moves the camera to `target` instantly.
    pub fn set_target(&mut self, target: Coordinate, silent: bool) {
        let request =
            CameraUpdateRequest::new(CameraUpdate::Target(target), target).with_silent(silent);
        self.request_move(request, false);
    }

    /// Animates the camera to show all the coordinates. Does nothing if `coordinates` is empty.
    pub fn request_move_to_fit_region(
        &mut self,
        coordinates: &[Coordinate],
        options: FitRegionOptions,
    ) {
        let Some(bounds) = CoordinateBounds::from_coordinates(coordinates) else {
            log::trace!("No coordinates to fit, skipping the move");
            return;
        };

        self.request_move_to_fit_bounds(bounds, options);
    }

    /// Animates the camera to show the region.
    ///
    /// The region is adjusted in this order: locked to the current center (when panning is not allowed), extended
    /// by the offset factor, and clamped to the distance range.
    pub fn request_move_to_fit_bounds(
        &mut self,
        mut bounds: CoordinateBounds,
        options: FitRegionOptions,
    ) {
        if !options.allow_pan {
            bounds = bounds.derive(self.provider.center_position());

            if let Some(offset_factor) = options.offset_factor {
                bounds = bounds.extend_south_east(offset_factor);
            }
        }

        bounds = bounds.bound_to_distance(
            options.min_distance,
            options.max_distance,
            &self.config.datum(),
        );

        let request = CameraUpdateRequest::new(CameraUpdate::FitBounds(bounds), bounds.center())
            .with_silent(options.silent)
            .with_completion(options.completion);
        self.request_move(request, true);
    }

    /// Animates the camera to show `bounds` as given, moved to `center` if it is set.
    ///
    /// The logical target of the move is the center of the original bounds.
    pub fn request_move_to_bounds(
        &mut self,
        bounds: CoordinateBounds,
        silent: bool,
        center: Option<Coordinate>,
        completion: Option<Completion>,
    ) {
        let translated = center.map_or(bounds, |center| bounds.translate_to(center));
        let request = CameraUpdateRequest::new(CameraUpdate::FitBounds(translated), bounds.center())
            .with_silent(silent)
            .with_completion(completion);
        self.request_move(request, true);
    }

    /// Handles the provider report that the camera settled at `position`.
    ///
    /// Updates the settled state, completes the in-flight request and dispatches the most recent queued one.
    pub fn on_provider_idle(&mut self, position: Coordinate) -> IdleOutcome {
        let notification = match &self.in_flight {
            Some(in_flight) if in_flight.silent => Notification::Silent,
            _ => Notification::Notify,
        };

        // Following the user fires idle events very often, tiny movements are ignored then.
        if self.center.moved_enough(&position) || !self.provider.camera_follows_user() {
            self.center.set_center(position, notification);
        }
        self.center.set_zoom(self.provider.zoom(), notification);

        if let Some(in_flight) = self.in_flight.take() {
            log::debug!("Camera settled at {position:?}");
            if let Some(completion) = in_flight.completion {
                completion.complete(MoveOutcome::Completed);
            }
        }

        match self.queue.pop() {
            Some(next) => {
                log::debug!(
                    "Resuming queued camera update to {:?}, {} more waiting",
                    next.target,
                    self.queue.len()
                );
                self.request_move(next, true);
                IdleOutcome::Resumed
            }
            None => IdleOutcome::Settled,
        }
    }

    /// Handles the provider report that the camera is about to move.
    ///
    /// A user gesture stops following the user location.
    pub fn on_gesture_will_move(&mut self, is_gesture: bool) {
        if !is_gesture {
            return;
        }

        if let Some(hook) = &mut self.will_move {
            hook(true, None);
        }
        self.provider.set_camera_follows_user(false);
    }

    /// Handles an intermediate camera position reported while the camera moves.
    pub fn on_camera_position_changed(&mut self, position: Coordinate) {
        let notification = match &self.in_flight {
            Some(in_flight) if in_flight.silent => Notification::Silent,
            _ => Notification::Notify,
        };
        self.center.set_camera_position(position, notification);
    }

    fn enqueue(&mut self, request: CameraUpdateRequest) {
        log::debug!(
            "Provider is animating, queueing camera update to {:?}",
            request.target
        );

        let Some(evicted) = self.queue.push(request) else {
            return;
        };

        log::debug!(
            "Animation queue is full, dropping camera update to {:?}",
            evicted.target
        );
        if self.config.overflow_policy() == OverflowPolicy::Supersede {
            if let Some(completion) = evicted.completion {
                completion.complete(MoveOutcome::Superseded);
            }
        }
    }

    fn dispatch(&mut self, request: CameraUpdateRequest, animated: bool) {
        let CameraUpdateRequest {
            update,
            target,
            silent,
            completion,
        } = request;

        self.provider.set_camera_follows_user(false);

        if let Some(previous) = self.in_flight.take() {
            log::debug!("Camera update to {target:?} supersedes the one in flight");
            if let Some(completion) = previous.completion {
                completion.complete(MoveOutcome::Superseded);
            }
        }
        self.in_flight = Some(InFlight { silent, completion });

        if let Some(hook) = &mut self.will_move {
            hook(false, Some(target));
        }

        log::debug!("Moving camera to {target:?} (animated: {animated})");
        self.provider.move_camera(update, animated);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use gaia_types::latlon;

    use super::*;
    use crate::tests::{init_logger, recorded, OutcomeLog, TestProvider};

    fn scheduler() -> CameraUpdateScheduler<TestProvider> {
        init_logger();
        CameraUpdateScheduler::new(TestProvider::default())
    }

    fn request(lat: f64, log: &OutcomeLog, name: &str) -> CameraUpdateRequest {
        let target = latlon!(lat, 0.0);
        CameraUpdateRequest::new(CameraUpdate::Target(target), target)
            .with_completion(Some(recorded(log, name)))
    }

    fn outcomes(log: &OutcomeLog) -> Vec<(String, MoveOutcome)> {
        log.borrow().clone()
    }

    fn entry(name: &str, outcome: MoveOutcome) -> (String, MoveOutcome) {
        (name.to_string(), outcome)
    }

    /// Dispatches one request, then issues requests `b`, `c` and `d` while the provider animates.
    fn busy_scheduler(log: &OutcomeLog) -> CameraUpdateScheduler<TestProvider> {
        let mut scheduler = scheduler();
        scheduler.request_move(request(1.0, log, "a"), true);
        scheduler.provider_mut().animating = true;
        scheduler.request_move(request(2.0, log, "b"), true);
        scheduler.request_move(request(3.0, log, "c"), true);
        scheduler.request_move(request(4.0, log, "d"), true);
        scheduler
    }

    #[test]
    fn dispatches_immediately_when_provider_is_free() {
        let mut scheduler = scheduler();
        let hook_calls = Rc::new(RefCell::new(Vec::new()));
        scheduler.set_will_move(Some(Box::new({
            let hook_calls = hook_calls.clone();
            move |is_gesture: bool, target: Option<Coordinate>| {
                hook_calls.borrow_mut().push((is_gesture, target))
            }
        })));
        scheduler.provider_mut().follows_user = true;

        let log = OutcomeLog::default();
        scheduler.request_move(request(1.0, &log, "a"), true);

        assert_eq!(scheduler.provider().moved_lats(), vec![1.0]);
        assert!(scheduler.provider().moves[0].1);
        assert!(scheduler.has_in_flight());
        assert!(scheduler.queue().is_empty());
        assert!(!scheduler.provider().follows_user);
        assert_eq!(*hook_calls.borrow(), vec![(false, Some(latlon!(1.0, 0.0)))]);
        assert!(outcomes(&log).is_empty());
    }

    #[test]
    fn queue_overflow_drops_oldest_silently() {
        let log = OutcomeLog::default();
        let mut scheduler = busy_scheduler(&log);
        scheduler.request_move(request(5.0, &log, "e"), true);

        assert_eq!(scheduler.provider().moved_lats(), vec![1.0]);
        assert!(scheduler.has_in_flight());
        assert_eq!(scheduler.queue().len(), 3);
        let queued: Vec<f64> = scheduler.queue().iter().map(|r| r.target.lat()).collect();
        assert_eq!(queued, vec![5.0, 4.0, 3.0]);
        assert!(outcomes(&log).is_empty());
    }

    #[test]
    fn queue_overflow_can_supersede() {
        init_logger();
        let config = SchedulerConfig::default().with_overflow_policy(OverflowPolicy::Supersede);
        let mut scheduler = CameraUpdateScheduler::with_config(TestProvider::default(), config)
            .expect("invalid config");
        let log = OutcomeLog::default();
        scheduler.provider_mut().animating = true;
        for (lat, name) in [(1.0, "a"), (2.0, "b"), (3.0, "c"), (4.0, "d")] {
            scheduler.request_move(request(lat, &log, name), true);
        }

        assert_eq!(outcomes(&log), vec![entry("a", MoveOutcome::Superseded)]);
        assert!(scheduler.provider().moves.is_empty());
    }

    #[test]
    fn idle_completes_in_dispatch_order_most_recent_first() {
        let log = OutcomeLog::default();
        let mut scheduler = busy_scheduler(&log);
        scheduler.provider_mut().animating = false;

        for _ in 0..3 {
            assert_eq!(
                scheduler.on_provider_idle(latlon!(0.0, 0.0)),
                IdleOutcome::Resumed
            );
        }
        assert_eq!(
            scheduler.on_provider_idle(latlon!(0.0, 0.0)),
            IdleOutcome::Settled
        );

        assert_eq!(scheduler.provider().moved_lats(), vec![1.0, 4.0, 3.0, 2.0]);
        assert_eq!(
            outcomes(&log),
            vec![
                entry("a", MoveOutcome::Completed),
                entry("d", MoveOutcome::Completed),
                entry("c", MoveOutcome::Completed),
                entry("b", MoveOutcome::Completed),
            ]
        );
        assert!(!scheduler.has_in_flight());
        assert!(scheduler.queue().is_empty());
    }

    #[test]
    fn resumed_request_waits_again_if_provider_still_animates() {
        let log = OutcomeLog::default();
        let mut scheduler = busy_scheduler(&log);

        assert_eq!(
            scheduler.on_provider_idle(latlon!(0.0, 0.0)),
            IdleOutcome::Resumed
        );

        assert_eq!(outcomes(&log), vec![entry("a", MoveOutcome::Completed)]);
        assert_eq!(scheduler.provider().moved_lats(), vec![1.0]);
        assert_eq!(scheduler.queue().len(), 3);
        assert!(!scheduler.has_in_flight());
    }

    #[test]
    fn immediate_move_supersedes_in_flight() {
        let log = OutcomeLog::default();
        let mut scheduler = scheduler();
        scheduler.request_move(request(1.0, &log, "a"), true);
        scheduler.provider_mut().animating = true;

        scheduler.request_move(request(2.0, &log, "b"), false);

        assert_eq!(outcomes(&log), vec![entry("a", MoveOutcome::Superseded)]);
        assert_eq!(scheduler.provider().moved_lats(), vec![1.0, 2.0]);
        assert!(!scheduler.provider().moves[1].1);

        scheduler.on_provider_idle(latlon!(2.0, 0.0));
        assert_eq!(
            outcomes(&log),
            vec![
                entry("a", MoveOutcome::Superseded),
                entry("b", MoveOutcome::Completed)
            ]
        );
    }

    #[test]
    fn move_to_current_position_is_noop() {
        let log = OutcomeLog::default();
        let mut scheduler = scheduler();
        scheduler.provider_mut().center = latlon!(5.0, 5.0);

        scheduler.animate_to_target(latlon!(5.0, 5.0), None, false, Some(recorded(&log, "a")));
        scheduler.animate_to_target(
            latlon!(5.0, 5.0),
            Some(10.0),
            false,
            Some(recorded(&log, "b")),
        );

        assert_eq!(
            outcomes(&log),
            vec![entry("a", MoveOutcome::NoOp), entry("b", MoveOutcome::NoOp)]
        );
        assert!(scheduler.provider().moves.is_empty());
        assert!(scheduler.queue().is_empty());
        assert!(!scheduler.has_in_flight());
    }

    #[test]
    fn zoom_change_at_current_position_moves() {
        let mut scheduler = scheduler();
        scheduler.provider_mut().center = latlon!(5.0, 5.0);

        scheduler.animate_to_target(latlon!(5.0, 5.0), Some(12.0), false, None);

        assert_eq!(
            scheduler.provider().moves,
            vec![(CameraUpdate::TargetZoom(latlon!(5.0, 5.0), 12.0), true)]
        );
    }

    #[test]
    fn set_target_is_not_animated() {
        let mut scheduler = scheduler();
        scheduler.provider_mut().animating = true;
        scheduler.set_target(latlon!(3.0, 4.0), false);

        assert_eq!(
            scheduler.provider().moves,
            vec![(CameraUpdate::Target(latlon!(3.0, 4.0)), false)]
        );
    }

    #[test]
    fn silent_move_does_not_notify() {
        let mut scheduler = scheduler();
        let centers = Rc::new(RefCell::new(Vec::new()));
        let zooms = Rc::new(RefCell::new(Vec::new()));
        scheduler.center_position_change().observe({
            let centers = centers.clone();
            move |new, _| centers.borrow_mut().push(*new)
        });
        scheduler.camera_zoom_change().observe({
            let zooms = zooms.clone();
            move |new, _| zooms.borrow_mut().push(*new)
        });

        scheduler.animate_to_target(latlon!(1.0, 1.0), None, true, None);
        scheduler.on_provider_idle(latlon!(1.0, 1.0));

        assert!(centers.borrow().is_empty());
        assert!(zooms.borrow().is_empty());
        assert_eq!(scheduler.center_state().center(), latlon!(1.0, 1.0));
        assert_eq!(scheduler.center_state().zoom(), 10.0);

        scheduler.animate_to_target(latlon!(2.0, 1.0), None, false, None);
        scheduler.on_provider_idle(latlon!(2.0, 1.0));
        assert_eq!(*centers.borrow(), vec![latlon!(2.0, 1.0)]);
    }

    #[test]
    fn idle_positions_closer_than_threshold_are_not_reported() {
        let mut scheduler = scheduler();
        let centers = Rc::new(RefCell::new(Vec::new()));
        scheduler.center_position_change().observe({
            let centers = centers.clone();
            move |new, _| centers.borrow_mut().push(*new)
        });

        scheduler.on_provider_idle(latlon!(10.0, 10.0));
        assert_eq!(centers.borrow().len(), 1);

        // Roughly one meter apart.
        scheduler.on_provider_idle(latlon!(10.00001, 10.0));
        scheduler.on_provider_idle(latlon!(10.0, 10.0));
        assert_eq!(centers.borrow().len(), 1);

        scheduler.provider_mut().follows_user = true;
        scheduler.on_provider_idle(latlon!(10.000005, 10.0));
        assert_eq!(centers.borrow().len(), 1);
        assert_eq!(scheduler.center_state().center(), latlon!(10.0, 10.0));
    }

    #[test]
    fn fit_region_of_nothing_does_nothing() {
        let mut scheduler = scheduler();
        scheduler.request_move_to_fit_region(&[], FitRegionOptions::default());
        assert!(scheduler.provider().moves.is_empty());
    }

    #[test]
    fn fit_region_with_pan_fits_coordinates() {
        let mut scheduler = scheduler();
        let coordinates = [latlon!(1.0, 1.0), latlon!(2.0, 3.0)];
        scheduler.request_move_to_fit_region(&coordinates, FitRegionOptions::default());

        let expected = CoordinateBounds::new(latlon!(1.0, 1.0), latlon!(2.0, 3.0));
        assert_eq!(
            scheduler.provider().moves,
            vec![(CameraUpdate::FitBounds(expected), true)]
        );
    }

    #[test]
    fn fit_region_locks_pan_then_offsets() {
        let log = OutcomeLog::default();
        let mut scheduler = scheduler();
        let coordinates = [latlon!(1.0, 1.0), latlon!(2.0, 2.0)];
        let options = FitRegionOptions::default()
            .with_allow_pan(false)
            .with_offset_factor(0.5)
            .with_completion(recorded(&log, "fit"));
        scheduler.request_move_to_fit_region(&coordinates, options);

        let expected = CoordinateBounds::new(latlon!(-4.0, -2.0), latlon!(2.0, 4.0));
        assert_eq!(
            scheduler.provider().moves,
            vec![(CameraUpdate::FitBounds(expected), true)]
        );

        scheduler.on_provider_idle(latlon!(-1.0, 1.0));
        assert_eq!(outcomes(&log), vec![entry("fit", MoveOutcome::Completed)]);
    }

    #[test]
    fn fit_region_clamps_distance_last() {
        let mut scheduler = scheduler();
        let coordinates = [latlon!(-1.0, -1.0), latlon!(1.0, 1.0)];
        let options = FitRegionOptions::default().with_distance_range(0.0, 50_000.0);
        scheduler.request_move_to_fit_region(&coordinates, options);

        let (update, _) = scheduler.provider().moves[0];
        let CameraUpdate::FitBounds(bounds) = update else {
            panic!("unexpected update {update:?}");
        };
        let datum = scheduler.config().datum();
        assert_abs_diff_eq!(bounds.diagonal_distance(&datum), 50_000.0, epsilon = 50.0);
        assert_abs_diff_eq!(bounds.center(), latlon!(0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn move_to_bounds_translates_to_center() {
        let mut scheduler = scheduler();
        scheduler.provider_mut().animating = true;
        let bounds = CoordinateBounds::new(latlon!(0.0, 0.0), latlon!(2.0, 2.0));
        scheduler.request_move_to_bounds(bounds, false, Some(latlon!(10.0, 10.0)), None);

        let queued = scheduler.queue().iter().next().expect("nothing queued");
        assert_eq!(queued.target, latlon!(1.0, 1.0));
        assert_eq!(
            queued.update,
            CameraUpdate::FitBounds(CoordinateBounds::new(
                latlon!(9.0, 9.0),
                latlon!(11.0, 11.0)
            ))
        );
    }

    #[test]
    fn gesture_stops_following_user() {
        let mut scheduler = scheduler();
        let hook_calls = Rc::new(RefCell::new(Vec::new()));
        scheduler.set_will_move(Some(Box::new({
            let hook_calls = hook_calls.clone();
            move |is_gesture: bool, target: Option<Coordinate>| {
                hook_calls.borrow_mut().push((is_gesture, target))
            }
        })));
        scheduler.provider_mut().follows_user = true;

        scheduler.on_gesture_will_move(false);
        assert!(scheduler.provider().follows_user);
        assert!(hook_calls.borrow().is_empty());

        scheduler.on_gesture_will_move(true);
        assert!(!scheduler.provider().follows_user);
        assert_eq!(*hook_calls.borrow(), vec![(true, None)]);
    }

    #[test]
    fn camera_positions_are_muted_during_silent_moves() {
        let mut scheduler = scheduler();
        let positions = Rc::new(RefCell::new(Vec::new()));
        scheduler.camera_position_change().observe({
            let positions = positions.clone();
            move |new, _| positions.borrow_mut().push(*new)
        });

        scheduler.on_camera_position_changed(latlon!(1.0, 1.0));
        scheduler.set_target(latlon!(2.0, 2.0), true);
        scheduler.on_camera_position_changed(latlon!(1.5, 1.5));
        scheduler.on_provider_idle(latlon!(2.0, 2.0));
        scheduler.on_camera_position_changed(latlon!(3.0, 3.0));

        assert_eq!(
            *positions.borrow(),
            vec![latlon!(1.0, 1.0), latlon!(3.0, 3.0)]
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SchedulerConfig::default().with_queue_capacity(0);
        assert_matches!(
            CameraUpdateScheduler::with_config(TestProvider::default(), config),
            Err(GaiaError::InvalidConfiguration(_))
        );
    }
}
