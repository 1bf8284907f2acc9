use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gaia_types::{latlon, Coordinate};

use crate::camera::CameraUpdate;
use crate::completion::{Completion, MoveOutcome};
use crate::marker::HighlightableMarker;
use crate::provider::MapProvider;

pub type OutcomeLog = Rc<RefCell<Vec<(String, MoveOutcome)>>>;
pub type EventLog = Rc<RefCell<Vec<String>>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Completion that writes its outcome to `log` under `name`.
pub fn recorded(log: &OutcomeLog, name: &str) -> Completion {
    let log = log.clone();
    let name = name.to_string();
    Completion::new(move |outcome| log.borrow_mut().push((name, outcome)))
}

pub fn target_of(update: &CameraUpdate) -> Coordinate {
    match update {
        CameraUpdate::Target(target) | CameraUpdate::TargetZoom(target, _) => *target,
        CameraUpdate::FitBounds(bounds) => bounds.center(),
    }
}

#[derive(Debug)]
pub struct TestProvider {
    pub animating: bool,
    pub zoom: f32,
    pub center: Coordinate,
    pub follows_user: bool,
    pub moves: Vec<(CameraUpdate, bool)>,
}

impl Default for TestProvider {
    fn default() -> Self {
        Self {
            animating: false,
            zoom: 10.0,
            center: latlon!(0.0, 0.0),
            follows_user: false,
            moves: Vec::new(),
        }
    }
}

impl TestProvider {
    /// Latitudes of the targets of all camera moves, in dispatch order.
    pub fn moved_lats(&self) -> Vec<f64> {
        self.moves
            .iter()
            .map(|(update, _)| target_of(update).lat())
            .collect()
    }
}

impl MapProvider for TestProvider {
    fn move_camera(&mut self, update: CameraUpdate, animated: bool) {
        self.moves.push((update, animated));
    }

    fn is_animating(&self) -> bool {
        self.animating
    }

    fn zoom(&self) -> f32 {
        self.zoom
    }

    fn center_position(&self) -> Coordinate {
        self.center
    }

    fn camera_follows_user(&self) -> bool {
        self.follows_user
    }

    fn set_camera_follows_user(&mut self, follows: bool) {
        self.follows_user = follows;
    }
}

pub struct TestMarker {
    position: Coordinate,
    highlight_changes: RefCell<Vec<bool>>,
    select_count: Cell<usize>,
    log: Option<EventLog>,
}

impl TestMarker {
    pub fn new(position: Coordinate) -> Self {
        Self {
            position,
            highlight_changes: RefCell::default(),
            select_count: Cell::new(0),
            log: None,
        }
    }

    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn highlight_changes(&self) -> Vec<bool> {
        self.highlight_changes.borrow().clone()
    }

    pub fn select_count(&self) -> usize {
        self.select_count.get()
    }
}

impl HighlightableMarker for TestMarker {
    fn position(&self) -> Coordinate {
        self.position
    }

    fn set_highlighted(&self, highlighted: bool) {
        self.highlight_changes.borrow_mut().push(highlighted);
    }

    fn select(&self) {
        self.select_count.set(self.select_count.get() + 1);
        if let Some(log) = &self.log {
            log.borrow_mut().push("select".into());
        }
    }
}
