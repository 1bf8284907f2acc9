use std::cell::RefCell;
use std::rc::Rc;

use gaia_types::{Coordinate, Datum};

use crate::event_loop::EventLoop;

/// A marker that can be highlighted when the map center is close to it.
pub trait HighlightableMarker {
    /// Position of the marker.
    fn position(&self) -> Coordinate;
    /// Changes the highlighted look of the marker.
    fn set_highlighted(&self, highlighted: bool);
    /// Selects the marker, for example showing its info window.
    fn select(&self);
}

/// Keeps track of the single highlighted marker.
#[derive(Default)]
pub struct MarkerHighlighter {
    highlighted: Rc<RefCell<Option<Rc<dyn HighlightableMarker>>>>,
}

impl MarkerHighlighter {
    /// Currently highlighted marker.
    pub fn highlighted(&self) -> Option<Rc<dyn HighlightableMarker>> {
        self.highlighted.borrow().clone()
    }

    /// Highlights or un-highlights a marker. Returns true if the marker is highlighted after the call.
    ///
    /// Of two candidates, the one closer to `center` stays highlighted, and the one that loses is
    /// told to remove its highlight.
    pub fn set_highlighted(
        &self,
        marker: &Rc<dyn HighlightableMarker>,
        highlighted: bool,
        center: Coordinate,
        datum: &Datum,
    ) -> bool {
        let mut current = self.highlighted.borrow_mut();

        if !highlighted {
            if current.as_ref().is_some_and(|c| same_marker(c, marker)) {
                *current = None;
            }
            return false;
        }

        if let Some(existing) = current.as_ref() {
            if center.distance_to(&existing.position(), datum)
                <= center.distance_to(&marker.position(), datum)
            {
                return same_marker(existing, marker);
            }

            existing.set_highlighted(false);
        }

        *current = Some(marker.clone());
        true
    }

    /// Posts a task that selects the marker highlighted at the time the task runs.
    pub fn post_select(&self, event_loop: &EventLoop) {
        let highlighted = self.highlighted.clone();
        event_loop.post(move || {
            let marker = highlighted.borrow().clone();
            if let Some(marker) = marker {
                marker.select();
            }
        });
    }
}

fn same_marker(a: &Rc<dyn HighlightableMarker>, b: &Rc<dyn HighlightableMarker>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
