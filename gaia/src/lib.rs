//! Gaia decouples an application from the native map rendering provider it uses.
//!
//! The application talks to a [`MapView`], which gives a uniform API for the camera, markers and paths. The native
//! backend is plugged in as a [`MapProvider`] and reports its events back through [`ProviderDelegate`].
//!
//! # Camera updates
//!
//! Native providers animate camera changes asynchronously and misbehave when a new animation starts before the
//! previous one is finished. The [`CameraUpdateScheduler`] serializes the moves:
//!
//! * a request is dispatched right away if the provider is not animating (or the move is not animated),
//! * otherwise it waits in a bounded [`AnimationQueue`], newest first, evicting the oldest waiting request when full,
//! * every idle report of the provider completes the request in flight and dispatches the next one.
//!
//! Every request can carry a [`Completion`] that is called at most once with a [`MoveOutcome`].
//!
//! # Threading
//!
//! All state is owned by the thread that runs the UI event loop. Provider callbacks must be delivered on that
//! thread. Deferred work, such as selecting the highlighted marker after the camera settled, is posted to an
//! [`EventLoop`] that the host runs once per turn.

mod animation_queue;
mod camera;
mod center_state;
mod completion;
mod config;
pub mod error;
mod event_loop;
mod map_path;
mod marker;
mod observable;
mod provider;
mod scheduler;
mod view;

#[cfg(test)]
mod tests;

pub use animation_queue::AnimationQueue;
pub use camera::{CameraUpdate, CameraUpdateRequest, FitRegionOptions};
pub use center_state::{Notification, ObservableCenterState};
pub use completion::{Completion, MoveOutcome};
pub use config::{OverflowPolicy, SchedulerConfig};
pub use event_loop::EventLoop;
pub use map_path::MapPath;
pub use marker::{HighlightableMarker, MarkerHighlighter};
pub use observable::{Observable, ObserverId};
pub use provider::{MapProvider, ProviderDelegate};
pub use scheduler::{CameraUpdateScheduler, IdleOutcome, WillMoveHook};
pub use view::MapView;

// Reexport gaia_types
pub use gaia_types;
