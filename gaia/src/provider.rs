use gaia_types::Coordinate;

use crate::camera::CameraUpdate;

/// Native map rendering backend driven by Gaia.
///
/// All methods are called from the thread that owns the map view. Camera moves are fire-and-forget: the provider
/// reports that the camera settled by calling [`ProviderDelegate::on_idle`] on the owning view.
pub trait MapProvider {
    /// Starts moving the camera.
    fn move_camera(&mut self, update: CameraUpdate, animated: bool);
    /// Returns true while a camera animation is running.
    fn is_animating(&self) -> bool;
    /// Current zoom level.
    fn zoom(&self) -> f32;
    /// Geographic position of the current map center.
    fn center_position(&self) -> Coordinate;
    /// Returns true if the camera follows the user location.
    fn camera_follows_user(&self) -> bool;
    /// Enables or disables following the user location.
    fn set_camera_follows_user(&mut self, follows: bool);
}

/// Callbacks a map provider delivers to the view that owns it.
///
/// The callbacks must be delivered on the thread that owns the view. Providers animating on other threads have to
/// marshal their events back first.
pub trait ProviderDelegate {
    /// The camera animation settled at `position`.
    fn on_idle(&mut self, position: Coordinate);
    /// The camera is about to move, either by a user gesture or programmatically.
    fn on_gesture_will_move(&mut self, is_gesture: bool);
    /// The camera passed `position` while moving.
    fn on_camera_position_changed(&mut self, position: Coordinate);
}
