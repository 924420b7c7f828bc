/// ViewportTracker - host-side latch for surface size and rotation changes

use crate::session::{DisplayGeometry, DisplayRotation};

/// Latches surface changes until the next draw
///
/// Surface callbacks and display listeners fire outside the draw loop. The
/// host records them here and, right before drawing, forwards the pending
/// geometry to `FaceArApplication::on_display_geometry_changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportTracker {
    width: i32,
    height: i32,
    changed: bool,
}

impl Default for ViewportTracker {
    fn default() -> Self {
        let geometry = DisplayGeometry::default();
        Self {
            width: geometry.width,
            height: geometry.height,
            changed: false,
        }
    }
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new surface size
    pub fn on_surface_changed(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.changed = true;
    }

    /// Record a display change (rotation)
    pub fn on_display_changed(&mut self) {
        self.changed = true;
    }

    /// Whether a geometry update is waiting
    pub fn is_pending(&self) -> bool {
        self.changed
    }

    /// Take the pending geometry, once per change
    ///
    /// # Arguments
    ///
    /// * `surface_rotation` - Current platform rotation constant (0..=3)
    ///
    /// # Returns
    ///
    /// `Some` if the surface or display changed since the last call.
    pub fn take_pending(&mut self, surface_rotation: i32) -> Option<DisplayGeometry> {
        if !self.changed {
            return None;
        }
        self.changed = false;
        Some(DisplayGeometry {
            rotation: DisplayRotation::from_surface_rotation(surface_rotation),
            width: self.width,
            height: self.height,
        })
    }
}

#[cfg(test)]
#[path = "viewport_tracker_tests.rs"]
mod tests;
