use crate::constants::{
    CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_START_DISTANCE, DRAG_RADIANS_PER_PX,
    IDLE_SPIN_PER_FRAME, WHEEL_DISTANCE_PER_UNIT,
};
use glam::Vec2;

#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
}

/// Interaction state of the plant viewer.
///
/// `rotation.x` is the pitch about the X axis and `rotation.y` the yaw about
/// the Y axis, both in radians. They are never wrapped; the trig functions
/// that consume them take care of periodicity.
#[derive(Clone, Copy, Debug)]
pub struct ViewerState {
    pub distance: f32,
    pub rotation: Vec2,
    pub drag: DragState,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            distance: CAMERA_START_DISTANCE,
            rotation: Vec2::ZERO,
            drag: DragState::default(),
        }
    }
}

impl ViewerState {
    pub fn press(&mut self, x: f32, y: f32) {
        self.drag = DragState {
            active: true,
            last: Vec2::new(x, y),
        };
    }

    /// Rotate by the pointer delta since the last recorded position.
    /// Returns false when no drag is in progress.
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        if !self.drag.active {
            return false;
        }
        let pos = Vec2::new(x, y);
        let delta = pos - self.drag.last;
        self.rotation.y += delta.x * DRAG_RADIANS_PER_PX;
        self.rotation.x += delta.y * DRAG_RADIANS_PER_PX;
        self.drag.last = pos;
        true
    }

    pub fn release(&mut self) {
        self.drag.active = false;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.distance = clamp_distance(self.distance + delta_y * WHEEL_DISTANCE_PER_UNIT);
    }

    /// Per-frame idle spin; paused while the user is dragging.
    pub fn idle_step(&mut self) {
        if !self.is_dragging() {
            self.rotation.y += IDLE_SPIN_PER_FRAME;
        }
    }
}

#[inline]
pub fn clamp_distance(distance: f32) -> f32 {
    distance.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE)
}
