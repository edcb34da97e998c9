use glam::{Mat4, Vec3};
use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

pub const MOVE_SPEED: f32 = 0.25;
pub const STRAFE_SPEED: f32 = MOVE_SPEED / 2.0;
pub const MOUSE_SENSITIVITY: f32 = 0.1;
pub const PITCH_LIMIT: f32 = 89.0;

/// Discrete movement directions produced by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    /// Maps WASD and arrow keys to movement directions.
    pub fn from_key(event: &KeyEvent) -> Option<Self> {
        let PhysicalKey::Code(keycode) = event.physical_key else {
            return None;
        };
        match keycode {
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Self::Forward),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Self::Backward),
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Self::Left),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Self::Right),
            _ => None,
        }
    }
}

/// First-person camera state. Yaw and pitch are stored in degrees; the
/// front vector is always re-derived from them, never mutated directly.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    /// Starting pose: by the west wall, looking down +X into the gallery.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(-23.0, -15.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn front(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.front().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    /// Applies one discrete movement step. Strafing moves at half the
    /// forward speed, matching the original key handling.
    pub fn step(&mut self, direction: MoveDirection) {
        match direction {
            MoveDirection::Forward => self.position += self.front() * MOVE_SPEED,
            MoveDirection::Backward => self.position -= self.front() * MOVE_SPEED,
            MoveDirection::Left => self.position -= self.right() * STRAFE_SPEED,
            MoveDirection::Right => self.position += self.right() * STRAFE_SPEED,
        }
    }

    /// Applies a mouse-look delta. `dx` turns the view, `dy` tilts it and
    /// is expected in the "last-y minus current-y" convention, so moving
    /// the mouse up raises the pitch. Pitch is clamped, never rejected.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * MOUSE_SENSITIVITY;
        self.pitch += dy * MOUSE_SENSITIVITY;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Applies a raw device motion delta, as delivered while the pointer
    /// is grabbed. Device deltas count screen-down as positive y, so the
    /// tilt axis is inverted here to keep mouse-up raising the pitch.
    pub fn look_raw(&mut self, dx: f32, dy: f32) {
        self.look(dx, -dy);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), self.up())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the previous cursor position so absolute cursor coordinates can
/// be turned into deltas. Only used when the pointer cannot be grabbed
/// and cursor-move events are the sole motion source; a grabbed pointer
/// reports raw deltas that need no reference point. The first sample
/// after (re)capture only seeds the reference, preventing a large jump
/// in view direction.
#[derive(Debug, Default, Clone, Copy)]
pub struct MouseLook {
    last: Option<(f32, f32)>,
}

impl MouseLook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds an absolute cursor position and returns the (dx, dy) delta,
    /// or `None` for the reference-seeding first sample.
    pub fn delta(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let delta = self.last.map(|(lx, ly)| (x - lx, ly - y));
        self.last = Some((x, y));
        delta
    }

    /// Forgets the reference point. Called when pointer capture toggles so
    /// the next sample does not register as movement.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
