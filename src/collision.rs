use glam::Vec3;

/// Per-step travel below this distance on an axis is ignored when picking
/// the axis to resolve, so brushing along a face does not snap the camera.
pub const COLLISION_THRESHOLD: f32 = 0.12;

/// The walkable room volume: X and Z clamped to the half extent, Y pinned
/// to a fixed eye height. This is a ground-locked walkthrough, not flight.
#[derive(Debug, Clone, Copy)]
pub struct RoomBounds {
    pub half_extent: f32,
    pub eye_height: f32,
}

impl RoomBounds {
    pub const fn new(half_extent: f32, eye_height: f32) -> Self {
        Self {
            half_extent,
            eye_height,
        }
    }

    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(-self.half_extent, self.half_extent),
            self.eye_height,
            position.z.clamp(-self.half_extent, self.half_extent),
        )
    }
}

/// Axis-aligned exclusion zone on the horizontal plane. The camera may
/// never come to rest inside one.
#[derive(Debug, Clone, Copy)]
pub struct Footprint {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Footprint {
    pub const fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Square footprint centered on (x, z).
    pub const fn centered(x: f32, z: f32, half_size: f32) -> Self {
        Self::new(x - half_size, x + half_size, z - half_size, z + half_size)
    }

    pub fn contains(&self, position: Vec3) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.z >= self.min_z
            && position.z <= self.max_z
    }

    fn nearer_x_face(&self, x: f32) -> f32 {
        if (x - self.min_x).abs() < (x - self.max_x).abs() {
            self.min_x
        } else {
            self.max_x
        }
    }

    fn nearer_z_face(&self, z: f32) -> f32 {
        if (z - self.min_z).abs() < (z - self.max_z).abs() {
            self.min_z
        } else {
            self.max_z
        }
    }
}

/// Pushes `position` back out of every footprint it landed inside.
///
/// For each penetrated footprint, the camera snaps to the nearer face on
/// the axis whose travel since `previous` exceeds the collision threshold,
/// trying X before Z. This is a greedy per-axis resolution, not a swept
/// solver; very large steps can tunnel, which is an accepted limitation.
pub fn resolve_obstacles(obstacles: &[Footprint], previous: Vec3, position: Vec3) -> Vec3 {
    let x_travel = (position.x - previous.x).abs();
    let z_travel = (position.z - previous.z).abs();

    let mut resolved = position;
    for footprint in obstacles {
        if !footprint.contains(resolved) {
            continue;
        }
        if x_travel > COLLISION_THRESHOLD {
            resolved.x = footprint.nearer_x_face(resolved.x);
        } else if z_travel > COLLISION_THRESHOLD {
            resolved.z = footprint.nearer_z_face(resolved.z);
        }
    }
    resolved
}
