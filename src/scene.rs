use std::ops::Range;

use glam::Vec3;

use crate::collision::{Footprint, RoomBounds};
use crate::lighting::{Material, PointLight, SpotParams, Spotlight};
use crate::transform::Placement;
use crate::types::Vertex;

pub const ROOM_SCALE: f32 = 50.0;
pub const ROOM_HALF_EXTENT: f32 = 23.0;
pub const EYE_HEIGHT: f32 = -15.0;
pub const STAND_HALF_SIZE: f32 = 2.5;

const WHITE: [u8; 3] = [255, 255, 255];

/// Which image each draw uses. Variants map 1:1 to the asset file names;
/// a missing file degrades to a procedural checkerboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    FrontWall,
    BackWall,
    SideWall,
    Ceiling,
    Floor,
    Wood,
    Frame,
    MonaLisa,
    StarryNight,
    GreatWave,
    BirthOfVenus,
    PearlEarring,
    TheScream,
}

impl TextureKind {
    pub const ALL: [TextureKind; 13] = [
        TextureKind::FrontWall,
        TextureKind::BackWall,
        TextureKind::SideWall,
        TextureKind::Ceiling,
        TextureKind::Floor,
        TextureKind::Wood,
        TextureKind::Frame,
        TextureKind::MonaLisa,
        TextureKind::StarryNight,
        TextureKind::GreatWave,
        TextureKind::BirthOfVenus,
        TextureKind::PearlEarring,
        TextureKind::TheScream,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            TextureKind::FrontWall => "CubeMap-FrontWall.png",
            TextureKind::BackWall => "CubeMap-BackWall.png",
            TextureKind::SideWall => "CubeMap-LeftRightWall.png",
            TextureKind::Ceiling => "CubeMap-Ceiling.png",
            TextureKind::Floor => "CubeMap-Floor.png",
            TextureKind::Wood => "PLATFORM-Wood.png",
            TextureKind::Frame => "PAINTING-Frame.png",
            TextureKind::MonaLisa => "PAINTING-Mona-Lisa.png",
            TextureKind::StarryNight => "PAINTING-The-Starry-Night.png",
            TextureKind::GreatWave => "PAINTING-The-Great-Wave-off-Kanagawa.png",
            TextureKind::BirthOfVenus => "PAINTING-The-Birth-of-Venus.png",
            TextureKind::PearlEarring => "PAINTING-Girl-with-a-Pearl-Earring.png",
            TextureKind::TheScream => "PAINTING-The-Scream.png",
        }
    }

    /// Tint used by the fallback checkerboard when the image is missing.
    pub const fn fallback_tint(self) -> [u8; 3] {
        match self {
            TextureKind::FrontWall | TextureKind::BackWall | TextureKind::SideWall => {
                [200, 200, 190]
            }
            TextureKind::Ceiling => [230, 230, 230],
            TextureKind::Floor => [120, 110, 100],
            TextureKind::Wood => [140, 95, 55],
            TextureKind::Frame => [160, 130, 60],
            TextureKind::MonaLisa => [110, 120, 70],
            TextureKind::StarryNight => [50, 70, 140],
            TextureKind::GreatWave => [70, 110, 160],
            TextureKind::BirthOfVenus => [190, 170, 140],
            TextureKind::PearlEarring => [60, 50, 40],
            TextureKind::TheScream => [200, 120, 60],
        }
    }
}

/// One draw call: an index range into the shared buffers, a placement and
/// a texture. Objects sharing a placement (a painting's face and frame)
/// simply carry identical transforms.
#[derive(Debug, Clone)]
pub struct ObjectDesc {
    pub label: &'static str,
    pub indices: Range<u32>,
    pub placement: Placement,
    pub texture: TextureKind,
}

/// The whole gallery: GPU geometry, draw list, collision data and lights.
pub struct Scene {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub objects: Vec<ObjectDesc>,
    pub room: RoomBounds,
    pub obstacles: Vec<Footprint>,
    pub point_light: PointLight,
    pub spotlights: Vec<Spotlight>,
    pub spot_params: SpotParams,
    pub material: Material,
}

/// Accumulates quads into the shared vertex/index buffers and remembers
/// index ranges for the draw list.
struct MeshBuilder {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Appends one quad as two triangles. Corners are given in the fan
    /// order of the source geometry: uv (0,0), (0,1), (1,1), (1,0).
    fn quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3]) {
        let base = self.vertices.len() as u32;
        let uvs = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
        for (corner, uv) in corners.iter().zip(uvs) {
            self.vertices.push(Vertex::new(*corner, WHITE, uv, normal));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    fn range(&self, start: u32) -> Range<u32> {
        start..self.indices.len() as u32
    }

    fn mark(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Unit room cube with inward-facing normals, one quad per wall so each
/// wall can bind its own texture.
fn room_faces(mesh: &mut MeshBuilder) -> [Range<u32>; 6] {
    let front = mesh.mark();
    mesh.quad(
        [
            [-0.5, -0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, -0.5, -0.5],
        ],
        [0.0, 0.0, 1.0],
    );
    let front = mesh.range(front);

    let back = mesh.mark();
    mesh.quad(
        [
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [-0.5, -0.5, 0.5],
        ],
        [0.0, 0.0, -1.0],
    );
    let back = mesh.range(back);

    let left = mesh.mark();
    mesh.quad(
        [
            [-0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [-0.5, 0.5, -0.5],
            [-0.5, -0.5, -0.5],
        ],
        [1.0, 0.0, 0.0],
    );
    let left = mesh.range(left);

    let right = mesh.mark();
    mesh.quad(
        [
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, 0.5, 0.5],
            [0.5, -0.5, 0.5],
        ],
        [-1.0, 0.0, 0.0],
    );
    let right = mesh.range(right);

    let ceiling = mesh.mark();
    mesh.quad(
        [
            [-0.5, 0.5, -0.5],
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [0.5, 0.5, -0.5],
        ],
        [0.0, -1.0, 0.0],
    );
    let ceiling = mesh.range(ceiling);

    let floor = mesh.mark();
    mesh.quad(
        [
            [0.5, -0.5, -0.5],
            [0.5, -0.5, 0.5],
            [-0.5, -0.5, 0.5],
            [-0.5, -0.5, -0.5],
        ],
        [0.0, 1.0, 0.0],
    );
    let floor = mesh.range(floor);

    [front, back, left, right, ceiling, floor]
}

/// Display stand: a box stretched to y in [-0.8, 0.8] with outward normals
/// and no bottom face (it sits on the floor).
fn stand_mesh(mesh: &mut MeshBuilder) -> Range<u32> {
    let start = mesh.mark();
    mesh.quad(
        [
            [-0.5, -0.8, -0.5],
            [-0.5, 0.8, -0.5],
            [0.5, 0.8, -0.5],
            [0.5, -0.8, -0.5],
        ],
        [0.0, 0.0, -1.0],
    );
    mesh.quad(
        [
            [0.5, -0.8, 0.5],
            [0.5, 0.8, 0.5],
            [-0.5, 0.8, 0.5],
            [-0.5, -0.8, 0.5],
        ],
        [0.0, 0.0, 1.0],
    );
    mesh.quad(
        [
            [-0.5, -0.8, 0.5],
            [-0.5, 0.8, 0.5],
            [-0.5, 0.8, -0.5],
            [-0.5, -0.8, -0.5],
        ],
        [-1.0, 0.0, 0.0],
    );
    mesh.quad(
        [
            [0.5, -0.8, -0.5],
            [0.5, 0.8, -0.5],
            [0.5, 0.8, 0.5],
            [0.5, -0.8, 0.5],
        ],
        [1.0, 0.0, 0.0],
    );
    mesh.quad(
        [
            [-0.5, 0.8, -0.5],
            [-0.5, 0.8, 0.5],
            [0.5, 0.8, 0.5],
            [0.5, 0.8, -0.5],
        ],
        [0.0, 1.0, 0.0],
    );
    mesh.range(start)
}

/// Painting canvas: a single front-facing quad, `half_width` 0.5 for the
/// square variant and 0.75 for the wide one.
fn painting_face(mesh: &mut MeshBuilder, half_width: f32) -> Range<u32> {
    let start = mesh.mark();
    mesh.quad(
        [
            [-half_width, -0.5, -0.5],
            [-half_width, 0.5, -0.5],
            [half_width, 0.5, -0.5],
            [half_width, -0.5, -0.5],
        ],
        [0.0, 0.0, -1.0],
    );
    mesh.range(start)
}

/// Painting frame: the four sides running from the canvas plane back to
/// the wall plane at z = 0.
fn painting_frame(mesh: &mut MeshBuilder, half_width: f32) -> Range<u32> {
    let start = mesh.mark();
    mesh.quad(
        [
            [-half_width, -0.5, 0.0],
            [-half_width, 0.5, 0.0],
            [-half_width, 0.5, -0.5],
            [-half_width, -0.5, -0.5],
        ],
        [-1.0, 0.0, 0.0],
    );
    mesh.quad(
        [
            [half_width, -0.5, -0.5],
            [half_width, 0.5, -0.5],
            [half_width, 0.5, 0.0],
            [half_width, -0.5, 0.0],
        ],
        [1.0, 0.0, 0.0],
    );
    mesh.quad(
        [
            [-half_width, 0.5, -0.5],
            [-half_width, 0.5, 0.0],
            [half_width, 0.5, 0.0],
            [half_width, 0.5, -0.5],
        ],
        [0.0, 1.0, 0.0],
    );
    mesh.quad(
        [
            [half_width, -0.5, -0.5],
            [half_width, -0.5, 0.0],
            [-half_width, -0.5, 0.0],
            [-half_width, -0.5, -0.5],
        ],
        [0.0, -1.0, 0.0],
    );
    mesh.range(start)
}

/// The four stand footprints on the XZ plane; the camera may not enter
/// any of them.
pub fn stand_footprints() -> Vec<Footprint> {
    [(-10.0, 10.0), (10.0, 10.0), (-10.0, -10.0), (10.0, -10.0)]
        .iter()
        .map(|&(x, z)| Footprint::centered(x, z, STAND_HALF_SIZE))
        .collect()
}

/// Builds the complete gallery. All geometry, placements and lights are
/// fixed at startup and never change afterwards.
pub fn create_gallery_scene() -> Scene {
    let mut mesh = MeshBuilder::new();

    let walls = room_faces(&mut mesh);
    let stand = stand_mesh(&mut mesh);
    let square_face = painting_face(&mut mesh, 0.5);
    let square_frame = painting_frame(&mut mesh, 0.5);
    let wide_face = painting_face(&mut mesh, 0.75);
    let wide_frame = painting_frame(&mut mesh, 0.75);

    let room_placement = Placement::new(Vec3::ZERO, Vec3::splat(ROOM_SCALE));
    let [front, back, left, right, ceiling, floor] = walls;

    let mut objects = vec![
        object("front wall", front, room_placement, TextureKind::FrontWall),
        object("back wall", back, room_placement, TextureKind::BackWall),
        object("left wall", left, room_placement, TextureKind::SideWall),
        object("right wall", right, room_placement, TextureKind::SideWall),
        object("ceiling", ceiling, room_placement, TextureKind::Ceiling),
        object("floor", floor, room_placement, TextureKind::Floor),
    ];

    for &(label, x, z) in &[
        ("stand 1", -10.0, 10.0),
        ("stand 2", 10.0, 10.0),
        ("stand 3", -10.0, -10.0),
        ("stand 4", 10.0, -10.0),
    ] {
        objects.push(object(
            label,
            stand.clone(),
            Placement::new(Vec3::new(x, -21.0, z), Vec3::splat(5.0)),
            TextureKind::Wood,
        ));
    }

    // Paintings keep the original wall placements: two solo canvases on
    // the north/south walls, two pairs on the east/west walls.
    let paintings: [(&'static str, Placement, bool, TextureKind); 6] = [
        (
            "solo vertical",
            Placement::new(Vec3::new(0.0, 0.0, 24.0), Vec3::new(17.5, 17.5, 2.0))
                .rotated(Vec3::Z, 90.0),
            false,
            TextureKind::MonaLisa,
        ),
        (
            "solo horizontal",
            Placement::new(Vec3::new(0.0, 0.0, -24.0), Vec3::new(17.5, 17.5, 2.0))
                .rotated(Vec3::Y, 180.0),
            false,
            TextureKind::StarryNight,
        ),
        (
            "west horizontal",
            Placement::new(Vec3::new(-24.0, 7.5, 5.0), Vec3::new(12.5, 12.5, 2.0))
                .rotated(Vec3::Y, 270.0),
            false,
            TextureKind::GreatWave,
        ),
        (
            "west square",
            Placement::new(Vec3::new(-24.0, -7.5, -7.5), Vec3::new(12.5, 12.5, 2.0))
                .rotated(Vec3::Y, 270.0),
            true,
            TextureKind::BirthOfVenus,
        ),
        (
            "east vertical",
            Placement::new(Vec3::new(24.0, 5.0, -7.5), Vec3::new(12.5, 12.5, 2.0))
                .rotated(Vec3::Y, 90.0)
                .rotated(Vec3::Z, 90.0),
            false,
            TextureKind::TheScream,
        ),
        (
            "east square",
            Placement::new(Vec3::new(24.0, -7.5, 7.5), Vec3::new(12.5, 12.5, 2.0))
                .rotated(Vec3::Y, 90.0),
            true,
            TextureKind::PearlEarring,
        ),
    ];

    for (label, placement, square, artwork) in paintings {
        let (face, frame) = if square {
            (square_face.clone(), square_frame.clone())
        } else {
            (wide_face.clone(), wide_frame.clone())
        };
        objects.push(object(label, face, placement, artwork));
        objects.push(object(label, frame, placement, TextureKind::Frame));
    }

    Scene {
        vertices: mesh.vertices,
        indices: mesh.indices,
        objects,
        room: RoomBounds::new(ROOM_HALF_EXTENT, EYE_HEIGHT),
        obstacles: stand_footprints(),
        point_light: PointLight {
            position: Vec3::ZERO,
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::splat(0.5),
        },
        spotlights: vec![
            Spotlight {
                position: Vec3::new(-10.0, 20.0, 10.0),
            },
            Spotlight {
                position: Vec3::new(10.0, 20.0, 10.0),
            },
            Spotlight {
                position: Vec3::new(-10.0, 20.0, -10.0),
            },
            Spotlight {
                position: Vec3::new(10.0, 20.0, -10.0),
            },
        ],
        spot_params: SpotParams::new(
            Vec3::new(0.2, 0.2, 0.1),
            Vec3::new(0.8, 0.8, 0.4),
            Vec3::splat(0.5),
            Vec3::NEG_Y,
            7.5,
        ),
        material: Material {
            specular: Vec3::splat(0.5),
            shininess: 8.0,
        },
    }
}

fn object(
    label: &'static str,
    indices: Range<u32>,
    placement: Placement,
    texture: TextureKind,
) -> ObjectDesc {
    ObjectDesc {
        label,
        indices,
        placement,
        texture,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_has_room_stands_and_paintings() {
        let scene = create_gallery_scene();
        // 6 walls + 4 stands + 6 paintings x (face + frame)
        assert_eq!(scene.objects.len(), 22);
        assert_eq!(scene.obstacles.len(), 4);
        assert_eq!(scene.spotlights.len(), 4);
    }

    #[test]
    fn index_ranges_stay_within_the_buffers() {
        let scene = create_gallery_scene();
        let total = scene.indices.len() as u32;
        for obj in &scene.objects {
            assert!(obj.indices.end <= total, "{} overruns", obj.label);
            assert!(obj.indices.start < obj.indices.end);
        }
        let max_index = scene.indices.iter().max().copied().unwrap();
        assert!((max_index as usize) < scene.vertices.len());
    }

    #[test]
    fn room_normals_point_inward() {
        let scene = create_gallery_scene();
        // Front wall sits at z = -0.5 locally; its normal faces +Z.
        let front = &scene.objects[0];
        let first = scene.indices[front.indices.start as usize] as usize;
        assert_eq!(scene.vertices[first].normal, [0.0, 0.0, 1.0]);
    }
}
