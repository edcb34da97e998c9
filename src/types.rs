use glam::Mat4;

use crate::camera::Camera;
use crate::lighting::{Material, PointLight, SpotParams, Spotlight};

/// Spotlight slots in the GPU uniform block. The CPU-side collection is
/// variable length; anything beyond this many fixtures is ignored at
/// packing time.
pub const MAX_SPOTLIGHTS: usize = 4;

/// Interleaved vertex as uploaded to the GPU: position, normalized byte
/// color, UV, normal. Color carries a fourth byte because wgpu has no
/// three-wide unorm vertex format.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [u8; 4],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [u8; 3], uv: [f32; 2], normal: [f32; 3]) -> Self {
        Self {
            position,
            color: [color[0], color[1], color[2], 255],
            uv,
            normal,
        }
    }

    pub const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Unorm8x4,
        2 => Float32x2,
        3 => Float32x3,
    ];

    pub const fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-frame uniform block: camera matrices plus the full light setup.
/// Field order and padding follow WGSL uniform alignment rules.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub _pad0: f32,
    pub light_position: [f32; 3],
    pub _pad1: f32,
    pub light_ambient: [f32; 3],
    pub _pad2: f32,
    pub light_diffuse: [f32; 3],
    pub _pad3: f32,
    pub light_specular: [f32; 3],
    pub _pad4: f32,
    pub spot_positions: [[f32; 4]; MAX_SPOTLIGHTS],
    pub spot_ambient: [f32; 3],
    pub _pad5: f32,
    pub spot_diffuse: [f32; 3],
    pub _pad6: f32,
    pub spot_specular: [f32; 3],
    pub _pad7: f32,
    pub spot_target: [f32; 3],
    pub spot_cutoff: f32,
    pub object_specular: [f32; 3],
    pub shininess: f32,
    pub spot_count: u32,
    pub _pad8: [u32; 3],
}

impl FrameUniforms {
    pub fn new(
        proj: Mat4,
        camera: &Camera,
        point: &PointLight,
        spotlights: &[Spotlight],
        spot_params: &SpotParams,
        material: &Material,
    ) -> Self {
        let mut spot_positions = [[0.0; 4]; MAX_SPOTLIGHTS];
        let spot_count = spotlights.len().min(MAX_SPOTLIGHTS);
        for (slot, spotlight) in spot_positions.iter_mut().zip(spotlights) {
            *slot = spotlight.position.extend(0.0).to_array();
        }

        Self {
            proj: proj.to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            camera_position: camera.position.to_array(),
            _pad0: 0.0,
            light_position: point.position.to_array(),
            _pad1: 0.0,
            light_ambient: point.ambient.to_array(),
            _pad2: 0.0,
            light_diffuse: point.diffuse.to_array(),
            _pad3: 0.0,
            light_specular: point.specular.to_array(),
            _pad4: 0.0,
            spot_positions,
            spot_ambient: spot_params.ambient.to_array(),
            _pad5: 0.0,
            spot_diffuse: spot_params.diffuse.to_array(),
            _pad6: 0.0,
            spot_specular: spot_params.specular.to_array(),
            _pad7: 0.0,
            spot_target: spot_params.target.to_array(),
            spot_cutoff: spot_params.cutoff_cos,
            object_specular: material.specular.to_array(),
            shininess: material.shininess,
            spot_count: spot_count as u32,
            _pad8: [0; 3],
        }
    }
}

/// Per-object uniform block: model transform and its inverse-transpose.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
}

impl ObjectUniforms {
    pub fn new(model: Mat4, normal: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
        }
    }
}

/// The perspective projection the gallery is always rendered with.
pub fn projection_matrix(width: u32, height: u32) -> Mat4 {
    let aspect = width.max(1) as f32 / height.max(1) as f32;
    Mat4::perspective_rh(60_f32.to_radians(), aspect, 0.1, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // These sizes must match the WGSL struct declarations in
    // shaders/gallery.wgsl exactly; a drift here corrupts every uniform.
    #[test]
    fn uniform_blocks_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 368);
        assert_eq!(std::mem::size_of::<ObjectUniforms>(), 128);
        assert_eq!(std::mem::size_of::<Vertex>(), 36);
    }

    #[test]
    fn extra_spotlights_are_dropped_at_packing_time() {
        use crate::lighting::{Material, PointLight, SpotParams, Spotlight};
        use glam::Vec3;

        let spotlights: Vec<Spotlight> = (0..6)
            .map(|i| Spotlight {
                position: Vec3::new(i as f32, 20.0, 0.0),
            })
            .collect();
        let uniforms = FrameUniforms::new(
            Mat4::IDENTITY,
            &crate::camera::Camera::new(),
            &PointLight {
                position: Vec3::ZERO,
                ambient: Vec3::splat(0.2),
                diffuse: Vec3::splat(0.8),
                specular: Vec3::splat(0.5),
            },
            &spotlights,
            &SpotParams::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, Vec3::NEG_Y, 7.5),
            &Material {
                specular: Vec3::splat(0.5),
                shininess: 8.0,
            },
        );
        assert_eq!(uniforms.spot_count, MAX_SPOTLIGHTS as u32);
    }
}