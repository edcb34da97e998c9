use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::scene::TextureKind;

const FALLBACK_SIZE: u32 = 64;
const CHECKER_CELL: u32 = 8;

/// Decoded RGBA pixels ready for upload.
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Loads a PNG from disk, flipped vertically so image-space (0,0)
    /// lands at the UV origin.
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("failed to load texture {}", path.display()))?;
        let image = image.flipv().to_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self {
            width,
            height,
            pixels: image.into_raw(),
        })
    }

    /// Procedural checkerboard in the given tint. Stands in for any image
    /// that fails to load so rendering continues degraded.
    pub fn checkerboard(tint: [u8; 3]) -> Self {
        let dark = tint.map(|c| c / 2);
        let mut pixels = Vec::with_capacity((FALLBACK_SIZE * FALLBACK_SIZE * 4) as usize);
        for y in 0..FALLBACK_SIZE {
            for x in 0..FALLBACK_SIZE {
                let cell = (x / CHECKER_CELL + y / CHECKER_CELL) % 2 == 0;
                let color = if cell { tint } else { dark };
                pixels.extend_from_slice(&[color[0], color[1], color[2], 255]);
            }
        }
        Self {
            width: FALLBACK_SIZE,
            height: FALLBACK_SIZE,
            pixels,
        }
    }
}

/// Loads every texture the gallery references. Failures are logged and
/// replaced with checkerboards; this function itself never fails.
pub fn load_all(assets_dir: &Path) -> HashMap<TextureKind, TextureData> {
    TextureKind::ALL
        .iter()
        .map(|&kind| {
            let path = assets_dir.join(kind.file_name());
            let data = match TextureData::load(&path) {
                Ok(data) => {
                    info!("loaded texture {}", path.display());
                    data
                }
                Err(err) => {
                    warn!("{err:#}; using checkerboard fallback");
                    TextureData::checkerboard(kind.fallback_tint())
                }
            };
            (kind, data)
        })
        .collect()
}

/// Uploads pixel data as an RGBA8 texture and returns its view.
pub fn upload(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    data: &TextureData,
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width: data.width,
        height: data.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &data.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * data.width),
            rows_per_image: Some(data.height),
        },
        size,
    );

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_is_fully_opaque() {
        let data = TextureData::checkerboard([200, 100, 50]);
        assert_eq!(data.pixels.len(), (data.width * data.height * 4) as usize);
        assert!(data.pixels.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn missing_files_fall_back_for_every_kind() {
        let textures = load_all(Path::new("/nonexistent"));
        assert_eq!(textures.len(), TextureKind::ALL.len());
    }
}
