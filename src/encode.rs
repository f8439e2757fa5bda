use crate::models::MAX_ICON_SIZE;
use crate::render::render_icon;
use anyhow::{bail, Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use log::{debug, info};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Summary of a successful write, used for the confirmation message.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub path: PathBuf,
    pub sizes: Vec<u32>,
    pub bytes: usize,
}

impl Report {
    /// Sizes formatted as `256x256, 128x128, ...`.
    pub fn size_list(&self) -> String {
        self.sizes
            .iter()
            .map(|s| format!("{s}x{s}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn validate_sizes(sizes: &[u32]) -> Result<()> {
    if sizes.is_empty() {
        bail!("no icon sizes requested");
    }
    for &size in sizes {
        if size == 0 || size > MAX_ICON_SIZE {
            bail!("icon size {size} is outside 1..={MAX_ICON_SIZE}");
        }
    }
    Ok(())
}

/// Renders every size independently, keeping the requested order.
pub fn render_all(sizes: &[u32]) -> Vec<RgbaImage> {
    sizes.iter().map(|&size| render_icon(size)).collect()
}

/// Encodes square RGBA canvases into one ICO container. Each entry is stored
/// as 32-bit PNG; the first image is the primary one.
pub fn encode_icon(images: &[RgbaImage]) -> Result<Vec<u8>> {
    let sizes: Vec<u32> = images.iter().map(|image| image.width()).collect();
    validate_sizes(&sizes)?;

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for image in images {
        let (width, height) = image.dimensions();
        if width != height {
            bail!("icon canvas must be square, got {width}x{height}");
        }
        let icon_image = IconImage::from_rgba_data(width, height, image.as_raw().clone());
        let entry = IconDirEntry::encode_as_png(&icon_image)
            .with_context(|| format!("Failed to encode {width}x{height} icon image"))?;
        debug!("Encoded {width}x{height} entry ({} bytes)", entry.data().len());
        icon_dir.add_entry(entry);
    }

    let mut buffer = Cursor::new(Vec::new());
    icon_dir
        .write(&mut buffer)
        .context("Failed to serialize icon directory")?;
    Ok(buffer.into_inner())
}

/// Renders `sizes`, bundles them and writes the container to `path`.
///
/// The container is fully encoded before the file is touched, so an encoding
/// failure leaves nothing behind.
pub fn write_icon(path: impl AsRef<Path>, sizes: &[u32]) -> Result<Report> {
    let path = path.as_ref();
    validate_sizes(sizes)?;
    info!("Generating {} with sizes {:?}", path.display(), sizes);

    let images = render_all(sizes);
    let bytes = encode_icon(&images)?;
    fs::write(path, &bytes)
        .with_context(|| format!("Failed to write icon file {}", path.display()))?;

    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(Report {
        path: path.to_path_buf(),
        sizes: sizes.to_vec(),
        bytes: bytes.len(),
    })
}
