//! Pure Rust decode/resize plus libwebp encoding.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG) | `image::ImageReader` |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → WebP | `webp::Encoder` (lossy, quality 1–100) |
//!
//! The `image` crate's own WebP encoder is lossless-only, so it cannot honor
//! a quality setting.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::CropRegion;
use super::params::{Quality, VariantParams};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

/// Production backend using the `image` and `webp` crates.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk. The file is closed on return.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Encode as lossy WebP, keeping alpha only when the source has it.
fn encode_webp(img: &DynamicImage, quality: Quality) -> Result<Vec<u8>, BackendError> {
    let (width, height) = img.dimensions();
    let encoded = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        webp::Encoder::from_rgba(rgba.as_raw(), width, height)
            .encode_simple(false, quality.value() as f32)
            .map(|mem| mem.to_vec())
    } else {
        let rgb = img.to_rgb8();
        webp::Encoder::from_rgb(rgb.as_raw(), width, height)
            .encode_simple(false, quality.value() as f32)
            .map(|mem| mem.to_vec())
    };
    encoded.map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {e:?}")))
}

impl ImageBackend for RustBackend {
    type Image = DynamicImage;

    fn open(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        load_image(path)
    }

    fn dimensions(&self, image: &DynamicImage) -> Dimensions {
        let (width, height) = image.dimensions();
        Dimensions { width, height }
    }

    fn crop(&self, image: &DynamicImage, region: CropRegion) -> DynamicImage {
        image.crop_imm(region.left, region.top, region.width, region.height)
    }

    fn resize_and_encode(
        &self,
        image: &DynamicImage,
        params: &VariantParams,
    ) -> Result<(), BackendError> {
        let resized = image.resize_exact(params.width, params.height, FilterType::Lanczos3);
        let data = encode_webp(&resized, params.quality)?;
        std::fs::write(&params.output, data)?;
        Ok(())
    }
}
