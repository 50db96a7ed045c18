//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take fixed parameters, compute geometry, and call the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{OutputVariant, VariantParams};
use super::calculations::calculate_center_crop;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// A written output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVariant {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Output file name for one variant: `<stem>_<width>.webp`.
pub fn variant_filename(stem: &str, variant: &OutputVariant) -> String {
    format!("{}_{}.webp", stem, variant.width)
}

/// Center-crop `image` to exactly `target`.
///
/// Fails with [`BackendError::InvalidCropSize`] when the image is smaller than
/// the target in either direction.
pub fn center_crop<B: ImageBackend>(
    backend: &B,
    image: &B::Image,
    target: Dimensions,
) -> Result<B::Image> {
    let region = calculate_center_crop(backend.dimensions(image), target)?;
    Ok(backend.crop(image, region))
}

/// Resize `cropped` into every variant and write each as WebP.
///
/// Variants are written in the given order; the first failure stops the rest.
/// Existing files at the output paths are overwritten.
pub fn generate_variants<B: ImageBackend>(
    backend: &B,
    cropped: &B::Image,
    variants: &[OutputVariant],
    stem: &str,
    output_dir: &Path,
) -> Result<Vec<GeneratedVariant>> {
    let mut generated = Vec::with_capacity(variants.len());

    for variant in variants {
        let path = output_dir.join(variant_filename(stem, variant));
        backend.resize_and_encode(
            cropped,
            &VariantParams {
                output: path.clone(),
                width: variant.width,
                height: variant.height,
                quality: variant.quality,
            },
        )?;
        generated.push(GeneratedVariant {
            path,
            width: variant.width,
            height: variant.height,
        });
    }

    Ok(generated)
}
