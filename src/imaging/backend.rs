//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the four operations the pipeline needs:
//! open, dimensions, crop, and resize-and-encode. Images stay in memory
//! between steps; only `open` reads and only `resize_and_encode` writes.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend). Tests use the
//! recording `MockBackend` below.

use super::calculations::CropRegion;
use super::params::VariantParams;
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid crop size: cannot crop to {requested} from {actual}")]
    InvalidCropSize {
        requested: Dimensions,
        actual: Dimensions,
    },
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for image processing backends.
///
/// `Image` is the backend's in-memory representation. It is owned by the
/// caller and released when dropped, so a failed step never leaks a handle.
pub trait ImageBackend {
    type Image;

    /// Read and decode an image from disk.
    fn open(&self, path: &Path) -> Result<Self::Image, BackendError>;

    /// Get image dimensions.
    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Copy a sub-rectangle into a new image. `region` is already validated
    /// to lie inside the image.
    fn crop(&self, image: &Self::Image, region: CropRegion) -> Self::Image;

    /// Resize to exactly `params.width` x `params.height` and write as WebP.
    fn resize_and_encode(
        &self,
        image: &Self::Image,
        params: &VariantParams,
    ) -> Result<(), BackendError>;
}
