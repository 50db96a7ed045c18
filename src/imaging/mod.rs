//! Image processing: center crop, Lanczos resize, lossy WebP.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` |
//! | **Center crop** | [`calculations::calculate_center_crop`] + `crop_imm` |
//! | **Resize → WebP** | Lanczos3 + `webp` encoder |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop geometry (unit testable)
//! - **Parameters**: Fixed sizes, qualities and the variant list
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
pub mod calculations;
pub mod operations;
pub mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::CropRegion;
pub use operations::{GeneratedVariant, center_crop, generate_variants, variant_filename};
pub use params::{
    CROP_HEIGHT, CROP_WIDTH, OUTPUT_VARIANTS, OutputVariant, Quality, THUMB_HEIGHT, THUMB_WIDTH,
};
pub use rust_backend::RustBackend;
